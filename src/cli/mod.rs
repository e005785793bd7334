//! Command line interface

use std::io;

use clap::{Parser, Subcommand};
use rentcart::{
    cart::CartError, config::AppConfig, config::ConfigError, receipt::ReceiptError,
    session::SessionError,
};
use thiserror::Error;

mod cart;
mod quote;
mod session;

#[derive(Debug, Parser)]
#[command(name = "rentcart", about = "Rental quotes and a persistent cart", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Quote renting a product over a date range
    Quote(quote::QuoteArgs),

    /// Inspect or change the cart
    Cart(cart::CartCommand),

    /// Inspect or change the signed-in user
    Session(session::SessionCommand),
}

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

impl Cli {
    pub(crate) fn run(self, out: impl io::Write) -> Result<(), CliError> {
        match self.command {
            Commands::Quote(args) => quote::run(&self.config, args, out),
            Commands::Cart(command) => cart::run(&self.config, command, out),
            Commands::Session(command) => session::run(&self.config, command, out),
        }
    }
}
