//! Session commands

use std::io;

use clap::{Args, Subcommand};
use rentcart::{
    config::AppConfig,
    session::{SessionContext, SessionUser},
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Debug, Subcommand)]
enum SessionSubcommand {
    /// Show the signed-in user
    Show,

    /// Record a user as signed in
    SignIn(SignInArgs),

    /// Forget the signed-in user
    SignOut,
}

#[derive(Debug, Args)]
struct SignInArgs {
    /// User id
    #[arg(long)]
    id: u64,

    /// Display name
    #[arg(long)]
    name: String,

    /// Contact email
    #[arg(long)]
    email: String,

    /// Contact phone number
    #[arg(long)]
    phone: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    birthday: Option<String>,
}

pub(crate) fn run(
    config: &AppConfig,
    command: SessionCommand,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let mut session = SessionContext::load(config.storage());

    match command.command {
        SessionSubcommand::Show => {}
        SessionSubcommand::SignIn(args) => session.sign_in(SessionUser {
            id: args.id,
            name: args.name,
            email: args.email,
            phone: args.phone,
            birthday: args.birthday,
            image_url: None,
            image_id: None,
        })?,
        SessionSubcommand::SignOut => session.sign_out()?,
    }

    match session.current() {
        Some(user) => writeln!(out, "signed in as {} <{}> (id {})", user.name, user.email, user.id)?,
        None => writeln!(out, "not signed in")?,
    }

    Ok(())
}
