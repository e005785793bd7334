//! Cart commands

use std::io;

use clap::{Args, Subcommand};
use rentcart::{
    cart::CartStore, config::AppConfig, items::LineItem, prices::Price, products::ProductId,
    receipt::write_cart,
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart contents and total
    Show,

    /// Add a product, merging with an existing line
    Add(AddArgs),

    /// Overwrite a line's quantity
    Set(SetArgs),

    /// Remove a product's line
    Remove(RemoveArgs),

    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    #[arg(long)]
    id: ProductId,

    /// Product name
    #[arg(long)]
    name: String,

    /// Product image URL
    #[arg(long, default_value = "")]
    image_url: String,

    /// Price per unit
    #[arg(long)]
    price: Price,

    /// Units to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Product id
    #[arg(long)]
    id: ProductId,

    /// New quantity, stored as given
    #[arg(long, allow_negative_numbers = true)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct RemoveArgs {
    /// Product id
    #[arg(long)]
    id: ProductId,
}

pub(crate) fn run(
    config: &AppConfig,
    command: CartCommand,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let currency = config.currency()?;
    let mut store = CartStore::load(config.storage());

    match command.command {
        CartSubcommand::Show => {}
        CartSubcommand::Add(args) => {
            let item = LineItem::new(args.id, args.name, args.image_url, args.price)
                .with_quantity(args.quantity);

            store.add(item)?;
        }
        CartSubcommand::Set(args) => store.set_quantity(args.id, args.quantity)?,
        CartSubcommand::Remove(args) => store.remove(args.id)?,
        CartSubcommand::Clear => store.clear()?,
    }

    write_cart(&mut out, store.cart(), currency)?;

    Ok(())
}
