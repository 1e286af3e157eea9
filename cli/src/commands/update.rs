//! UPDATE command - Change some fields of an item.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use items_client::{ApiClient, ItemsApi};
use items_core::{ItemId, UpdateItemInput};

use super::output;

/// Arguments for the update command. Only the given fields change.
#[derive(Args)]
pub struct UpdateArgs {
    /// Item ID
    pub id: ItemId,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<f64>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Stock status (true or false)
    #[arg(long)]
    pub in_stock: Option<bool>,
}

/// Execute the update command.
pub async fn execute(client: &ApiClient, human: bool, args: UpdateArgs) -> Result<()> {
    let changes = UpdateItemInput {
        name: args.name,
        description: args.description,
        price: args.price,
        category: args.category,
        in_stock: args.in_stock,
    };
    if changes.is_empty() {
        bail!("nothing to update; pass at least one of --name, --price, --category, --description, --in-stock");
    }

    let item = client.update(args.id, &changes).await?;

    if human {
        println!("{}", "Item updated successfully!".green().bold());
        println!();
    }
    output(&item, human)
}
