//! CREATE command - Add an item to the catalog.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use items_client::{ApiClient, ItemsApi};
use items_core::CreateItemInput;

use super::output;

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Item name (1-100 characters)
    #[arg(long)]
    pub name: String,

    /// Price, greater than zero
    #[arg(long)]
    pub price: f64,

    /// Category
    #[arg(long)]
    pub category: String,

    /// Optional description (up to 500 characters)
    #[arg(long)]
    pub description: Option<String>,

    /// Mark the item as out of stock
    #[arg(long)]
    pub out_of_stock: bool,
}

impl From<CreateArgs> for CreateItemInput {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            price: args.price,
            category: args.category,
            in_stock: !args.out_of_stock,
        }
    }
}

/// Execute the create command.
pub async fn execute(client: &ApiClient, human: bool, args: CreateArgs) -> Result<()> {
    let item = client.create(&args.into()).await?;

    if human {
        println!("{}", "Item created successfully!".green().bold());
        println!();
    }
    output(&item, human)
}
