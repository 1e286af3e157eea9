//! GET command - Show a single item.

use anyhow::Result;
use clap::Args;
use items_client::{ApiClient, ItemsApi};
use items_core::ItemId;

use super::output;

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Item ID
    pub id: ItemId,
}

/// Execute the get command.
pub async fn execute(client: &ApiClient, human: bool, args: GetArgs) -> Result<()> {
    let item = client.get(args.id).await?;
    output(&item, human)
}
