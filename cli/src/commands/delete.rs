//! DELETE command - Remove an item.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use items_client::{ApiClient, ItemsApi};
use items_core::{ItemId, MessageResponse};

use super::{HumanReadable, confirm, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Item ID to delete
    pub id: ItemId,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl HumanReadable for MessageResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Execute the delete command.
pub async fn execute(client: &ApiClient, human: bool, args: DeleteArgs) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes && !confirm(&format!("Delete item {}?", args.id))? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let message = client.delete(args.id).await?;
    output(&MessageResponse::success(message), human)
}
