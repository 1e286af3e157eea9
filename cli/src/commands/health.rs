//! HEALTH command - Check that the server is up.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use items_client::{ApiClient, ItemsApi};
use items_core::HealthResponse;

use super::{HumanReadable, format_timestamp, output};

/// Arguments for the health command.
#[derive(Args)]
pub struct HealthArgs {}

impl HumanReadable for HealthResponse {
    fn print_human(&self) {
        println!("{} {}", "Server status:".green().bold(), self.status);
        println!("  {} {}", "Time:".cyan(), format_timestamp(&self.timestamp));
        println!("  {} {:.1}s", "Uptime:".cyan(), self.uptime);
    }
}

/// Execute the health command.
pub async fn execute(client: &ApiClient, human: bool, _args: HealthArgs) -> Result<()> {
    let response = client.health().await?;
    output(&response, human)
}
