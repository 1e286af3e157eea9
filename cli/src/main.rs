//! Command-line interface for the items catalog.
//!
//! This CLI tool provides commands for all item operations:
//! - health: Check that the server is up
//! - list: List items with filters and pagination
//! - get: Show a single item
//! - create: Add an item
//! - update: Change some fields of an item
//! - delete: Remove an item
//! - manage: Interactive item manager with optimistic updates
//! - dashboard: Static finance dashboard
//! - buttons: Button style showcase
//!
//! Configuration via environment:
//! - ITEMS_URL: Base URL of the items server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use items_client::{ApiClient, ClientError, DEFAULT_BASE_URL};

use commands::{
    buttons::ButtonsArgs, create::CreateArgs, dashboard::DashboardArgs, delete::DeleteArgs,
    get::GetArgs, health::HealthArgs, list::ListArgs, manage::ManageArgs, update::UpdateArgs,
};

/// Items catalog CLI
///
/// Manage catalog items from the command line. Prints JSON by default;
/// pass --human for formatted output.
#[derive(Parser)]
#[command(name = "items")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Items server URL
    #[arg(long, env = "ITEMS_URL", default_value = DEFAULT_BASE_URL, global = true)]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health(HealthArgs),

    /// List items
    List(ListArgs),

    /// Show a single item
    Get(GetArgs),

    /// Create a new item
    Create(CreateArgs),

    /// Update an existing item
    Update(UpdateArgs),

    /// Delete an item
    Delete(DeleteArgs),

    /// Interactive item manager
    Manage(ManageArgs),

    /// Show the finance dashboard
    Dashboard(DashboardArgs),

    /// Show the button style showcase
    Buttons(ButtonsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match ApiClient::new(&cli.url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let human = cli.human;
    let result = match cli.command {
        Commands::Health(args) => commands::health::execute(&client, human, args).await,
        Commands::List(args) => commands::list::execute(&client, human, args).await,
        Commands::Get(args) => commands::get::execute(&client, human, args).await,
        Commands::Create(args) => commands::create::execute(&client, human, args).await,
        Commands::Update(args) => commands::update::execute(&client, human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, human, args).await,
        Commands::Manage(args) => commands::manage::execute(client, args).await,
        Commands::Dashboard(args) => commands::dashboard::execute(human, args),
        Commands::Buttons(args) => commands::buttons::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(ClientError::Api { details, .. }) = e.downcast_ref::<ClientError>() {
            for detail in details {
                eprintln!("  {} {}", format!("{}:", detail.field).cyan(), detail.message);
            }
        }
        std::process::exit(1);
    }
}
