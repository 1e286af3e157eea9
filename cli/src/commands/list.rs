//! LIST command - List items with filters and pagination.

use std::collections::HashSet;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use items_client::{ApiClient, ItemsApi};
use items_core::{Item, ItemId, ListQuery, Page, Pagination};

use super::{HumanReadable, format_price, output, stock_label, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = items_core::types::DEFAULT_PAGE)]
    pub page: u32,

    /// Items per page
    #[arg(long, default_value_t = items_core::types::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Only items in this category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,

    /// Only items whose name or description contains this text
    #[arg(long)]
    pub search: Option<String>,
}

impl From<ListArgs> for ListQuery {
    fn from(args: ListArgs) -> Self {
        Self {
            page: args.page,
            limit: args.limit,
            category: args.category,
            search: args.search,
        }
    }
}

impl HumanReadable for Page<Item> {
    fn print_human(&self) {
        print_table(&self.data, &HashSet::new(), false);
        print_footer(self.data.len(), Some(&self.pagination));
    }
}

/// Print items as a table.
///
/// Rows whose id is in `pending` are marked as not yet saved. With
/// `numbered`, a leading column gives each row a 1-based reference.
pub fn print_table(items: &[Item], pending: &HashSet<ItemId>, numbered: bool) {
    if items.is_empty() {
        println!("  {}", "No items found. Create your first item to get started.".dimmed());
        return;
    }

    let header = format!(
        "{:<4}{:<28} {:<32} {:>10}  {:<16} {}",
        if numbered { "#" } else { "" },
        "Name",
        "Description",
        "Price",
        "Category",
        "Status"
    );
    println!("{}", header.bold());
    println!("{}", "-".repeat(104));

    for (index, item) in items.iter().enumerate() {
        let reference = if numbered {
            (index + 1).to_string()
        } else {
            String::new()
        };
        let row = format!(
            "{:<4}{:<28} {:<32} {:>10}  {:<16} ",
            reference,
            truncate(&item.name, 28),
            truncate(item.description.as_deref().unwrap_or("-"), 32),
            format_price(item.price),
            truncate(&item.category, 16),
        );

        if pending.contains(&item.id) {
            println!("{}{} {}", row.dimmed(), stock_label(item.in_stock), "(saving...)".yellow());
        } else {
            println!("{}{}", row, stock_label(item.in_stock));
        }
    }
}

/// Print the "Showing X of Y items" line.
pub fn print_footer(shown: usize, pagination: Option<&Pagination>) {
    let Some(pagination) = pagination else {
        return;
    };

    println!();
    let mut line = format!("Showing {} of {} items", shown, pagination.total);
    if pagination.total_pages > 1 {
        line.push_str(&format!(
            " (Page {} of {})",
            pagination.page, pagination.total_pages
        ));
    }
    println!("{}", line.dimmed());
}

/// Execute the list command.
pub async fn execute(client: &ApiClient, human: bool, args: ListArgs) -> Result<()> {
    let page = client.list(&args.into()).await?;
    output(&page, human)
}
