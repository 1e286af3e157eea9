//! Command implementations for the items CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod buttons;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod manage;
pub mod update;

use anyhow::Result;
use colored::Colorize;
use items_core::Item;
use serde::Serialize;

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl HumanReadable for Item {
    fn print_human(&self) {
        println!("{}", self.name.bold());
        println!("  {} {}", "ID:".cyan(), self.id);
        if let Some(description) = &self.description {
            println!("  {} {}", "Description:".cyan(), description);
        }
        println!("  {} {}", "Price:".cyan(), format_price(self.price));
        println!("  {} {}", "Category:".cyan(), self.category);
        println!("  {} {}", "Status:".cyan(), stock_label(self.in_stock));
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created_at));
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&self.updated_at));
    }
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Format an item price with two decimals, e.g. `$999.99`.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format a whole-dollar amount with thousands separators, e.g. `$45,000`.
pub fn format_dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Colored stock badge.
pub fn stock_label(in_stock: bool) -> colored::ColoredString {
    if in_stock {
        "In Stock".green()
    } else {
        "Out of Stock".yellow()
    }
}

/// Ask a yes/no question on stderr. Anything but `y` means no.
pub fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    eprint!("{} {} [y/N] ", "Warning:".yellow().bold(), prompt);
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dollars_groups_thousands() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(45000), "$45,000");
        assert_eq!(format_dollars(1234567), "$1,234,567");
        assert_eq!(format_dollars(-5000), "-$5,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(999.99), "$999.99");
        assert_eq!(format_price(5.0), "$5.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a rather long description", 10), "a rathe...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
