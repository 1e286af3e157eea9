//! DASHBOARD command - Static finance overview.
//!
//! Renders sample figures only; nothing is fetched from the server.

use anyhow::Result;
use clap::Args;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use super::{HumanReadable, format_dollars, output};

/// Arguments for the dashboard command.
#[derive(Args)]
pub struct DashboardArgs {}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthFigures {
    pub month: &'static str,
    pub revenue: i64,
    pub expenses: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpenseShare {
    pub category: &'static str,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthProfit {
    pub month: &'static str,
    pub profit: i64,
    pub margin: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Transaction {
    pub id: u32,
    pub date: &'static str,
    pub description: &'static str,
    pub amount: i64,
    pub category: &'static str,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > 0
    }
}

pub const REVENUE: [MonthFigures; 6] = [
    MonthFigures { month: "Jan", revenue: 45000, expenses: 32000 },
    MonthFigures { month: "Feb", revenue: 52000, expenses: 35000 },
    MonthFigures { month: "Mar", revenue: 48000, expenses: 33000 },
    MonthFigures { month: "Apr", revenue: 61000, expenses: 38000 },
    MonthFigures { month: "May", revenue: 55000, expenses: 36000 },
    MonthFigures { month: "Jun", revenue: 67000, expenses: 40000 },
];

pub const EXPENSE_BREAKDOWN: [ExpenseShare; 5] = [
    ExpenseShare { category: "Salaries", amount: 25000 },
    ExpenseShare { category: "Marketing", amount: 12000 },
    ExpenseShare { category: "Operations", amount: 8000 },
    ExpenseShare { category: "Technology", amount: 15000 },
    ExpenseShare { category: "Other", amount: 5000 },
];

pub const PROFIT: [MonthProfit; 6] = [
    MonthProfit { month: "Jan", profit: 13000, margin: 28.9 },
    MonthProfit { month: "Feb", profit: 17000, margin: 32.7 },
    MonthProfit { month: "Mar", profit: 15000, margin: 31.3 },
    MonthProfit { month: "Apr", profit: 23000, margin: 37.7 },
    MonthProfit { month: "May", profit: 19000, margin: 34.5 },
    MonthProfit { month: "Jun", profit: 27000, margin: 40.3 },
];

pub const TRANSACTIONS: [Transaction; 8] = [
    Transaction { id: 1, date: "2024-06-15", description: "Client Payment - Project Alpha", amount: 15000, category: "Revenue" },
    Transaction { id: 2, date: "2024-06-14", description: "Office Rent", amount: -5000, category: "Operations" },
    Transaction { id: 3, date: "2024-06-13", description: "Marketing Campaign", amount: -3500, category: "Marketing" },
    Transaction { id: 4, date: "2024-06-12", description: "Client Payment - Project Beta", amount: 12000, category: "Revenue" },
    Transaction { id: 5, date: "2024-06-11", description: "Software License", amount: -2500, category: "Technology" },
    Transaction { id: 6, date: "2024-06-10", description: "Consulting Fee", amount: 8000, category: "Revenue" },
    Transaction { id: 7, date: "2024-06-09", description: "Employee Salaries", amount: -25000, category: "Salaries" },
    Transaction { id: 8, date: "2024-06-08", description: "Client Payment - Project Gamma", amount: 18000, category: "Revenue" },
];

/// Period-over-period changes, in percent.
pub const REVENUE_CHANGE: f64 = 12.5;
pub const EXPENSES_CHANGE: f64 = -5.2;
pub const PROFIT_CHANGE: f64 = 18.3;
pub const MARGIN_CHANGE: f64 = 2.4;

const BAR_WIDTH: usize = 40;

/// Headline figures for the whole period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub revenue: i64,
    pub expenses: i64,
    pub profit: i64,
    /// Profit as a percentage of revenue, one decimal.
    pub profit_margin: f64,
}

impl Totals {
    pub fn compute(months: &[MonthFigures]) -> Self {
        let revenue: i64 = months.iter().map(|m| m.revenue).sum();
        let expenses: i64 = months.iter().map(|m| m.expenses).sum();
        let profit = revenue - expenses;
        let profit_margin = if revenue == 0 {
            0.0
        } else {
            round1(profit as f64 / revenue as f64 * 100.0)
        };

        Self {
            revenue,
            expenses,
            profit,
            profit_margin,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of each expense category in percent, one decimal.
pub fn expense_percentages(breakdown: &[ExpenseShare]) -> Vec<(&'static str, f64)> {
    let total: i64 = breakdown.iter().map(|e| e.amount).sum();
    breakdown
        .iter()
        .map(|e| {
            let share = if total == 0 {
                0.0
            } else {
                round1(e.amount as f64 / total as f64 * 100.0)
            };
            (e.category, share)
        })
        .collect()
}

fn bar(value: i64, max: i64) -> String {
    let cells = if max <= 0 {
        0
    } else {
        (value.max(0) as f64 / max as f64 * BAR_WIDTH as f64).round() as usize
    };
    "█".repeat(cells)
}

/// Colored `+12.5%` / `-5.2%` text. `rising_is_good` picks which direction is green.
fn change(percent: f64, rising_is_good: bool) -> ColoredString {
    let text = if percent > 0.0 {
        format!("▲ +{percent}%")
    } else {
        format!("▼ {percent}%")
    };
    if (percent > 0.0) == rising_is_good {
        text.green()
    } else {
        text.red()
    }
}

/// Everything the dashboard shows, also used for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub totals: Totals,
    pub revenue: &'static [MonthFigures],
    pub profit: &'static [MonthProfit],
    pub expense_breakdown: &'static [ExpenseShare],
    pub transactions: &'static [Transaction],
}

impl Dashboard {
    pub fn sample() -> Self {
        Self {
            totals: Totals::compute(&REVENUE),
            revenue: &REVENUE,
            profit: &PROFIT,
            expense_breakdown: &EXPENSE_BREAKDOWN,
            transactions: &TRANSACTIONS,
        }
    }
}

impl HumanReadable for Dashboard {
    fn print_human(&self) {
        println!("{}", "Finance Dashboard".green().bold());
        println!("{}", "Overview of your financial performance".dimmed());
        println!("{}", "=".repeat(80));
        println!();

        let totals = &self.totals;
        let cards = [
            ("Total Revenue", format_dollars(totals.revenue), change(REVENUE_CHANGE, true)),
            ("Total Expenses", format_dollars(totals.expenses), change(EXPENSES_CHANGE, false)),
            ("Net Profit", format_dollars(totals.profit), change(PROFIT_CHANGE, true)),
            ("Profit Margin", format!("{:.1}%", totals.profit_margin), change(MARGIN_CHANGE, true)),
        ];
        for (title, value, delta) in cards {
            println!(
                "  {:<16} {:>10}  {} {}",
                title.cyan(),
                value.bold(),
                delta,
                "from last period".dimmed()
            );
        }
        println!();

        println!("{}", "Revenue vs Expenses".bold());
        let max = self
            .revenue
            .iter()
            .map(|m| m.revenue.max(m.expenses))
            .max()
            .unwrap_or(0);
        for month in self.revenue {
            println!("  {} {} {}", month.month, bar(month.revenue, max).blue(), format_dollars(month.revenue));
            println!("      {} {}", bar(month.expenses, max).magenta(), format_dollars(month.expenses));
        }
        println!("  {} {}  {} {}", "█".blue(), "Revenue", "█".magenta(), "Expenses");
        println!();

        println!("{}", "Profit Trend".bold());
        let max_profit = self.profit.iter().map(|p| p.profit).max().unwrap_or(0);
        for month in self.profit {
            println!(
                "  {} {:<40} {:>8}  {:>5.1}%",
                month.month,
                bar(month.profit, max_profit).green(),
                format_dollars(month.profit),
                month.margin
            );
        }
        println!();

        println!("{}", "Expense Breakdown".bold());
        let max_expense = self.expense_breakdown.iter().map(|e| e.amount).max().unwrap_or(0);
        for (share, (_, percent)) in self
            .expense_breakdown
            .iter()
            .zip(expense_percentages(self.expense_breakdown))
        {
            println!(
                "  {:<12} {:<40} {:>8}  {:>5.1}%",
                share.category,
                bar(share.amount, max_expense).yellow(),
                format_dollars(share.amount),
                percent
            );
        }
        println!();

        println!("{}", "Recent Transactions".bold());
        println!(
            "{}",
            format!("  {:<12}{:<34}{:<14}{:>10}", "Date", "Description", "Category", "Amount").dimmed()
        );
        for tx in self.transactions {
            let amount = if tx.is_income() {
                format!("+{}", format_dollars(tx.amount)).green()
            } else {
                format_dollars(tx.amount).red()
            };
            println!(
                "  {:<12}{:<34}{:<14}{:>10}",
                tx.date, tx.description, tx.category, amount
            );
        }
    }
}

/// Execute the dashboard command.
pub fn execute(human: bool, _args: DashboardArgs) -> Result<()> {
    output(&Dashboard::sample(), human)
}
