//! MANAGE command - Interactive item manager.
//!
//! A line-oriented counterpart of the item table and form: the list is
//! redrawn after every action, new and deleted rows change immediately and
//! are reconciled once the server answers.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use items_client::{ApiClient, ItemsApi, ItemsHook, ItemsState};
use items_core::types::DEFAULT_LIMIT;
use items_core::{CreateItemInput, ItemId, ListQuery, Schema, UpdateItemInput, ValidationErrors};
use serde_json::{Map, Value};

use super::confirm;
use super::list::{print_footer, print_table};

/// Arguments for the manage command.
#[derive(Args)]
pub struct ManageArgs {
    /// Items per page
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Initial category filter
    #[arg(long)]
    pub category: Option<String>,

    /// Initial search text
    #[arg(long)]
    pub search: Option<String>,
}

const HELP: &str = "\
Commands:
  add name=<text> price=<number> category=<text> [description=<text>] [inStock=false]
  edit <row|id> [name=..] [price=..] [category=..] [description=..] [inStock=true|false]
  rm <row|id>                 delete an item (asks first)
  search [text]               filter by name or description; no text clears it
  category [name]             filter by category; no name clears it
  page <n> | next | prev      move between pages
  clear                       drop all filters
  refresh                     reload from the server
  help                        show this help
  quit                        leave

Quote values containing spaces: add name=\"Gaming Laptop\" price=1499 category=Electronics";

/// A row number from the table or a literal item id.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowRef {
    Row(usize),
    Id(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PageMove {
    Next,
    Prev,
    To(u32),
}

impl PageMove {
    /// Page to show next, given the current page and the last page.
    fn target(&self, current: u32, last: u32) -> u32 {
        match self {
            Self::Next => current.saturating_add(1).min(last),
            Self::Prev => current.saturating_sub(1).max(1),
            Self::To(n) => *n,
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add(Map<String, Value>),
    Edit(RowRef, Map<String, Value>),
    Remove(RowRef),
    Search(Option<String>),
    Category(Option<String>),
    Page(PageMove),
    Clear,
    Refresh,
    Help,
    Quit,
}

/// Split a line into words, keeping double-quoted runs together.
///
/// Quotes may appear mid-word (`name="Gaming Laptop"`); `\"` inside quotes
/// is a literal quote.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => return Err("unterminated quote".to_string()),
            },
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Turn `key=value` words into a JSON object for schema validation.
///
/// `price` becomes a number and `inStock` a boolean when they parse as
/// such; otherwise they stay strings so validation can report the type.
fn parse_fields(words: &[String]) -> Result<Map<String, Value>, String> {
    let mut fields = Map::new();

    for word in words {
        let Some((key, raw)) = word.split_once('=') else {
            return Err(format!("expected key=value, got {word:?}"));
        };

        let key = match key {
            "name" | "description" | "category" | "price" => key,
            "inStock" | "instock" | "in_stock" | "stock" => "inStock",
            other => return Err(format!("unknown field {other:?}")),
        };

        let value = match key {
            "price" => raw
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map_or_else(|| Value::String(raw.to_string()), Value::Number),
            "inStock" => raw
                .parse::<bool>()
                .map_or_else(|_| Value::String(raw.to_string()), Value::Bool),
            _ => Value::String(raw.to_string()),
        };
        fields.insert(key.to_string(), value);
    }

    Ok(fields)
}

fn parse_row_ref(word: &str) -> Result<RowRef, String> {
    if let Ok(row) = word.parse::<usize>() {
        return Ok(RowRef::Row(row));
    }
    ItemId::parse(word)
        .map(RowRef::Id)
        .map_err(|_| format!("{word:?} is neither a row number nor an item id"))
}

fn joined(words: &[String]) -> Option<String> {
    let text = words.join(" ");
    (!text.is_empty()).then_some(text)
}

fn parse_command(words: &[String]) -> Result<Option<Command>, String> {
    let Some((name, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match name.as_str() {
        "add" | "new" => Command::Add(parse_fields(rest)?),
        "edit" => {
            let (target, fields) = rest
                .split_first()
                .ok_or("usage: edit <row|id> key=value...")?;
            Command::Edit(parse_row_ref(target)?, parse_fields(fields)?)
        }
        "rm" | "delete" => match rest {
            [target] => Command::Remove(parse_row_ref(target)?),
            _ => return Err("usage: rm <row|id>".to_string()),
        },
        "search" => Command::Search(joined(rest)),
        "category" => Command::Category(joined(rest)),
        "next" => Command::Page(PageMove::Next),
        "prev" => Command::Page(PageMove::Prev),
        "page" => match rest {
            [n] => match n.parse::<u32>() {
                Ok(n) if n > 0 => Command::Page(PageMove::To(n)),
                _ => return Err(format!("{n:?} is not a page number")),
            },
            _ => return Err("usage: page <n>".to_string()),
        },
        "clear" => Command::Clear,
        "refresh" => Command::Refresh,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command {other:?}; type help")),
    };

    Ok(Some(command))
}

fn resolve(state: &ItemsState, target: &RowRef) -> Result<ItemId, String> {
    match target {
        RowRef::Id(id) => Ok(*id),
        RowRef::Row(row) => row
            .checked_sub(1)
            .and_then(|index| state.items.get(index))
            .map(|item| item.id)
            .ok_or_else(|| format!("no row {row} on this page")),
    }
}

fn render(state: &ItemsState) {
    println!();
    if state.loading {
        println!("  {}", "Loading...".dimmed());
        return;
    }

    print_table(&state.items, &state.pending, true);
    print_footer(state.items.len(), state.pagination.as_ref());

    let mut filters = Vec::new();
    if let Some(search) = &state.query.search {
        filters.push(format!("search={search:?}"));
    }
    if let Some(category) = &state.query.category {
        filters.push(format!("category={category:?}"));
    }
    if !filters.is_empty() {
        println!("{} {}", "Filters:".cyan(), filters.join(" "));
    }

    if let Some(error) = &state.error {
        println!("{} {}", "Error:".red().bold(), error.red());
    }
}

fn print_validation(errors: &ValidationErrors) {
    eprintln!("{}", "Please fix the following:".red().bold());
    for error in errors.iter() {
        eprintln!("  {} {}", format!("{}:", error.field).cyan(), error.message);
    }
}

/// Run one command. Returns false when the session should end.
async fn run<A: ItemsApi>(hook: &mut ItemsHook<A>, command: Command) -> Result<bool> {
    match command {
        Command::Add(fields) => match CreateItemInput::parse(&Value::Object(fields)) {
            Ok(input) => {
                let pending = hook.begin_create(input);
                render(hook.state());
                let result = hook.api().create(pending.input()).await;
                if hook.finish_create(pending, result).is_ok() {
                    println!("{}", "Item created.".green());
                }
            }
            Err(errors) => {
                print_validation(&errors);
                return Ok(true);
            }
        },
        Command::Edit(target, fields) => {
            let id = match resolve(hook.state(), &target) {
                Ok(id) => id,
                Err(message) => {
                    eprintln!("{}", message.red());
                    return Ok(true);
                }
            };
            match UpdateItemInput::parse(&Value::Object(fields)) {
                Ok(changes) if changes.is_empty() => {
                    eprintln!("{}", "Nothing to change.".yellow());
                    return Ok(true);
                }
                Ok(changes) => {
                    if hook.update(id, changes).await.is_ok() {
                        println!("{}", "Item updated.".green());
                    }
                }
                Err(errors) => {
                    print_validation(&errors);
                    return Ok(true);
                }
            }
        }
        Command::Remove(target) => {
            let id = match resolve(hook.state(), &target) {
                Ok(id) => id,
                Err(message) => {
                    eprintln!("{}", message.red());
                    return Ok(true);
                }
            };
            if !confirm("Are you sure you want to delete this item?")? {
                return Ok(true);
            }
            let pending = hook.begin_delete(id);
            render(hook.state());
            let result = hook.api().delete(id).await.map(|_| ());
            if hook.finish_delete(pending, result).is_ok() {
                println!("{}", "Item deleted.".green());
            }
        }
        Command::Search(search) => {
            let query = ListQuery {
                page: 1,
                search,
                ..hook.state().query.clone()
            };
            hook.set_query(query).await;
        }
        Command::Category(category) => {
            let query = ListQuery {
                page: 1,
                category,
                ..hook.state().query.clone()
            };
            hook.set_query(query).await;
        }
        Command::Page(movement) => {
            let current = hook.state().query.page;
            let last = hook
                .state()
                .pagination
                .map_or(1, |p| u32::try_from(p.total_pages).unwrap_or(u32::MAX).max(1));
            let page = movement.target(current, last);
            let query = ListQuery {
                page,
                ..hook.state().query.clone()
            };
            hook.set_query(query).await;
        }
        Command::Clear => {
            let query = ListQuery {
                limit: hook.state().query.limit,
                ..ListQuery::default()
            };
            hook.set_query(query).await;
        }
        Command::Refresh => hook.refresh().await,
        Command::Help => {
            println!("{HELP}");
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }

    render(hook.state());
    Ok(true)
}

/// Execute the manage command.
pub async fn execute(client: ApiClient, args: ManageArgs) -> Result<()> {
    let query = ListQuery {
        limit: args.limit,
        category: args.category,
        search: args.search,
        ..ListQuery::default()
    };

    let mut hook = ItemsHook::with_query(client, query);
    println!("{}", "Items Management".green().bold());
    println!("{}", "Type help for commands.".dimmed());

    hook.mount().await;
    render(hook.state());

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "items>".bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let command = match tokenize(&line).and_then(|words| parse_command(&words)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", message.red());
                continue;
            }
        };

        if !run(&mut hook, command).await? {
            break;
        }
    }

    Ok(())
}
