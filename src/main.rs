//! Item browser/submitter CLI over the items REST backend.


use clap::{Parser, Subcommand};
use serde::Serialize;

use itemboard::api::ItemsClient;
use itemboard::error::ApiError;
use itemboard::state::BrowserState;
use itemboard::types::Item;
use itemboard::view;

#[derive(Parser, Debug)]
#[command(name = "itemboard", about = "Item list browser and submitter")]
struct Cli {
    /// Base URL of the items backend API.
    #[arg(
        long,
        env = "ITEMBOARD_BASE_URL",
        default_value = "http://127.0.0.1:5001/api"
    )]
    base_url: String,

    /// Print raw JSON responses instead of rendered rows.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and display the item collection.
    List,
    /// Submit a new item, then re-fetch and display the collection.
    Add {
        /// Name of the item to create; surrounding whitespace is trimmed.
        name: String,
    },
    /// Check backend and database reachability.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = ItemsClient::new(&cli.base_url);

    match cli.command {
        Command::List => run_list(&client, cli.json).await,
        Command::Add { name } => run_add(&client, &name, cli.json).await,
        Command::Status => run_status(&client, cli.json).await,
    }
}

async fn run_list(client: &ItemsClient, json: bool) -> Result<(), ApiError> {
    let mut state = BrowserState::default();
    state.begin_load();

    match client.list_items().await {
        Ok(items) => {
            if json {
                return print_json(&items);
            }
            state.finish_load(items);
        }
        Err(error) => {
            state.fail_load(error.to_string());
            print_rows(&state);
            return Err(error);
        }
    }

    print_rows(&state);
    Ok(())
}

async fn run_add(client: &ItemsClient, name: &str, json: bool) -> Result<(), ApiError> {
    let mut state = BrowserState::default();
    state.begin_add(name.trim());

    match client.add_item(name).await {
        Ok(created) => {
            state.finish_add();
            if let Some(line) = add_acknowledgment(&created, json) {
                eprintln!("{line}");
            }
        }
        Err(error) => {
            state.fail_add(error.to_string());
            return Err(error);
        }
    }

    // The collection changed; reload so the output reflects the new state.
    run_list(client, json).await
}

async fn run_status(client: &ItemsClient, json: bool) -> Result<(), ApiError> {
    let status = client.db_status().await?;
    if json {
        return print_json(&status);
    }
    println!("{}: {}", status.status, status.message);
    if let Some(version) = &status.db_version {
        println!("database: {version}");
    }
    Ok(())
}

/// Acknowledgment line for a created item. Suppressed in JSON mode so stdout
/// stays one parseable document: the reloaded list.
fn add_acknowledgment(created: &Item, json: bool) -> Option<String> {
    if json {
        return None;
    }
    Some(format!(
        "created: {}",
        view::render_row(&view::Row::from_item(created))
    ))
}

fn print_rows(state: &BrowserState) {
    for row in view::rows(state) {
        println!("{}", view::render_row(&row));
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ApiError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
