mod client;
mod commands;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::EventsClient;
use config::Config;

#[derive(Parser)]
#[command(name = "evtab")]
#[command(about = "Browse and edit an events table backed by a REST API")]
struct Cli {
    /// Events endpoint, e.g. http://localhost:3000/events
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the events table
    List,
    /// Create an event (prompts for missing fields)
    Add {
        name: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Delete an event by id
    Rm { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.url.as_deref())?;
    let client = EventsClient::new(config.api_url.clone());

    match cli.command {
        Some(Commands::List) => {
            logging::init_stderr();
            commands::list::run(&client).await
        }
        Some(Commands::Add { name, start, end }) => {
            logging::init_stderr();
            commands::add::run(&client, name, start, end).await
        }
        Some(Commands::Rm { id }) => {
            logging::init_stderr();
            commands::rm::run(&client, &id).await
        }
        None => {
            // The TUI owns the terminal, so logs go to a file instead
            let _guard = logging::init_file()?;
            tui::run(client).await
        }
    }
}
