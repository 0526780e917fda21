//! Clementine CLI - Seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the products collection with 25 sample products
//! clem-cli seed --count 25
//!
//! # Print a stored order by its id
//! clem-cli orders show 65f1a2b3c4d5e6f708192a3b
//! ```
//!
//! # Commands
//!
//! - `seed` - Insert sample products into the catalog
//! - `orders show` - Fetch a stored order by id

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem-cli")]
#[command(author, version, about = "Clementine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the products collection with sample data
    Seed {
        /// Number of products to insert
        #[arg(short, long, default_value_t = 25)]
        count: u32,
    },
    /// Inspect stored orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Fetch an order by its id and print it
    Show {
        /// The order id (string form, as logged by the API)
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { count } => commands::seed::products(count).await?,
        Commands::Orders { action } => match action {
            OrdersAction::Show { id } => commands::orders::show(&id).await?,
        },
    }
    Ok(())
}
