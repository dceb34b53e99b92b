//! Ubermelon CLI - data file checks and cart pricing.
//!
//! # Usage
//!
//! ```bash
//! # Validate the customer list
//! um-cli customers check --file customers.txt
//!
//! # Show one customer (the password is never printed)
//! um-cli customers show --file customers.txt --email mel@ubermelon.com
//!
//! # List the catalog
//! um-cli melons list --file melons.txt
//!
//! # Price a cart without running the server
//! um-cli cart total --melons melons.txt cren cren yell
//! ```
//!
//! File options fall back to `UBERMELON_CUSTOMERS_FILE` and
//! `UBERMELON_MELONS_FILE`, read from `.env` when present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "um-cli")]
#[command(author, version, about = "Ubermelon CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the customer list
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Inspect the melon catalog
    Melons {
        #[command(subcommand)]
        action: MelonAction,
    },
    /// Price a cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// Parse the customer file and report how many customers it holds
    Check {
        /// Customer file path
        #[arg(short, long, env = "UBERMELON_CUSTOMERS_FILE", default_value = "customers.txt")]
        file: PathBuf,
    },
    /// Show one customer by email
    Show {
        /// Customer file path
        #[arg(short, long, env = "UBERMELON_CUSTOMERS_FILE", default_value = "customers.txt")]
        file: PathBuf,

        /// Customer email address
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum MelonAction {
    /// List every melon in catalog order
    List {
        /// Catalog file path
        #[arg(short, long, env = "UBERMELON_MELONS_FILE", default_value = "melons.txt")]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Total a cart built by adding each ID once, in order
    Total {
        /// Catalog file path
        #[arg(short, long, env = "UBERMELON_MELONS_FILE", default_value = "melons.txt")]
        melons: PathBuf,

        /// Melon IDs; repeat an ID to add it again
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                print!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, commands::CommandError> {
    match cli.command {
        Commands::Customers { action } => match action {
            CustomerAction::Check { file } => commands::customers::check(&file),
            CustomerAction::Show { file, email } => commands::customers::show(&file, &email),
        },
        Commands::Melons { action } => match action {
            MelonAction::List { file } => commands::melons::list(&file),
        },
        Commands::Cart { action } => match action {
            CartAction::Total { melons, ids } => commands::cart::total(&melons, &ids),
        },
    }
}
