//! Wishlist CLI - drive the wishlist state manager from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a product
//! wishlist add --id 123 --title "Widget" --price 19.99
//!
//! # Show the wishlist
//! wishlist list
//!
//! # Render the page the widget would draw
//! wishlist render --out wishlist.html
//!
//! # Hand a product to the storefront cart
//! wishlist add-to-cart 123
//! ```
//!
//! # Commands
//!
//! - `list` - Print the wishlist as JSON
//! - `add` / `toggle` / `remove` / `clear` - Mutate the wishlist
//! - `contains` - Exit 0 if the product is in the wishlist, 1 otherwise
//! - `render` - Write the static page snapshot
//! - `add-to-cart` - Add a wishlist product to the cart
//! - `sync` - Reload from storage, picking up other writers

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use wishlist_core::ProductId;
use wishlist_storefront::{CartOutcome, WidgetConfig};

mod commands;

use commands::CliError;
use commands::product::ProductArgs;

#[derive(Parser)]
#[command(name = "wishlist")]
#[command(author, version, about = "Wishlist state manager CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the wishlist as JSON, most recent first
    List,
    /// Add a product if it is not already in the wishlist
    Add(ProductArgs),
    /// Add a product if absent, remove it if present
    Toggle(ProductArgs),
    /// Remove a product
    Remove {
        /// Product id
        id: String,
    },
    /// Remove every product
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Exit 0 if the product is in the wishlist, 1 otherwise
    Contains {
        /// Product id
        id: String,
    },
    /// Render the static page snapshot
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Add one unit of a product to the storefront cart
    AddToCart {
        /// Product id
        id: String,
    },
    /// Reload from storage and print the wishlist
    Sync,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wishlist=info,wishlist_storefront=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = WidgetConfig::from_env()?;
    let assume_yes = matches!(cli.command, Commands::Clear { yes: true });
    let mut session = commands::open(&config, assume_yes);

    match cli.command {
        Commands::List => commands::wishlist::list(&session)?,
        Commands::Add(product) => {
            commands::wishlist::add(&mut session, product.into_descriptor()?);
        }
        Commands::Toggle(product) => {
            commands::wishlist::toggle(&mut session, product.into_descriptor()?);
        }
        Commands::Remove { id } => {
            commands::wishlist::remove(&mut session, &ProductId::new(id));
        }
        Commands::Clear { .. } => {
            commands::wishlist::clear(&mut session);
        }
        Commands::Contains { id } => {
            return Ok(exit_code(commands::wishlist::contains(
                &session,
                &ProductId::new(id),
            )));
        }
        Commands::Render { out } => commands::wishlist::render(&mut session, out.as_deref())?,
        Commands::AddToCart { id } => {
            let outcome =
                commands::cart::add_to_cart(&mut session, &config, &ProductId::new(id)).await?;
            return Ok(exit_code(matches!(outcome, CartOutcome::Added { .. })));
        }
        Commands::Sync => commands::wishlist::sync(&mut session)?,
    }
    Ok(ExitCode::SUCCESS)
}

const fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
