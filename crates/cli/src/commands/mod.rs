//! Command implementations.
//!
//! Every command opens a [`Session`]: a wishlist manager over the
//! file-backed store and cookie jar under `WISHLIST_DATA_DIR`, drawing on an
//! in-memory page. Toasts go to the log.

pub mod cart;
pub mod product;
pub mod wishlist;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use thiserror::Error;

use wishlist_core::PriceError;
use wishlist_storefront::cart::CartError;
use wishlist_storefront::config::{ConfigError, WidgetConfig};
use wishlist_storefront::events::WishlistBus;
use wishlist_storefront::notify::{AutoConfirm, Confirmer, TracingNotifier};
use wishlist_storefront::render::StaticPage;
use wishlist_storefront::storage::{FileCookieJar, FileStore};
use wishlist_storefront::{ManagerParts, WishlistManager, WishlistStorage};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid price: {0}")]
    Price(#[from] PriceError),

    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A manager for one command invocation.
pub type Session = WishlistManager<StaticPage>;

/// Open the stored wishlist.
///
/// With `assume_yes`, clear confirmations are answered automatically;
/// otherwise they are read from stdin.
#[must_use]
pub fn open(config: &WidgetConfig, assume_yes: bool) -> Session {
    let confirmer: Box<dyn Confirmer> = if assume_yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    };

    WishlistManager::new(ManagerParts {
        storage: WishlistStorage::new(
            config.storage_key.clone(),
            FileStore::new(config.store_dir()),
            FileCookieJar::new(config.cookie_path()),
        ),
        surface: StaticPage::full(),
        bus: WishlistBus::new(),
        notifier: Arc::new(TracingNotifier),
        confirmer,
    })
}

/// Asks on stderr, reads the answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirmer for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
