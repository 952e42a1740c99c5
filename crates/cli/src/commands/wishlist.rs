//! Wishlist commands.
//!
//! # Usage
//!
//! ```bash
//! wishlist add --id 123 --title "Widget" --price 19.99
//! wishlist toggle --id 123 --title "Widget"
//! wishlist list
//! wishlist render --out wishlist.html
//! wishlist clear --yes
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use wishlist_core::{ProductDescriptor, ProductId, WishlistEntry};
use wishlist_storefront::render::StaticPage;
use wishlist_storefront::{ToggleOutcome, UiEvent};

use super::{CliError, Session};

/// Print the wishlist as JSON, most recent first.
///
/// # Errors
///
/// Returns an error if the wishlist cannot be serialized.
pub fn list(session: &Session) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&session.wishlist())?;
    print_line(&json);
    Ok(())
}

/// Add a product unless present. Returns whether it was added.
pub fn add(session: &mut Session, product: ProductDescriptor) -> bool {
    let id = product.id.clone();
    let added = session.add_entry(product);
    if added {
        info!(product_id = %id, "Added");
    } else {
        info!(product_id = %id, "Already in wishlist");
    }
    added
}

/// Toggle a product, as a wishlist button click would.
pub fn toggle(session: &mut Session, product: ProductDescriptor) -> ToggleOutcome {
    session.toggle(product)
}

/// Remove a product. Returns the removed entry.
pub fn remove(session: &mut Session, id: &ProductId) -> Option<WishlistEntry> {
    let removed = session.remove(id);
    if removed.is_none() {
        info!(product_id = %id, "Not in wishlist");
    }
    removed
}

/// Clear after confirmation. Returns whether anything was cleared.
pub fn clear(session: &mut Session) -> bool {
    session.clear()
}

#[must_use]
pub fn contains(session: &Session, id: &ProductId) -> bool {
    session.is_in_wishlist(id)
}

/// Write a snapshot page with a toggle button for every entry.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn render(session: &mut Session, out: Option<&Path>) -> Result<(), CliError> {
    let page = session
        .wishlist()
        .into_iter()
        .fold(StaticPage::full(), |page, entry| page.with_toggle(entry.id));
    *session.surface_mut() = page;
    session.refresh();

    let html = session
        .surface()
        .snapshot_html()
        .map_err(|e| CliError::Render(e.to_string()))?;

    match out {
        Some(path) => {
            fs::write(path, html)?;
            info!(path = %path.display(), "Snapshot written");
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

/// Reload from storage, as when the page becomes visible again.
///
/// # Errors
///
/// Returns an error if the wishlist cannot be serialized.
pub fn sync(session: &mut Session) -> Result<(), CliError> {
    session.handle(UiEvent::VisibilityChanged { hidden: false });
    info!(count = session.wishlist().len(), "Wishlist reloaded");
    list(session)
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}
