//! Cart hand-off.
//!
//! # Usage
//!
//! ```bash
//! WISHLIST_CART_URL=https://shop.example.com wishlist add-to-cart 123
//! ```

use tracing::info;

use wishlist_core::ProductId;
use wishlist_storefront::config::WidgetConfig;
use wishlist_storefront::{CartOutcome, HttpCartClient};

use super::{CliError, Session};

/// Add one unit of a product to the storefront cart.
///
/// The wishlist is left as it is.
///
/// # Errors
///
/// Returns an error if the cart client cannot be built. A failed add is
/// reported through the outcome, not as an error.
pub async fn add_to_cart(
    session: &mut Session,
    config: &WidgetConfig,
    id: &ProductId,
) -> Result<CartOutcome, CliError> {
    let client = HttpCartClient::new(&config.cart_url)?;
    let outcome = session.add_to_cart(&client, id).await;
    if let CartOutcome::Added {
        item_count: Some(count),
    } = outcome
    {
        info!(product_id = %id, cart_items = count, "Cart updated");
    }
    Ok(outcome)
}
