//! HTML fragments for the dropdown and the wishlist page.
//!
//! Markup and class names match what storefront themes style against.
//! Askama escapes every interpolated value.

use askama::Template;

use super::model::{DropdownView, ItemView, PageView};

#[derive(Template)]
#[template(path = "wishlist/dropdown_items.html")]
struct DropdownItemsTemplate<'a> {
    items: &'a [ItemView],
}

#[derive(Template)]
#[template(path = "wishlist/page_items.html")]
struct PageItemsTemplate<'a> {
    cards: &'a [ItemView],
}

/// Inner HTML of `.wishlist-dropdown-items`.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn dropdown_items(view: &DropdownView) -> askama::Result<String> {
    DropdownItemsTemplate { items: &view.items }.render()
}

/// Inner HTML of `.wishlist-items-grid`.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn page_items(view: &PageView) -> askama::Result<String> {
    PageItemsTemplate { cards: &view.cards }.render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use wishlist_core::{Price, ProductDescriptor, Wishlist};

    use super::*;
    use crate::render::model::{dropdown_view, page_view};

    fn wishlist() -> Wishlist {
        let mut wishlist = Wishlist::new();
        wishlist.insert(
            ProductDescriptor::new("42", "Tee <b>bold</b>")
                .with_url("/products/tee")
                .with_image("https://cdn.example.com/tee.jpg")
                .with_price(Price::Minor(2500)),
            Utc::now(),
        );
        wishlist
    }

    #[test]
    fn test_dropdown_markup() {
        let html = dropdown_items(&dropdown_view(&wishlist())).unwrap();
        assert!(html.contains(r#"class="wishlist-item-preview" data-product-id="42""#));
        assert!(html.contains(r#"href="/products/tee""#));
        assert!(html.contains(r#"<div class="wishlist-item-price">$25.00</div>"#));
    }

    #[test]
    fn test_page_markup_has_actions() {
        let html = page_items(&page_view(&wishlist())).unwrap();
        assert!(html.contains(r#"<div class="wishlist-item-card" data-product-id="42">"#));
        assert!(html.contains("remove-from-wishlist"));
        assert!(html.contains(
            r#"<button class="add-to-cart-btn" data-product-id="42">Add to Cart</button>"#
        ));
        assert!(html.contains(r#"class="view-product-btn""#));
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = page_items(&page_view(&wishlist())).unwrap();
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_empty_wishlist_renders_nothing() {
        let empty = Wishlist::new();
        assert!(dropdown_items(&dropdown_view(&empty)).unwrap().trim().is_empty());
        assert!(page_items(&page_view(&empty)).unwrap().trim().is_empty());
    }
}
