//! Pure wishlist → render model transforms.
//!
//! Nothing here touches a page: every function is a pure function of the
//! wishlist, so calling it twice on the same wishlist gives identical output.

use wishlist_core::{Wishlist, WishlistEntry};

/// Entries shown in the dropdown preview.
pub const PREVIEW_LIMIT: usize = 5;

/// CSS `display` values the widget writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
    InlineBlock,
}

impl Display {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
            Self::InlineBlock => "inline-block",
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// State of one wishlist toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    /// Carries the `active` class.
    pub active: bool,
    /// Used for both `aria-label` and `title`.
    pub label: &'static str,
}

impl ToggleState {
    pub const ACTIVE: Self = Self {
        active: true,
        label: "Remove from wishlist",
    };
    pub const INACTIVE: Self = Self {
        active: false,
        label: "Add to wishlist",
    };

    /// State of a button whose product is (or is not) in the wishlist.
    #[must_use]
    pub const fn for_membership(in_wishlist: bool) -> Self {
        if in_wishlist {
            Self::ACTIVE
        } else {
            Self::INACTIVE
        }
    }
}

/// An entry prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub image: String,
    pub url: String,
    pub price: String,
}

impl From<&WishlistEntry> for ItemView {
    fn from(entry: &WishlistEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            image: entry.image.clone(),
            url: entry.url.clone(),
            price: entry.formatted_price(),
        }
    }
}

/// Dropdown preview contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    /// At most [`PREVIEW_LIMIT`] entries, most recent first.
    pub items: Vec<ItemView>,
    /// Shown when the whole wishlist (not just the preview) is empty.
    pub empty_state: Display,
}

/// Full wishlist page contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub cards: Vec<ItemView>,
    pub empty_state: Display,
    pub clear_button: Display,
}

/// Counter texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub count: usize,
    /// Bare number for the compact badge.
    pub compact_text: String,
    /// The compact badge is hidden when the wishlist is empty.
    pub compact_hidden: bool,
    /// "1 item" / "N items"; always shown.
    pub worded_text: String,
}

/// Everything a refresh writes, except per-button state (which depends on
/// the buttons present on the page; see [`ToggleState::for_membership`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub dropdown: DropdownView,
    pub page: PageView,
    pub counters: CounterView,
}

impl RenderModel {
    #[must_use]
    pub fn build(wishlist: &Wishlist) -> Self {
        Self {
            dropdown: dropdown_view(wishlist),
            page: page_view(wishlist),
            counters: counter_view(wishlist.len()),
        }
    }
}

#[must_use]
pub fn dropdown_view(wishlist: &Wishlist) -> DropdownView {
    DropdownView {
        items: wishlist
            .preview(PREVIEW_LIMIT)
            .iter()
            .map(ItemView::from)
            .collect(),
        empty_state: if wishlist.is_empty() {
            Display::Block
        } else {
            Display::None
        },
    }
}

#[must_use]
pub fn page_view(wishlist: &Wishlist) -> PageView {
    let empty = wishlist.is_empty();
    PageView {
        cards: wishlist.iter().map(ItemView::from).collect(),
        empty_state: if empty { Display::Flex } else { Display::None },
        clear_button: if empty {
            Display::None
        } else {
            Display::InlineBlock
        },
    }
}

#[must_use]
pub fn counter_view(count: usize) -> CounterView {
    CounterView {
        count,
        compact_text: count.to_string(),
        compact_hidden: count == 0,
        worded_text: item_count_label(count),
    }
}

/// "1 item", "0 items", "7 items".
#[must_use]
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use wishlist_core::{Price, ProductDescriptor, ProductId};

    use super::*;

    fn wishlist_of(n: usize) -> Wishlist {
        let mut wishlist = Wishlist::new();
        for i in 0..n {
            wishlist.insert(
                ProductDescriptor::new(format!("p{i}"), format!("Product {i}")),
                Utc::now(),
            );
        }
        wishlist
    }

    #[test]
    fn test_preview_never_exceeds_limit() {
        let view = dropdown_view(&wishlist_of(20));
        assert_eq!(view.items.len(), PREVIEW_LIMIT);
        assert_eq!(view.items[0].id, "p19");
        assert_eq!(view.empty_state, Display::None);
    }

    #[test]
    fn test_empty_wishlist_shows_empty_states() {
        let model = RenderModel::build(&Wishlist::new());
        assert!(model.dropdown.items.is_empty());
        assert_eq!(model.dropdown.empty_state, Display::Block);
        assert_eq!(model.page.empty_state, Display::Flex);
        assert_eq!(model.page.clear_button, Display::None);
        assert!(model.counters.compact_hidden);
        assert_eq!(model.counters.worded_text, "0 items");
    }

    #[test]
    fn test_page_lists_everything() {
        let model = RenderModel::build(&wishlist_of(8));
        assert_eq!(model.page.cards.len(), 8);
        assert_eq!(model.page.clear_button, Display::InlineBlock);
        assert_eq!(model.page.empty_state, Display::None);
    }

    #[test]
    fn test_counter_pluralization() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(2), "2 items");

        let one = counter_view(1);
        assert_eq!(one.compact_text, "1");
        assert!(!one.compact_hidden);
    }

    #[test]
    fn test_toggle_state_tracks_membership() {
        let wishlist = wishlist_of(1);
        let state = |id: &str| ToggleState::for_membership(wishlist.contains(&ProductId::new(id)));
        assert_eq!(state("p0"), ToggleState::ACTIVE);
        assert_eq!(state("nope"), ToggleState::INACTIVE);
    }

    #[test]
    fn test_item_view_formats_price() {
        let entry = ProductDescriptor::new("1", "Mug")
            .with_price(Price::Minor(150))
            .into_entry(Utc::now());
        assert_eq!(ItemView::from(&entry).price, "$1.50");
    }

    #[test]
    fn test_build_is_deterministic() {
        let wishlist = wishlist_of(7);
        assert_eq!(RenderModel::build(&wishlist), RenderModel::build(&wishlist));
    }
}
