//! The page the widget draws on.
//!
//! [`Surface`] is the seam between the state manager and whatever hosts it.
//! Every element is optional: a page without a dropdown simply reports
//! `has_dropdown() == false` and the manager skips that part.

use askama::Template;

use wishlist_core::ProductId;

use super::model::{CounterView, Display, DropdownView, PageView, ToggleState};

/// A page hosting wishlist elements.
pub trait Surface {
    /// Product ids of every toggle button on the page, in document order.
    fn toggle_ids(&self) -> Vec<ProductId>;

    /// Set one button's state. Ids with no button are ignored.
    fn set_toggle(&mut self, id: &ProductId, state: ToggleState);

    fn has_dropdown(&self) -> bool;

    /// Replace the dropdown contents.
    fn set_dropdown(&mut self, view: &DropdownView, items_html: &str);

    fn has_page(&self) -> bool;

    /// Replace the wishlist page grid and its empty state / clear button.
    fn set_page(&mut self, view: &PageView, grid_html: &str);

    /// Update every counter on the page.
    fn set_counters(&mut self, counters: &CounterView);

    /// Whether the dropdown is open, or `None` if there is no dropdown.
    fn dropdown_open(&self) -> Option<bool>;

    /// Open or close the dropdown. No-op without one.
    fn set_dropdown_open(&mut self, open: bool);

    /// Update the theme's cart counters.
    fn set_cart_count(&mut self, count: u32);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn toggle_ids(&self) -> Vec<ProductId> {
        (**self).toggle_ids()
    }
    fn set_toggle(&mut self, id: &ProductId, state: ToggleState) {
        (**self).set_toggle(id, state);
    }
    fn has_dropdown(&self) -> bool {
        (**self).has_dropdown()
    }
    fn set_dropdown(&mut self, view: &DropdownView, items_html: &str) {
        (**self).set_dropdown(view, items_html);
    }
    fn has_page(&self) -> bool {
        (**self).has_page()
    }
    fn set_page(&mut self, view: &PageView, grid_html: &str) {
        (**self).set_page(view, grid_html);
    }
    fn set_counters(&mut self, counters: &CounterView) {
        (**self).set_counters(counters);
    }
    fn dropdown_open(&self) -> Option<bool> {
        (**self).dropdown_open()
    }
    fn set_dropdown_open(&mut self, open: bool) {
        (**self).set_dropdown_open(open);
    }
    fn set_cart_count(&mut self, count: u32) {
        (**self).set_cart_count(count);
    }
}

/// Dropdown element state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSlot {
    pub open: bool,
    pub view: Option<DropdownView>,
    pub items_html: String,
}

/// Wishlist page element state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlot {
    pub view: Option<PageView>,
    pub grid_html: String,
}

/// An in-memory page. Used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
    toggles: Vec<(ProductId, ToggleState)>,
    dropdown: Option<DropdownSlot>,
    page: Option<PageSlot>,
    counters: Option<CounterView>,
    has_counters: bool,
    cart_count: Option<u32>,
}

impl StaticPage {
    /// A page with no wishlist elements at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with every element: dropdown, wishlist page and counters.
    #[must_use]
    pub fn full() -> Self {
        Self::new().with_dropdown().with_page().with_counters()
    }

    #[must_use]
    pub fn with_toggle(mut self, id: impl Into<ProductId>) -> Self {
        self.toggles.push((id.into(), ToggleState::INACTIVE));
        self
    }

    #[must_use]
    pub fn with_dropdown(mut self) -> Self {
        self.dropdown = Some(DropdownSlot {
            open: false,
            view: None,
            items_html: String::new(),
        });
        self
    }

    #[must_use]
    pub fn with_page(mut self) -> Self {
        self.page = Some(PageSlot {
            view: None,
            grid_html: String::new(),
        });
        self
    }

    #[must_use]
    pub const fn with_counters(mut self) -> Self {
        self.has_counters = true;
        self
    }

    #[must_use]
    pub fn toggle(&self, id: &ProductId) -> Option<ToggleState> {
        self.toggles
            .iter()
            .find(|(toggle_id, _)| toggle_id == id)
            .map(|(_, state)| *state)
    }

    #[must_use]
    pub const fn dropdown(&self) -> Option<&DropdownSlot> {
        self.dropdown.as_ref()
    }

    #[must_use]
    pub const fn page(&self) -> Option<&PageSlot> {
        self.page.as_ref()
    }

    #[must_use]
    pub const fn counters(&self) -> Option<&CounterView> {
        self.counters.as_ref()
    }

    #[must_use]
    pub const fn cart_count(&self) -> Option<u32> {
        self.cart_count
    }

    /// Render the whole page as a standalone HTML document.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn snapshot_html(&self) -> askama::Result<String> {
        let counters = self.counters.clone().unwrap_or_else(|| super::model::counter_view(0));
        SnapshotTemplate {
            counter_text: counters.worded_text,
            compact_text: counters.compact_text,
            compact_hidden: counters.compact_hidden,
            cart_count: self.cart_count,
            toggles: self
                .toggles
                .iter()
                .map(|(id, state)| ToggleRow {
                    id: id.as_str(),
                    active: state.active,
                    label: state.label,
                })
                .collect(),
            dropdown: self.dropdown.as_ref().map(|slot| DropdownRow {
                open: slot.open,
                empty_display: slot
                    .view
                    .as_ref()
                    .map_or(Display::Block, |view| view.empty_state)
                    .as_css(),
                items_html: &slot.items_html,
            }),
            page: self.page.as_ref().map(|slot| PageRow {
                empty_display: slot
                    .view
                    .as_ref()
                    .map_or(Display::Flex, |view| view.empty_state)
                    .as_css(),
                clear_display: slot
                    .view
                    .as_ref()
                    .map_or(Display::None, |view| view.clear_button)
                    .as_css(),
                grid_html: &slot.grid_html,
            }),
        }
        .render()
    }
}

impl Surface for StaticPage {
    fn toggle_ids(&self) -> Vec<ProductId> {
        self.toggles.iter().map(|(id, _)| id.clone()).collect()
    }

    fn set_toggle(&mut self, id: &ProductId, state: ToggleState) {
        for (toggle_id, toggle_state) in &mut self.toggles {
            if toggle_id == id {
                *toggle_state = state;
            }
        }
    }

    fn has_dropdown(&self) -> bool {
        self.dropdown.is_some()
    }

    fn set_dropdown(&mut self, view: &DropdownView, items_html: &str) {
        if let Some(slot) = &mut self.dropdown {
            slot.view = Some(view.clone());
            slot.items_html = items_html.to_string();
        }
    }

    fn has_page(&self) -> bool {
        self.page.is_some()
    }

    fn set_page(&mut self, view: &PageView, grid_html: &str) {
        if let Some(slot) = &mut self.page {
            slot.view = Some(view.clone());
            slot.grid_html = grid_html.to_string();
        }
    }

    fn set_counters(&mut self, counters: &CounterView) {
        if self.has_counters {
            self.counters = Some(counters.clone());
        }
    }

    fn dropdown_open(&self) -> Option<bool> {
        self.dropdown.as_ref().map(|slot| slot.open)
    }

    fn set_dropdown_open(&mut self, open: bool) {
        if let Some(slot) = &mut self.dropdown {
            slot.open = open;
        }
    }

    fn set_cart_count(&mut self, count: u32) {
        self.cart_count = Some(count);
    }
}

struct ToggleRow<'a> {
    id: &'a str,
    active: bool,
    label: &'static str,
}

struct DropdownRow<'a> {
    open: bool,
    empty_display: &'static str,
    items_html: &'a str,
}

struct PageRow<'a> {
    empty_display: &'static str,
    clear_display: &'static str,
    grid_html: &'a str,
}

#[derive(Template)]
#[template(path = "wishlist/snapshot.html")]
struct SnapshotTemplate<'a> {
    counter_text: String,
    compact_text: String,
    compact_hidden: bool,
    cart_count: Option<u32>,
    toggles: Vec<ToggleRow<'a>>,
    dropdown: Option<DropdownRow<'a>>,
    page: Option<PageRow<'a>>,
}
