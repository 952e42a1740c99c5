//! Rendering the wishlist onto a page.
//!
//! A refresh is split in two: [`Frame::build`] computes everything from the
//! wishlist alone (the pure [`model`] plus its [`html`] fragments), and
//! [`Frame::apply`] writes the result to a [`Surface`]. Applying the same
//! frame twice leaves the surface unchanged.

pub mod html;
pub mod model;
pub mod surface;

use std::collections::HashSet;

use thiserror::Error;

use wishlist_core::{ProductId, Wishlist};

pub use model::{
    CounterView, Display, DropdownView, ItemView, PREVIEW_LIMIT, PageView, RenderModel,
    ToggleState,
};
pub use surface::{StaticPage, Surface};

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// One complete refresh, ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    model: RenderModel,
    dropdown_html: String,
    page_html: String,
    members: HashSet<ProductId>,
}

impl Frame {
    /// Compute the frame for a wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTML fragment fails to render.
    pub fn build(wishlist: &Wishlist) -> Result<Self, RenderError> {
        let model = RenderModel::build(wishlist);
        Ok(Self {
            dropdown_html: html::dropdown_items(&model.dropdown)?,
            page_html: html::page_items(&model.page)?,
            members: wishlist.iter().map(|entry| entry.id.clone()).collect(),
            model,
        })
    }

    #[must_use]
    pub const fn model(&self) -> &RenderModel {
        &self.model
    }

    /// Write the frame to every element the surface has.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        for id in surface.toggle_ids() {
            let state = ToggleState::for_membership(self.members.contains(&id));
            surface.set_toggle(&id, state);
        }

        if surface.has_dropdown() {
            surface.set_dropdown(&self.model.dropdown, &self.dropdown_html);
        }

        if surface.has_page() {
            surface.set_page(&self.model.page, &self.page_html);
        }

        surface.set_counters(&self.model.counters);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use wishlist_core::ProductDescriptor;

    use super::*;

    #[test]
    fn test_apply_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.insert(ProductDescriptor::new("1", "One"), Utc::now());
        let frame = Frame::build(&wishlist).unwrap();

        let mut once = StaticPage::full().with_toggle("1").with_toggle("2");
        frame.apply(&mut once);
        let mut twice = once.clone();
        frame.apply(&mut twice);

        assert_eq!(once, twice);
        assert_eq!(once.toggle(&ProductId::new("1")), Some(ToggleState::ACTIVE));
        assert_eq!(once.toggle(&ProductId::new("2")), Some(ToggleState::INACTIVE));
    }

    #[test]
    fn test_apply_skips_absent_elements() {
        let frame = Frame::build(&Wishlist::new()).unwrap();
        let mut page = StaticPage::new().with_counters();
        frame.apply(&mut page);

        assert!(page.dropdown().is_none());
        assert!(page.page().is_none());
        assert_eq!(page.counters().unwrap().worded_text, "0 items");
    }
}
