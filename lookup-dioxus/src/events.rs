//! Payloads the lookup display hands to its caller's callbacks.

use std::rc::Rc;

use dioxus::prelude::*;
use lookup_core::{Category, Item};
use serde_json::Value;

/// A row (or one of its active options) was clicked.
#[derive(Clone)]
pub struct ItemEvent {
    /// The item's opaque payload, if it has one.
    pub payload: Option<Value>,
    pub event: MouseEvent,
}

/// A category filter chip was clicked.
#[derive(Clone)]
pub struct FilterClick {
    pub category: Category,
    pub event: MouseEvent,
}

/// A category block was mounted; the element can be scrolled into view.
#[derive(Clone)]
pub struct CategoryElement {
    pub category_id: String,
    pub element: Rc<MountedData>,
}

/// Vertical scroll position of the results panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Offset from the top, in pixels.
    pub top: f64,
    /// Change since the previous scroll event (positive when moving down).
    pub delta: f64,
}

/// A clickable option shown on active-item rows.
#[derive(Clone, PartialEq)]
pub struct ActiveOption {
    /// Option id, used for the `ic-<id>` class and the option icon lookup.
    pub id: String,
    pub on_click: Option<EventHandler<ItemEvent>>,
    /// Extra content rendered inside the option for each item.
    pub render_child: Option<Callback<Item, Element>>,
}

impl ActiveOption {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            on_click: None,
            render_child: None,
        }
    }

    #[must_use]
    pub fn with_on_click(mut self, on_click: EventHandler<ItemEvent>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    #[must_use]
    pub fn with_render_child(mut self, render_child: Callback<Item, Element>) -> Self {
        self.render_child = Some(render_child);
        self
    }
}

/// Forward a row click to `select` unless the item is disabled.
///
/// Returns whether the callback ran.
pub(crate) fn select_if_enabled(item: &Item, select: impl FnOnce(Option<Value>)) -> bool {
    if item.is_selectable() {
        select(item.data_object.clone());
        true
    } else {
        log::debug!("Ignoring click on disabled item {}", item.item_id);
        false
    }
}
