//! Icon lookup tables for categories, items and active options.
//!
//! Icons are inline SVG paths. Lookups are by id; unknown or empty ids
//! resolve to `None` and callers render nothing in their place.

use std::collections::HashMap;

use dioxus::prelude::*;
use once_cell::sync::Lazy;

/// A single-path SVG icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconData {
    pub name: &'static str,
    pub view_box: &'static str,
    pub path: &'static str,
}

const fn icon(name: &'static str, path: &'static str) -> IconData {
    IconData {
        name,
        view_box: "0 0 24 24",
        path,
    }
}

pub const SEARCH: IconData = icon("search", "M10.5 3a7.5 7.5 0 0 1 5.9 12.1l4.8 4.8-1.4 1.4-4.8-4.8A7.5 7.5 0 1 1 10.5 3zm0 2a5.5 5.5 0 1 0 0 11 5.5 5.5 0 0 0 0-11z");
pub const CLOSE: IconData = icon("close", "M6.4 5 12 10.6 17.6 5 19 6.4 13.4 12l5.6 5.6-1.4 1.4-5.6-5.6L6.4 19 5 17.6l5.6-5.6L5 6.4z");
pub const STAR: IconData = icon("star", "M12 2.5l2.9 6 6.6.9-4.8 4.6 1.2 6.5L12 17.4l-5.9 3.1 1.2-6.5L2.5 9.4l6.6-.9z");

const FAVORITE: IconData = STAR;
const FOREX: IconData = icon("forex", "M4 7h12l-3-3 1.4-1.4L20 8l-5.6 5.4L13 12l3-3H4zm16 10H8l3 3-1.4 1.4L4 16l5.6-5.4L11 12l-3 3h12z");
const INDICES: IconData = icon("indices", "M3 20h18v2H3zM5 10h3v8H5zm5.5-4h3v12h-3zM16 13h3v5h-3z");
const STOCKS: IconData = icon("stocks", "M3 17.6 9 11.5l4 4 7-7.1V12h2V5h-7v2h3.6L13 12.6l-4-4-7.4 7.5z");
const COMMODITIES: IconData = icon("commodities", "M12 2 4 6v6c0 5 3.4 9.3 8 10 4.6-.7 8-5 8-10V6zm0 4a3 3 0 1 1 0 6 3 3 0 0 1 0-6z");
const SYNTHETIC: IconData = icon("synthetic_index", "M2 12h4l3-7 6 14 3-7h4v2h-2.7L15 21 9 7l-1.7 5H2z");
const CRYPTO: IconData = icon("cryptocurrency", "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 4v1.6c1.4.3 2.5 1.2 2.7 2.4h-2a1.5 1.5 0 0 0-1.7-.9c-.9 0-1.5.4-1.5 1s.6.8 2 1.1c2 .4 3.3 1.1 3.3 2.8 0 1.3-1 2.3-2.8 2.6V18h-2v-1.5c-1.6-.3-2.8-1.3-3-2.7h2c.2.6.8 1 1.9 1 1 0 1.7-.4 1.7-1s-.5-.8-2-1.1c-1.8-.4-3.2-1-3.2-2.8 0-1.3 1-2.2 2.6-2.5V6z");
const ACTIVE: IconData = icon("active", "M12 4a8 8 0 1 0 0 16 8 8 0 0 0 0-16zm0 4a4 4 0 1 1 0 8 4 4 0 0 1 0-8z");
const TREND: IconData = icon("trend", "M3 18 9 12l4 4 8-8v3h2V5h-6v2h3l-7 7-4-4-7 7z");
const VOLATILITY: IconData = icon("volatility", "M2 12h3l2-6 3 12 3-9 2 5 2-2h5v2h-4l-3 3-2-4-3 9-3-12-2 4H2z");
const MOMENTUM: IconData = icon("momentum", "M4 20V10h3v10zm6.5 0V4h3v16zM17 20v-7h3v7z");
const SETTINGS: IconData = icon("settings", "M12 8a4 4 0 1 1 0 8 4 4 0 0 1 0-8zm8.4 5.2 1.8 1.4-2 3.4-2.1-.8a7.9 7.9 0 0 1-2.1 1.2L15.6 21h-4l-.4-2.6a7.9 7.9 0 0 1-2.1-1.2l-2.1.8-2-3.4 1.8-1.4a8 8 0 0 1 0-2.4L5 9.4l2-3.4 2.1.8a7.9 7.9 0 0 1 2.1-1.2L11.6 3h4l.4 2.6a7.9 7.9 0 0 1 2.1 1.2l2.1-.8 2 3.4-1.8 1.4a8 8 0 0 1 0 2.4z");
const DELETE: IconData = icon("delete", "M9 3h6l1 1h4v2H4V4h4zM6 8h12l-1 13H7z");
const EDIT: IconData = icon("edit", "M4 17.2V20h2.8l8.3-8.3-2.8-2.8zM19.7 7 17 4.3a1 1 0 0 0-1.4 0l-1.8 1.8 2.8 2.8L18.4 7a1 1 0 0 0 0-1.4z");
const VISIBILITY: IconData = icon("visibility", "M12 5c5 0 8.6 3.6 10 7-1.4 3.4-5 7-10 7S3.4 15.4 2 12c1.4-3.4 5-7 10-7zm0 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z");

/// Icons keyed by category, item and active-option id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconRegistry {
    categories: HashMap<String, IconData>,
    items: HashMap<String, IconData>,
    options: HashMap<String, IconData>,
}

impl IconRegistry {
    /// An empty registry: every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in market and indicator icons.
    pub fn builtin() -> Self {
        let categories = [
            ("favorite", FAVORITE),
            ("forex", FOREX),
            ("indices", INDICES),
            ("stocks", STOCKS),
            ("commodities", COMMODITIES),
            ("synthetic_index", SYNTHETIC),
            ("cryptocurrency", CRYPTO),
            ("active", ACTIVE),
            ("trend", TREND),
            ("volatility", VOLATILITY),
            ("momentum", MOMENTUM),
        ];
        let options = [("settings", SETTINGS), ("delete", DELETE), ("edit", EDIT), ("visibility", VISIBILITY)];

        Self {
            categories: categories.into_iter().map(|(id, data)| (id.to_string(), data)).collect(),
            items: HashMap::new(),
            options: options.into_iter().map(|(id, data)| (id.to_string(), data)).collect(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, id: impl Into<String>, data: IconData) -> Self {
        self.categories.insert(id.into(), data);
        self
    }

    #[must_use]
    pub fn with_item(mut self, id: impl Into<String>, data: IconData) -> Self {
        self.items.insert(id.into(), data);
        self
    }

    #[must_use]
    pub fn with_option(mut self, id: impl Into<String>, data: IconData) -> Self {
        self.options.insert(id.into(), data);
        self
    }

    pub fn category(&self, id: &str) -> Option<IconData> {
        lookup(&self.categories, id)
    }

    pub fn item(&self, id: &str) -> Option<IconData> {
        lookup(&self.items, id)
    }

    pub fn option(&self, id: &str) -> Option<IconData> {
        lookup(&self.options, id)
    }
}

fn lookup(table: &HashMap<String, IconData>, id: &str) -> Option<IconData> {
    if id.is_empty() {
        return None;
    }
    table.get(id).copied()
}

static BUILTIN: Lazy<IconRegistry> = Lazy::new(IconRegistry::builtin);

/// The icon registry provided by the caller, or the built-in one.
#[must_use]
pub fn use_icons() -> IconRegistry {
    try_use_context::<IconRegistry>().unwrap_or_else(|| BUILTIN.clone())
}

/// Renders an inline SVG icon.
#[component]
pub fn Icon(
    data: IconData,
    /// Overrides the default `icon icon-<name>` class.
    #[props(default)]
    class: Option<String>,
    #[props(default)] on_click: Option<EventHandler<MouseEvent>>,
) -> Element {
    let class = class.unwrap_or_else(|| format!("icon icon-{}", data.name));
    rsx! {
        svg {
            class: "{class}",
            view_box: data.view_box,
            width: "16",
            height: "16",
            fill: "currentColor",
            onclick: move |evt| {
                if let Some(handler) = &on_click {
                    handler.call(evt);
                }
            },
            path { d: data.path }
        }
    }
}
