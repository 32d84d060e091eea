//! Categories, subcategories and the selectable items they hold.
//!
//! These types are read-only inputs to the lookup display. They are built by
//! whoever owns the lookup state (usually after filtering) and rendered as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Id of the category whose rows use the active-item variant.
pub const ACTIVE_CATEGORY_ID: &str = "active";

/// Payload field holding the market open flag.
const EXCHANGE_IS_OPEN: &str = "exchange_is_open";

fn default_enabled() -> bool {
    true
}

/// A single selectable row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub display: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub selected: bool,
    /// Opaque payload handed back to the caller on selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_object: Option<Value>,
}

impl Item {
    /// Create an enabled, unselected item without payload.
    pub fn new(item_id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            display: display.into(),
            enabled: true,
            selected: false,
            data_object: None,
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn with_data_object(mut self, data_object: Value) -> Self {
        self.data_object = Some(data_object);
        self
    }

    /// Whether the payload reports an open exchange.
    ///
    /// A missing flag counts as open. A present flag is read loosely, so
    /// `0`, `null` and `""` all mean closed.
    pub fn exchange_is_open(&self) -> bool {
        self.data_object
            .as_ref()
            .and_then(|data| data.get(EXCHANGE_IS_OPEN))
            .is_none_or(is_truthy)
    }

    /// Whether the row shows the "closed market" badge.
    ///
    /// Items without any payload show the badge as well.
    pub fn shows_closed_badge(&self) -> bool {
        self.data_object.is_none() || !self.exchange_is_open()
    }

    pub fn is_selectable(&self) -> bool {
        self.enabled
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A named group of items inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub subcategory_name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Subcategory {
    pub fn new(subcategory_name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            subcategory_name: subcategory_name.into(),
            items,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// What a category holds: either items directly, or subcategories of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryEntries {
    Items(Vec<Item>),
    Subcategories(Vec<Subcategory>),
}

/// A category shown as a filter chip and as a block in the results panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
    /// Message shown instead of rows when the category has no items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_description: Option<String>,
    #[serde(flatten)]
    pub entries: CategoryEntries,
}

impl Category {
    /// Create a flat category.
    pub fn new(category_id: impl Into<String>, category_name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
            empty_description: None,
            entries: CategoryEntries::Items(items),
        }
    }

    /// Create a category grouped by subcategory.
    pub fn with_subcategories(
        category_id: impl Into<String>,
        category_name: impl Into<String>,
        subcategories: Vec<Subcategory>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
            empty_description: None,
            entries: CategoryEntries::Subcategories(subcategories),
        }
    }

    #[must_use]
    pub fn with_empty_description(mut self, description: impl Into<String>) -> Self {
        self.empty_description = Some(description.into());
        self
    }

    pub fn has_subcategory(&self) -> bool {
        matches!(self.entries, CategoryEntries::Subcategories(_))
    }

    /// Total number of items, summed across subcategories.
    pub fn item_count(&self) -> usize {
        match &self.entries {
            CategoryEntries::Items(items) => items.len(),
            CategoryEntries::Subcategories(subcategories) => {
                subcategories.iter().map(Subcategory::item_count).sum()
            }
        }
    }

    /// Iterate over every item regardless of grouping.
    pub fn items(&self) -> Box<dyn Iterator<Item = &Item> + '_> {
        match &self.entries {
            CategoryEntries::Items(items) => Box::new(items.iter()),
            CategoryEntries::Subcategories(subcategories) => {
                Box::new(subcategories.iter().flat_map(|sub| sub.items.iter()))
            }
        }
    }

    pub fn is_active_category(&self) -> bool {
        self.category_id == ACTIVE_CATEGORY_ID
    }
}
