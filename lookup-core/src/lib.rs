//! Lookup Core - data model for the categorical lookup display
//!
//! This crate holds everything the lookup display needs that does not depend
//! on a UI framework:
//!
//! - [`Category`], [`Subcategory`] and [`Item`], the read-only render inputs
//! - [`layout`], which decides what each category block renders
//! - [`Translator`] and [`Favorites`], the collaborators rows consult
//! - [`Catalog`], for loading category lists from disk
//!
//! ## Example
//!
//! ```
//! use lookup_core::{layout, Category, Item};
//!
//! let forex = Category::new("forex", "Forex", vec![Item::new("frxEURUSD", "EUR/USD")]);
//! let empty = Category::new("crypto", "Cryptocurrencies", vec![]);
//!
//! let categories = [forex, empty];
//! let plans = layout::plan_categories(&categories, false);
//! assert_eq!(plans.len(), 1);
//! ```

pub mod catalog;
pub mod category;
pub mod error;
pub mod favorites;
pub mod layout;
pub mod translate;

pub use catalog::{Catalog, CatalogFormat};
pub use category::{Category, CategoryEntries, Item, Subcategory, ACTIVE_CATEGORY_ID};
pub use error::CatalogError;
pub use favorites::Favorites;
pub use layout::{CategoryContent, CategoryPlan, RowVariant};
pub use translate::Translator;
