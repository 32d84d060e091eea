//! Lookup Dioxus - a categorized, filterable item picker for Dioxus
//!
//! The centerpiece is [`components::CategoricalDisplay`]: a search box,
//! category filter chips and a scrollable results panel grouped by category
//! and subcategory. It owns no state. Filter text, the active category,
//! scroll direction and the (already filtered) categories are props, and
//! every interaction is reported through optional callbacks.
//!
//! Hosts can provide collaborators through Dioxus context:
//!
//! - [`lookup_core::Translator`] for localized labels (keys pass through otherwise)
//! - `Signal<lookup_core::Favorites>` to make the favorite toggles live
//! - [`components::icons::IconRegistry`] to replace the built-in icons
//!
//! ## Quick Start
//!
//! ```no_run
//! use lookup_dioxus::LookupConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LookupConfig::load_default()?;
//!     lookup_dioxus::launch(config)
//! }
//! ```

use std::sync::Arc;

use anyhow::Result;
use lookup_core::{Catalog, Translator};

// Public library modules
pub mod components;
pub mod config;
pub mod events;
pub mod hooks;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::{DisplayConfig, LookupConfig};
pub use events::{ActiveOption, CategoryElement, FilterClick, ItemEvent, ScrollPosition};

/// Default stylesheet for the lookup display.
pub const STYLESHEET: &str = include_str!("../assets/lookup.css");

/// Category list used when no catalog is configured.
const SAMPLE_CATALOG: &str = include_str!("../assets/sample_catalog.toml");

/// Everything the demo host needs, shared with Dioxus via context.
#[derive(Clone)]
pub(crate) struct HostContext {
    pub catalog: Arc<Catalog>,
    pub translator: Translator,
    pub display: DisplayConfig,
}

/// The built-in sample catalog.
pub fn sample_catalog() -> Result<Catalog> {
    let catalog = Catalog::parse(
        std::path::Path::new("sample_catalog.toml"),
        SAMPLE_CATALOG,
        lookup_core::CatalogFormat::Toml,
    )?;
    Ok(catalog)
}

/// Launch the demo window hosting the lookup display.
///
/// Loads the configured catalog (or the built-in sample) and translations,
/// then starts the Dioxus desktop event loop.
pub fn launch(config: LookupConfig) -> Result<()> {
    let catalog = match &config.display.catalog {
        Some(path) => Catalog::load_from(path)?,
        None => sample_catalog()?,
    };
    let translator = match &config.display.translations {
        Some(path) => Translator::load_from(path)?,
        None => Translator::default(),
    };
    log::info!(
        "Showing {} categories with {} items",
        catalog.categories.len(),
        catalog.item_count()
    );

    let host = HostContext {
        catalog: Arc::new(catalog),
        translator,
        display: config.display.clone(),
    };

    let custom_head = format!("<style>{STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(host)
        .launch(app::App);

    Ok(())
}
