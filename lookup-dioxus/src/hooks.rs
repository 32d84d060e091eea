//! Custom Dioxus hooks for the lookup components.

use dioxus::prelude::*;
use lookup_core::{Favorites, Translator};

/// The translator provided by the host, or one that returns keys unchanged.
#[must_use]
pub fn use_translator() -> Translator {
    try_use_context::<Translator>().unwrap_or_default()
}

/// The host's favorites signal, if it provided one.
///
/// Favorite toggles render inert without it.
#[must_use]
pub fn use_favorites() -> Option<Signal<Favorites>> {
    try_use_context::<Signal<Favorites>>()
}
