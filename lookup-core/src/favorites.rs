//! In-memory favorites, keyed by namespace and item id.

use std::collections::{BTreeMap, BTreeSet};

/// The set of favorited items, grouped by namespace.
///
/// A namespace is usually the id of the lookup dialog the toggle lives in,
/// so the same item can be a favorite in one dialog and not in another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    by_namespace: BTreeMap<String, BTreeSet<String>>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, namespace: &str, item_id: &str) -> bool {
        self.by_namespace
            .get(namespace)
            .is_some_and(|ids| ids.contains(item_id))
    }

    /// Flip the favorite state and return the new state.
    pub fn toggle(&mut self, namespace: &str, item_id: &str) -> bool {
        let ids = self.by_namespace.entry(namespace.to_string()).or_default();
        if ids.remove(item_id) {
            if ids.is_empty() {
                self.by_namespace.remove(namespace);
            }
            false
        } else {
            ids.insert(item_id.to_string());
            true
        }
    }

    /// Favorited ids within a namespace, in sorted order.
    pub fn ids_in<'a>(&'a self, namespace: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_namespace
            .get(namespace)
            .into_iter()
            .flat_map(|ids| ids.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.by_namespace.is_empty()
    }
}
