//! Favorite toggle shown at the end of every row.

use dioxus::prelude::*;

use crate::components::icons::{Icon, STAR};
use crate::hooks::use_favorites;

fn favorite_class(is_favorite: bool) -> &'static str {
    if is_favorite {
        "ciq-favorite ciq-active-favorite"
    } else {
        "ciq-favorite"
    }
}

/// Star toggle marking `id` as a favorite within the `category` namespace.
#[component]
pub fn Favorite(category: String, id: String) -> Element {
    let favorites = use_favorites();
    let is_favorite = favorites.is_some_and(|favorites| favorites.read().is_favorite(&category, &id));

    let onclick = move |evt: MouseEvent| {
        // Keep the row underneath from treating this as a selection.
        evt.stop_propagation();
        if let Some(mut favorites) = favorites {
            let now_favorite = favorites.write().toggle(&category, &id);
            log::debug!("Favorite {category}/{id}: {now_favorite}");
        }
    };

    rsx! {
        span {
            class: favorite_class(is_favorite),
            onclick,
            Icon { data: STAR }
        }
    }
}
