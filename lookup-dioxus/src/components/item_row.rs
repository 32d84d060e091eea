//! Item row components.
//!
//! Both row variants share the left block (icon and display text) and end
//! with a favorite toggle. They differ in what sits between.

use dioxus::prelude::*;
use lookup_core::Item;

use crate::components::favorite::Favorite;
use crate::components::icons::{use_icons, Icon};
use crate::events::{select_if_enabled, ActiveOption, ItemEvent};
use crate::hooks::use_translator;

fn item_class(selected: bool) -> &'static str {
    if selected {
        "cq-item selected"
    } else {
        "cq-item"
    }
}

/// Icon and display text.
#[component]
fn ItemLeft(item: Item) -> Element {
    let icons = use_icons();
    let icon = icons.item(&item.item_id);

    rsx! {
        div {
            class: "left",
            if let Some(data) = icon {
                Icon { data, class: format!("ic-{}", item.item_id) }
            }
            span { class: "ciq-item-display", "{item.display}" }
        }
    }
}

/// Default row: closed-market badge and favorite toggle.
#[component]
pub fn ItemRow(
    item: Item,
    /// Favorites namespace for the toggle.
    favorites_id: String,
    #[props(default)] on_select: Option<EventHandler<ItemEvent>>,
) -> Element {
    let t = use_translator();
    let closed_label = t.translate("CLOSED");
    let shows_closed_badge = item.shows_closed_badge();
    let disabled = !item.enabled;
    let clicked = item.clone();

    rsx! {
        div {
            class: item_class(item.selected),
            "disabled": disabled,
            onclick: move |evt: MouseEvent| {
                select_if_enabled(&clicked, |payload| {
                    if let Some(handler) = &on_select {
                        handler.call(ItemEvent { payload, event: evt });
                    }
                });
            },

            ItemLeft { item: item.clone() }

            div {
                class: "right",
                if shows_closed_badge {
                    span { class: "closed-market", "{closed_label}" }
                }
                Favorite { category: favorites_id, id: item.item_id.clone() }
            }
        }
    }
}

/// Active-item row: one clickable icon per active option, then the favorite toggle.
#[component]
pub fn ActiveItemRow(
    item: Item,
    favorites_id: String,
    /// Options to show; `None` hides the options strip entirely.
    #[props(default)]
    active_options: Option<Vec<ActiveOption>>,
) -> Element {
    let icons = use_icons();

    rsx! {
        div {
            class: "cq-active-item",

            ItemLeft { item: item.clone() }

            div {
                class: "right",
                if let Some(options) = active_options {
                    span {
                        class: "cq-active-options",
                        for option in options {
                            {
                                let option_icon = icons.option(&option.id);
                                let child = option.render_child.map(|render| render.call(item.clone()));
                                let payload = item.data_object.clone();
                                let on_click = option.on_click;
                                rsx! {
                                    span {
                                        key: "{option.id}",
                                        class: "ic-{option.id}",
                                        onclick: move |evt: MouseEvent| {
                                            if let Some(handler) = &on_click {
                                                handler.call(ItemEvent { payload: payload.clone(), event: evt });
                                            }
                                        },
                                        if let Some(data) = option_icon {
                                            Icon { data }
                                        }
                                        {child}
                                    }
                                }
                            }
                        }
                    }
                }
                Favorite { category: favorites_id, id: item.item_id.clone() }
            }
        }
    }
}
