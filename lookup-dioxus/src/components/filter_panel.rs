//! Category filter chips.

use dioxus::prelude::*;
use lookup_core::Category;

use crate::components::icons::{use_icons, Icon};
use crate::events::FilterClick;
use crate::hooks::use_translator;

pub(crate) fn filter_chip_class(is_active: bool, is_mobile: bool) -> String {
    let mut class = String::from("cq-filter");
    if is_active {
        class.push_str(" cq-active-filter");
    }
    if !is_mobile {
        class.push_str(" cq-hover-style");
    }
    class
}

/// One chip per category, in input order.
#[component]
pub fn FilterPanel(
    categories: Vec<Category>,
    #[props(default)] active_category_key: Option<String>,
    #[props(default)] is_mobile: bool,
    #[props(default)] on_filter_click: Option<EventHandler<FilterClick>>,
) -> Element {
    let icons = use_icons();
    let t = use_translator();

    rsx! {
        div {
            class: "cq-filter-panel",
            for category in categories {
                {
                    let is_active = active_category_key.as_deref() == Some(category.category_id.as_str());
                    let icon = icons.category(&category.category_id);
                    let label = t.translate(&category.category_name);
                    let id = category.category_id.clone();
                    rsx! {
                        div {
                            key: "{id}",
                            class: filter_chip_class(is_active, is_mobile),
                            onclick: move |evt: MouseEvent| {
                                log::debug!("Filter chip clicked: {}", category.category_id);
                                if let Some(handler) = &on_filter_click {
                                    handler.call(FilterClick { category: category.clone(), event: evt });
                                }
                            },
                            if let Some(data) = icon {
                                Icon { data, class: format!("ic-{id}") }
                            }
                            span { class: "cq-filter-text", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
