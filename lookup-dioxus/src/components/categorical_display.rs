//! The categorical lookup display.
//!
//! Stateless: filter text, the active category, scroll direction and the
//! filtered categories all come from the caller, and every interaction is
//! reported back through the callback props.

use std::rc::Rc;

use dioxus::prelude::*;
use lookup_core::Category;

use crate::components::filter_panel::FilterPanel;
use crate::components::lookup_input::LookupInput;
use crate::components::results_panel::ResultsPanel;
use crate::components::scroll_panel::ScrollPanel;
use crate::events::{ActiveOption, CategoryElement, FilterClick, ItemEvent, ScrollPosition};

pub(crate) fn lookup_filters_class(is_scrolling_down: bool) -> &'static str {
    if is_scrolling_down {
        "cq-lookup-filters scroll-down"
    } else {
        "cq-lookup-filters"
    }
}

/// Search box, category chips and grouped results.
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(String::new);
///
/// rsx! {
///     CategoricalDisplay {
///         filtered_items: categories(),
///         filter_text: filter(),
///         favorites_id: "chartTitle",
///         set_filter_text: move |text| filter.set(text),
///         clear_filter_text: move |()| filter.set(String::new()),
///         on_select_item: move |evt: ItemEvent| log::info!("{:?}", evt.payload),
///     }
/// }
/// ```
#[component]
pub fn CategoricalDisplay(
    /// Categories to render, already filtered by the caller.
    filtered_items: Vec<Category>,
    filter_text: String,
    /// Favorites namespace passed to every row's toggle.
    #[props(into)]
    favorites_id: String,
    #[props(default)] placeholder_text: String,
    #[props(default)] is_mobile: bool,
    #[props(default)] is_scrolling_down: bool,
    #[props(default)] active_category_key: Option<String>,
    /// Whether the `active` category should use active-item rows.
    #[props(default)]
    has_active_items: bool,
    #[props(default)] active_options: Option<Vec<ActiveOption>>,
    #[props(default)] set_filter_text: Option<EventHandler<String>>,
    #[props(default)] clear_filter_text: Option<EventHandler<()>>,
    #[props(default)] on_search_input_mounted: Option<EventHandler<Rc<MountedData>>>,
    #[props(default)] handle_filter_click: Option<EventHandler<FilterClick>>,
    #[props(default)] on_select_item: Option<EventHandler<ItemEvent>>,
    #[props(default)] on_scroll_panel_mounted: Option<EventHandler<Rc<MountedData>>>,
    #[props(default)] on_category_mounted: Option<EventHandler<CategoryElement>>,
    #[props(default)] update_scroll_spy: Option<EventHandler<ScrollPosition>>,
    #[props(default)] scroll_up: Option<EventHandler<()>>,
    #[props(default)] scroll_down: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "cq-categorical-display",

            div {
                class: lookup_filters_class(is_scrolling_down),
                LookupInput {
                    filter_text,
                    placeholder_text,
                    set_filter_text,
                    clear_filter_text,
                    on_input_mounted: on_search_input_mounted,
                }
                FilterPanel {
                    categories: filtered_items.clone(),
                    active_category_key,
                    is_mobile,
                    on_filter_click: handle_filter_click,
                }
            }

            ScrollPanel {
                on_mounted: on_scroll_panel_mounted,
                on_scroll_y: update_scroll_spy,
                on_scroll_up: scroll_up,
                on_scroll_down: scroll_down,

                ResultsPanel {
                    categories: filtered_items,
                    favorites_id,
                    has_active_items,
                    on_select_item,
                    active_options,
                    on_category_mounted,
                }
            }
        }
    }
}
