//! Demo host component.
//!
//! Owns the state the lookup display leaves to its caller: filter text,
//! active category, scroll direction, favorites and the active-item list.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use lookup_core::layout::plan_categories;
use lookup_core::{Category, CategoryEntries, Favorites, Item, Subcategory, ACTIVE_CATEGORY_ID};

use crate::components::CategoricalDisplay;
use crate::events::{ActiveOption, CategoryElement, FilterClick, ItemEvent, ScrollPosition};
use crate::HostContext;

/// Id of the category the host fills with favorited items.
const FAVORITE_CATEGORY_ID: &str = "favorite";

fn matches_filter(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item.display.to_lowercase().contains(needle)
        || item.item_id.to_lowercase().contains(needle)
}

/// Keep the items matching `filter` (case-insensitive), preserving grouping.
pub(crate) fn filter_categories(categories: &[Category], filter: &str) -> Vec<Category> {
    let needle = filter.trim().to_lowercase();
    categories
        .iter()
        .map(|category| {
            let entries = match &category.entries {
                CategoryEntries::Items(items) => CategoryEntries::Items(
                    items.iter().filter(|item| matches_filter(item, &needle)).cloned().collect(),
                ),
                CategoryEntries::Subcategories(subcategories) => CategoryEntries::Subcategories(
                    subcategories
                        .iter()
                        .map(|sub| Subcategory {
                            subcategory_name: sub.subcategory_name.clone(),
                            items: sub.items.iter().filter(|item| matches_filter(item, &needle)).cloned().collect(),
                        })
                        .collect(),
                ),
            };
            Category {
                entries,
                ..category.clone()
            }
        })
        .collect()
}

/// Fill the favorites category with favorited items from the other categories.
pub(crate) fn with_favorites(categories: Vec<Category>, favorites: &Favorites, namespace: &str) -> Vec<Category> {
    let favorite_ids: HashSet<&str> = favorites.ids_in(namespace).collect();
    let mut seen = HashSet::new();
    let favorite_items: Vec<Item> = categories
        .iter()
        .filter(|category| category.category_id != FAVORITE_CATEGORY_ID)
        .flat_map(Category::items)
        .filter(|item| favorite_ids.contains(item.item_id.as_str()) && seen.insert(item.item_id.clone()))
        .cloned()
        .collect();

    categories
        .into_iter()
        .map(|category| {
            if category.category_id == FAVORITE_CATEGORY_ID {
                Category {
                    entries: CategoryEntries::Items(favorite_items.clone()),
                    ..category
                }
            } else {
                category
            }
        })
        .collect()
}

/// Drop items the user removed from the active category.
fn without_removed(categories: Vec<Category>, removed: &HashSet<String>) -> Vec<Category> {
    categories
        .into_iter()
        .map(|mut category| {
            if category.category_id == ACTIVE_CATEGORY_ID {
                if let CategoryEntries::Items(items) = &mut category.entries {
                    items.retain(|item| !removed.contains(&item.item_id));
                }
            }
            category
        })
        .collect()
}

/// Ids of the categories that currently render a block.
fn rendered_category_ids(categories: &[Category], has_active_items: bool) -> HashSet<String> {
    plan_categories(categories, has_active_items)
        .into_iter()
        .map(|plan| plan.category.category_id.clone())
        .collect()
}

/// Forget mounted elements of categories that no longer render.
fn retain_rendered<T>(elements: &mut HashMap<String, T>, rendered: &HashSet<String>) {
    elements.retain(|id, _| rendered.contains(id));
}

/// Root component of the demo window.
#[component]
pub fn App() -> Element {
    let host = use_context::<HostContext>();
    use_context_provider(|| host.translator.clone());
    let favorites = use_context_provider(|| Signal::new(Favorites::new()));

    let mut filter_text = use_signal(String::new);
    let mut active_category_key = use_signal(|| None::<String>);
    let mut is_scrolling_down = use_signal(|| false);
    let mut removed_active = use_signal(HashSet::<String>::new);
    let mut category_elements = use_signal(HashMap::<String, Rc<MountedData>>::new);

    let display = host.display.clone();
    let categories = without_removed(
        filter_categories(&host.catalog.categories, &filter_text()),
        &removed_active.read(),
    );
    let categories = with_favorites(categories, &favorites.read(), &display.favorites_id);
    let has_active_items = categories
        .iter()
        .any(|category| category.is_active_category() && category.item_count() > 0);
    let rendered = rendered_category_ids(&categories, has_active_items);

    let active_options = vec![
        ActiveOption::new("settings").with_on_click(EventHandler::new(move |evt: ItemEvent| {
            log::info!("Open settings for {:?}", evt.payload);
        })),
        ActiveOption::new("delete").with_on_click(EventHandler::new(move |evt: ItemEvent| {
            let id = evt.payload.as_ref().and_then(|payload| payload.get("id")).and_then(|id| id.as_str());
            if let Some(id) = id {
                log::info!("Removing active item {id}");
                removed_active.write().insert(id.to_string());
            }
        })),
    ];

    rsx! {
        CategoricalDisplay {
            filtered_items: categories,
            filter_text: filter_text(),
            favorites_id: display.favorites_id.clone(),
            placeholder_text: display.placeholder_text.clone(),
            is_mobile: display.is_mobile,
            is_scrolling_down: is_scrolling_down(),
            active_category_key: active_category_key(),
            has_active_items,
            active_options,
            set_filter_text: move |text: String| filter_text.set(text),
            clear_filter_text: move |()| filter_text.set(String::new()),
            on_search_input_mounted: move |input: Rc<MountedData>| {
                spawn(async move {
                    if let Err(err) = input.set_focus(true).await {
                        log::debug!("Failed to focus search input: {err:?}");
                    }
                });
            },
            handle_filter_click: move |click: FilterClick| {
                let id = click.category.category_id;
                log::info!("Jumping to category {id}");
                let element = {
                    let mut elements = category_elements.write();
                    retain_rendered(&mut elements, &rendered);
                    elements.get(&id).cloned()
                };
                active_category_key.set(Some(id));
                if let Some(element) = element {
                    spawn(async move {
                        if let Err(err) = element.scroll_to(ScrollBehavior::Smooth).await {
                            log::debug!("Failed to scroll to category: {err:?}");
                        }
                    });
                }
            },
            on_select_item: move |evt: ItemEvent| {
                log::info!("Selected {:?}", evt.payload);
            },
            on_category_mounted: move |mounted: CategoryElement| {
                category_elements.write().insert(mounted.category_id, mounted.element);
            },
            update_scroll_spy: move |position: ScrollPosition| {
                log::trace!("Results panel at {}px", position.top);
            },
            scroll_up: move |()| is_scrolling_down.set(false),
            scroll_down: move |()| is_scrolling_down.set(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Category> {
        vec![
            Category::new(FAVORITE_CATEGORY_ID, "Favorites", vec![]).with_empty_description("None yet"),
            Category::new("forex", "Forex", vec![Item::new("frxEURUSD", "EUR/USD"), Item::new("frxUSDJPY", "USD/JPY")]),
            Category::with_subcategories(
                "indices",
                "Indices",
                vec![Subcategory::new("Europe", vec![Item::new("OTC_FTSE", "UK Index")])],
            ),
        ]
    }

    #[test]
    fn blank_filter_keeps_everything() {
        let filtered = filter_categories(&sample(), "  ");
        let counts: Vec<usize> = filtered.iter().map(Category::item_count).collect();
        assert_eq!(counts, [0, 2, 1]);
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_grouping() {
        let filtered = filter_categories(&sample(), "uk");
        let counts: Vec<usize> = filtered.iter().map(Category::item_count).collect();
        assert_eq!(counts, [0, 0, 1]);
        assert!(filtered.get(2).is_some_and(Category::has_subcategory));
    }

    #[test]
    fn filter_matches_item_ids() {
        let filtered = filter_categories(&sample(), "FRXUSD");
        assert_eq!(filtered.get(1).map(Category::item_count), Some(1));
        let filtered = filter_categories(&sample(), "frxgbp");
        assert_eq!(filtered.get(1).map(Category::item_count), Some(0));
    }

    #[test]
    fn favorites_category_collects_favorited_items() {
        let mut favorites = Favorites::new();
        favorites.toggle("chartTitle", "OTC_FTSE");
        favorites.toggle("other", "frxEURUSD");

        let categories = with_favorites(sample(), &favorites, "chartTitle");
        let favorite_ids: Vec<&str> = categories
            .first()
            .map(|category| category.items().map(|item| item.item_id.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(favorite_ids, ["OTC_FTSE"]);
    }

    #[test]
    fn only_rendered_categories_keep_their_elements() {
        let filtered = filter_categories(&sample(), "uk");
        let rendered = rendered_category_ids(&filtered, false);
        // Favorites keeps its empty state; forex has no match left
        assert_eq!(rendered, HashSet::from(["favorite".to_string(), "indices".to_string()]));

        let mut elements: HashMap<String, u32> =
            HashMap::from([("favorite".to_string(), 1), ("forex".to_string(), 2), ("indices".to_string(), 3)]);
        retain_rendered(&mut elements, &rendered);
        assert!(!elements.contains_key("forex"));
        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn removed_active_items_are_dropped() {
        let categories = vec![Category::new(
            ACTIVE_CATEGORY_ID,
            "Active",
            vec![Item::new("rsi", "RSI"), Item::new("macd", "MACD")],
        )];
        let removed = HashSet::from(["rsi".to_string()]);
        let categories = without_removed(categories, &removed);
        let ids: Vec<&str> = categories
            .iter()
            .flat_map(Category::items)
            .map(|item| item.item_id.as_str())
            .collect();
        assert_eq!(ids, ["macd"]);
    }
}
