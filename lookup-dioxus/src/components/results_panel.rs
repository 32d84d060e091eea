//! Category blocks inside the scrollable results panel.

use dioxus::prelude::*;
use lookup_core::layout::{plan_category, CategoryContent};
use lookup_core::{Category, Item, RowVariant};

use crate::components::item_row::{ActiveItemRow, ItemRow};
use crate::events::{ActiveOption, CategoryElement, ItemEvent};
use crate::hooks::use_translator;

/// Rows of one content block.
#[component]
fn ItemRows(
    items: Vec<Item>,
    variant: RowVariant,
    favorites_id: String,
    #[props(default)] on_select_item: Option<EventHandler<ItemEvent>>,
    #[props(default)] active_options: Option<Vec<ActiveOption>>,
) -> Element {
    rsx! {
        for (idx, item) in items.into_iter().enumerate() {
            {
                match variant {
                    RowVariant::Normal => rsx! {
                        ItemRow {
                            key: "{idx}",
                            item,
                            favorites_id: favorites_id.clone(),
                            on_select: on_select_item,
                        }
                    },
                    RowVariant::Active => rsx! {
                        ActiveItemRow {
                            key: "{idx}",
                            item,
                            favorites_id: favorites_id.clone(),
                            active_options: active_options.clone(),
                        }
                    },
                }
            }
        }
    }
}

/// A single category: title plus subcategory blocks, a flat block, or the
/// empty-state message. Renders nothing for an empty category without one.
#[component]
pub fn CategoryBlock(
    category: Category,
    favorites_id: String,
    #[props(default)] has_active_items: bool,
    #[props(default)] on_select_item: Option<EventHandler<ItemEvent>>,
    #[props(default)] active_options: Option<Vec<ActiveOption>>,
    #[props(default)] on_category_mounted: Option<EventHandler<CategoryElement>>,
) -> Element {
    let t = use_translator();
    let Some(plan) = plan_category(&category, has_active_items) else {
        return rsx! {};
    };

    let category_id = category.category_id.clone();
    let title = t.translate(plan.title());

    let content = match plan.content {
        CategoryContent::Subcategories(subcategories) => rsx! {
            for (idx, subcategory) in subcategories.into_iter().enumerate() {
                div {
                    key: "{idx}",
                    class: "category-content",
                    div { class: "subcategory", {t.translate(&subcategory.subcategory_name)} }
                    ItemRows {
                        items: subcategory.items.clone(),
                        variant: RowVariant::Normal,
                        favorites_id: favorites_id.clone(),
                        on_select_item,
                    }
                }
            }
        },
        CategoryContent::Items { items, variant } => rsx! {
            div {
                class: "category-content",
                ItemRows {
                    items: items.to_vec(),
                    variant,
                    favorites_id: favorites_id.clone(),
                    on_select_item,
                    active_options: active_options.clone(),
                }
            }
        },
        CategoryContent::Empty(description) => rsx! {
            div {
                class: "category-content",
                div { class: "empty-category", {t.translate(description)} }
            }
        },
    };

    let mounted_id = category_id.clone();
    rsx! {
        div {
            class: "category category-{category_id}",
            onmounted: move |evt: MountedEvent| {
                if let Some(handler) = &on_category_mounted {
                    handler.call(CategoryElement {
                        category_id: mounted_id.clone(),
                        element: evt.data(),
                    });
                }
            },
            div { class: "category-title", "{title}" }
            {content}
        }
    }
}

/// Every category block, in input order.
#[component]
pub fn ResultsPanel(
    categories: Vec<Category>,
    favorites_id: String,
    #[props(default)] has_active_items: bool,
    #[props(default)] on_select_item: Option<EventHandler<ItemEvent>>,
    #[props(default)] active_options: Option<Vec<ActiveOption>>,
    #[props(default)] on_category_mounted: Option<EventHandler<CategoryElement>>,
) -> Element {
    rsx! {
        div {
            class: "results-panel",
            for category in categories {
                CategoryBlock {
                    key: "{category.category_id}",
                    category: category.clone(),
                    favorites_id: favorites_id.clone(),
                    has_active_items,
                    on_select_item,
                    active_options: active_options.clone(),
                    on_category_mounted,
                }
            }
        }
    }
}
