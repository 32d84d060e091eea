//! Decides what each category block in the results panel contains.
//!
//! The view layer walks a [`CategoryPlan`] instead of re-deriving the
//! empty/subcategory/flat rules inline.

use crate::category::{Category, CategoryEntries, Item, Subcategory, ACTIVE_CATEGORY_ID};

/// Which row renderer a flat item list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowVariant {
    /// Icon, text, closed-market badge and favorite toggle.
    #[default]
    Normal,
    /// Icon, text, active option icons and favorite toggle.
    Active,
}

/// Content of a rendered category block, below its title.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryContent<'a> {
    /// One content block per subcategory with at least one item, in input order.
    Subcategories(Vec<&'a Subcategory>),
    /// A single flat content block.
    Items { items: &'a [Item], variant: RowVariant },
    /// The category has no items; show this message instead.
    Empty(&'a str),
}

/// A category that produces a block in the results panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPlan<'a> {
    pub category: &'a Category,
    pub content: CategoryContent<'a>,
}

impl<'a> CategoryPlan<'a> {
    pub fn title(&self) -> &'a str {
        &self.category.category_name
    }
}

/// Row variant for a flat category.
///
/// Active rows are used only for the designated active category, and only
/// while the caller reports that active items exist.
pub fn row_variant(category_id: &str, has_active_items: bool) -> RowVariant {
    if category_id == ACTIVE_CATEGORY_ID && has_active_items {
        RowVariant::Active
    } else {
        RowVariant::Normal
    }
}

/// Plan a category block, or `None` when the category renders nothing.
pub fn plan_category(category: &Category, has_active_items: bool) -> Option<CategoryPlan<'_>> {
    let content = if category.item_count() == 0 {
        CategoryContent::Empty(category.empty_description.as_deref()?)
    } else {
        match &category.entries {
            CategoryEntries::Subcategories(subcategories) => CategoryContent::Subcategories(
                subcategories.iter().filter(|sub| sub.item_count() > 0).collect(),
            ),
            CategoryEntries::Items(items) => CategoryContent::Items {
                items: items.as_slice(),
                variant: row_variant(&category.category_id, has_active_items),
            },
        }
    };
    Some(CategoryPlan { category, content })
}

/// Plan every category, dropping the ones that render nothing.
pub fn plan_categories(categories: &[Category], has_active_items: bool) -> Vec<CategoryPlan<'_>> {
    categories
        .iter()
        .filter_map(|category| plan_category(category, has_active_items))
        .collect()
}
