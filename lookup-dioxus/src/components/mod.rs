//! UI Components for the categorical lookup display.
//!
//! `CategoricalDisplay` composes the rest; the pieces are exported for hosts
//! that lay out the search box or results panel themselves.

mod categorical_display;
mod favorite;
mod filter_panel;
pub mod icons;
mod item_row;
mod lookup_input;
mod results_panel;
mod scroll_panel;

pub use categorical_display::CategoricalDisplay;
pub use favorite::Favorite;
pub use filter_panel::FilterPanel;
pub use item_row::{ActiveItemRow, ItemRow};
pub use lookup_input::LookupInput;
pub use results_panel::{CategoryBlock, ResultsPanel};
pub use scroll_panel::{scroll_direction, ScrollDirection, ScrollPanel};
