//! Test helpers for rendering components headlessly.
//!
//! Components run inside a `VirtualDom` and are rendered to HTML with
//! `dioxus-ssr`, so tests can assert on the emitted markup and class names.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Mutation, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use lookup_core::{Category, Favorites, Item, Translator};

use crate::components::CategoricalDisplay;
use crate::events::ActiveOption;

/// Render a root component with the given props to an HTML string.
pub fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A mounted `VirtualDom` that can receive clicks.
pub struct Interactive {
    dom: VirtualDom,
    clickable: Vec<ElementId>,
}

impl Interactive {
    pub fn new<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new_with_props(root, props);
        let mutations = dom.rebuild_to_vec();
        let clickable = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();
        Self { dom, clickable }
    }

    /// Elements with a click listener, in creation order.
    pub fn clickable(&self) -> Vec<ElementId> {
        self.clickable.clone()
    }

    /// Dispatch a bubbling click on `id` and flush the resulting renders.
    pub fn click(&mut self, id: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, id);
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Arguments a callback was called with.
pub struct Calls<T>(Rc<RefCell<Vec<T>>>);

impl<T> Calls<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Calls<T> {
    pub fn all(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Calls<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Calls<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Props for [`Harness`]: the lookup display plus optional context.
#[derive(Props, Clone, PartialEq)]
pub struct HarnessProps {
    pub categories: Vec<Category>,
    pub filter_text: String,
    pub active_category_key: Option<String>,
    pub has_active_items: bool,
    pub is_mobile: bool,
    pub is_scrolling_down: bool,
    /// Option ids for active rows; `None` leaves the prop unset.
    pub option_ids: Option<Vec<String>>,
    /// Provided as context; keys pass through when unset.
    pub translator: Option<Translator>,
    pub favorites: Option<Favorites>,
}

impl HarnessProps {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            filter_text: String::new(),
            active_category_key: None,
            has_active_items: false,
            is_mobile: false,
            is_scrolling_down: false,
            option_ids: None,
            translator: None,
            favorites: None,
        }
    }
}

/// Hosts `CategoricalDisplay` the way an application would.
#[allow(non_snake_case)]
pub fn Harness(props: HarnessProps) -> Element {
    let translator = props.translator.clone().unwrap_or_default();
    use_context_provider(|| translator);
    let favorites = props.favorites.clone().unwrap_or_default();
    use_context_provider(|| Signal::new(favorites));

    let active_options = props
        .option_ids
        .map(|ids| ids.into_iter().map(ActiveOption::new).collect::<Vec<_>>());

    rsx! {
        CategoricalDisplay {
            filtered_items: props.categories,
            filter_text: props.filter_text,
            favorites_id: "chartTitle",
            active_category_key: props.active_category_key,
            has_active_items: props.has_active_items,
            is_mobile: props.is_mobile,
            is_scrolling_down: props.is_scrolling_down,
            active_options,
        }
    }
}

/// Items with the given ids, displayed as the uppercased id.
pub fn items(ids: &[&str]) -> Vec<Item> {
    ids.iter().map(|id| Item::new(*id, id.to_uppercase())).collect()
}
