//! Search box with clear control.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::icons::{Icon, CLOSE, SEARCH};

/// Container class; `active` while the filter has non-blank text.
pub(crate) fn lookup_input_class(filter_text: &str) -> &'static str {
    if filter_text.trim().is_empty() {
        "cq-lookup-input"
    } else {
        "cq-lookup-input active"
    }
}

/// Text input bound to the caller's filter text.
///
/// The clear icon only notifies `clear_filter_text`; resetting the text is
/// up to the caller.
#[component]
pub fn LookupInput(
    filter_text: String,
    #[props(default)] placeholder_text: String,
    #[props(default)] set_filter_text: Option<EventHandler<String>>,
    #[props(default)] clear_filter_text: Option<EventHandler<()>>,
    /// Receives the input element, e.g. to focus it.
    #[props(default)]
    on_input_mounted: Option<EventHandler<Rc<MountedData>>>,
) -> Element {
    rsx! {
        div {
            class: lookup_input_class(&filter_text),
            input {
                r#type: "text",
                value: "{filter_text}",
                placeholder: "{placeholder_text}",
                spellcheck: "false",
                autocomplete: "off",
                "autocorrect": "off",
                autocapitalize: "off",
                onmounted: move |evt: MountedEvent| {
                    if let Some(handler) = &on_input_mounted {
                        handler.call(evt.data());
                    }
                },
                oninput: move |evt: FormEvent| {
                    if let Some(handler) = &set_filter_text {
                        handler.call(evt.value());
                    }
                },
            }
            Icon { data: SEARCH }
            Icon {
                data: CLOSE,
                class: "icon-reset".to_string(),
                on_click: move |_| {
                    log::debug!("Clearing lookup filter");
                    if let Some(handler) = &clear_filter_text {
                        handler.call(());
                    }
                },
            }
        }
    }
}
