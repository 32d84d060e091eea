//! Scrollable container that reports position and direction.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::events::ScrollPosition;

/// Direction of a vertical scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Direction between two offsets, or `None` when the offset did not move.
pub fn scroll_direction(previous: f64, current: f64) -> Option<ScrollDirection> {
    if current > previous {
        Some(ScrollDirection::Down)
    } else if current < previous {
        Some(ScrollDirection::Up)
    } else {
        None
    }
}

/// Orders the asynchronous offset reads of a scroll container.
///
/// Each scroll event takes a ticket before reading the offset. A read that
/// completes after a newer one has been applied is dropped.
#[derive(Debug, Default)]
struct OffsetTracker {
    issued: u64,
    applied: u64,
    last_offset: f64,
}

impl OffsetTracker {
    fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn finish(&mut self, ticket: u64, offset: f64) -> Option<(ScrollPosition, Option<ScrollDirection>)> {
        if ticket <= self.applied {
            return None;
        }
        self.applied = ticket;
        let previous = std::mem::replace(&mut self.last_offset, offset);
        let position = ScrollPosition {
            top: offset,
            delta: offset - previous,
        };
        Some((position, scroll_direction(previous, offset)))
    }
}

/// Vertical scroll container.
///
/// The element is handed to `on_mounted` so the caller can scroll it
/// programmatically. Every scroll event reports the new offset to
/// `on_scroll_y`, then `on_scroll_up` or `on_scroll_down` if it moved.
#[component]
pub fn ScrollPanel(
    #[props(default = "cq-scroll-panel".to_string())] class: String,
    #[props(default)] on_mounted: Option<EventHandler<Rc<MountedData>>>,
    #[props(default)] on_scroll_y: Option<EventHandler<ScrollPosition>>,
    #[props(default)] on_scroll_up: Option<EventHandler<()>>,
    #[props(default)] on_scroll_down: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let mut tracker = use_signal(OffsetTracker::default);

    let onmounted = move |evt: MountedEvent| {
        let data = evt.data();
        element.set(Some(data.clone()));
        if let Some(handler) = &on_mounted {
            handler.call(data);
        }
    };

    // The scroll event carries no offset, so read it back from the element.
    let onscroll = move |_evt: ScrollEvent| {
        let Some(mounted) = element() else {
            return;
        };
        let ticket = tracker.write().begin();
        spawn(async move {
            let offset = match mounted.get_scroll_offset().await {
                Ok(offset) => offset.y,
                Err(err) => {
                    log::debug!("Failed to read scroll offset: {err:?}");
                    return;
                }
            };

            let update = tracker.write().finish(ticket, offset);
            let Some((position, direction)) = update else {
                log::trace!("Dropping stale scroll offset {offset}");
                return;
            };

            if let Some(handler) = &on_scroll_y {
                handler.call(position);
            }

            let handler = match direction {
                Some(ScrollDirection::Up) => on_scroll_up,
                Some(ScrollDirection::Down) => on_scroll_down,
                None => None,
            };
            if let Some(handler) = handler {
                handler.call(());
            }
        });
    };

    rsx! {
        div {
            class: "{class}",
            onmounted,
            onscroll,
            {children}
        }
    }
}
