use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions,
};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::section::SectionId;
use crate::tracker::{
    self, reaches_reveal_threshold, required_reveal_ratio, ScrollMetrics, ScrollSnapshot,
    SectionBounds, Viewport, VisibleSections, REVEAL_STEPS,
};

/// The live window and document.
pub struct BrowserViewport;

impl BrowserViewport {
    fn element(id: SectionId) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id.as_str())
    }
}

impl Viewport for BrowserViewport {
    fn metrics(&self) -> ScrollMetrics {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let scroll_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        ScrollMetrics {
            scroll_top: window.scroll_y().unwrap_or_default(),
            scroll_height,
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default(),
        }
    }

    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let rect = Self::element(id)?.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn scroll_to_section(&self, id: SectionId) -> bool {
        let Some(el) = Self::element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Smooth-scrolls to the section with DOM id `target`; unknown ids do nothing.
pub fn scroll_to_section(target: &str) {
    if tracker::navigate(&BrowserViewport, target).is_none() {
        log::debug!("no section to scroll to: {target}");
    }
}

/// Keeps `snapshot` in step with the window's scroll position for the
/// lifetime of the calling component.
pub fn use_scroll_tracker(snapshot: RwSignal<ScrollSnapshot>) {
    let update = move || {
        let next = tracker::sample(&BrowserViewport);
        if snapshot.get_untracked() != next {
            snapshot.set(next);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| update());

    // a reload can restore a scroll position without firing a scroll event
    Effect::new(move |_| update());
}

/// Adds `id` to `visible` the first time enough of `target` is on screen.
/// See [`required_reveal_ratio`] for how much that is.
pub fn use_reveal(
    target: NodeRef<html::Section>,
    id: SectionId,
    visible: RwSignal<VisibleSections>,
) {
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let reached = entries.iter().any(|e| {
                let viewport_height = e
                    .root_bounds()
                    .map(|r| r.height())
                    .unwrap_or_else(|| BrowserViewport.metrics().viewport_height);
                let required =
                    required_reveal_ratio(e.bounding_client_rect().height(), viewport_height);
                reaches_reveal_threshold(e.is_intersecting(), e.intersection_ratio(), required)
            });
            if reached && !visible.with_untracked(|v| v.contains(id)) {
                visible.update(|v| {
                    v.reveal(id);
                });
                log::debug!("revealed section {id}");
            }
        },
        UseIntersectionObserverOptions::default().thresholds(REVEAL_STEPS.to_vec()),
    );
}
