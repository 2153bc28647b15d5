//! Reactive glue between the browser and the sidebar policy.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::config::NARROW_VIEWPORT_QUERY;
use crate::core::{AnimationControls, AnimationMode, AnimationTarget, ViewportReading};
use crate::utils::dom;

/// Track the viewport against the sidebar breakpoint.
///
/// The media query listener is registered here and released when the
/// calling component's owner is disposed. Until the first effect has run
/// on the client the reading stays provisional; afterwards it is confirmed
/// by measuring the query directly, or stays provisional if the window
/// cannot answer.
pub fn use_viewport() -> Signal<ViewportReading> {
    let reported_narrow = use_media_query(NARROW_VIEWPORT_QUERY);
    let client_ready = RwSignal::new(false);

    // Effects only run once mounted in the browser
    Effect::new(move || client_ready.set(true));

    Signal::derive(move || {
        let reported = reported_narrow.get();
        let ready = client_ready.get();
        let measured = if ready {
            dom::media_matches(NARROW_VIEWPORT_QUERY)
        } else {
            None
        };
        ViewportReading::resolve(reported, ready, measured)
    })
}

/// [`AnimationControls`] rendered as inline `transform`/`transition` styles.
#[derive(Clone, Copy)]
pub struct StyleControls {
    target: RwSignal<AnimationTarget>,
    mode: RwSignal<AnimationMode>,
}

impl StyleControls {
    /// Starts hidden, matching the sidebar's initial off-screen position.
    pub fn new() -> Self {
        Self {
            target: RwSignal::new(AnimationTarget::Hidden),
            mode: RwSignal::new(AnimationMode::Instant),
        }
    }

    pub fn transform(&self) -> &'static str {
        match self.target.get() {
            AnimationTarget::Hidden => "translateX(-100%)",
            AnimationTarget::Visible => "translateX(0)",
        }
    }

    pub fn transition(&self) -> String {
        match self.mode.get() {
            AnimationMode::Instant => "none".to_string(),
            AnimationMode::Animated { duration_secs } => {
                format!("transform {}s ease", duration_secs)
            }
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.target.get() == AnimationTarget::Hidden
    }
}

impl Default for StyleControls {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationControls for StyleControls {
    fn set(&self, target: AnimationTarget) {
        self.mode.set(AnimationMode::Instant);
        self.target.set(target);
    }

    fn start(&self, target: AnimationTarget, duration_secs: f64) {
        self.mode.set(AnimationMode::Animated { duration_secs });
        self.target.set(target);
    }
}
