//! Sidebar component.
//!
//! ## Responsive behavior
//!
//! | Breakpoint | Display |
//! |------------|---------|
//! | Wide (>= 768px) | Docked column, always visible |
//! | Narrow (< 768px) | Overlay sliding in from the left, closed by the close button or a press outside |

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use leptos_use::use_event_listener;

use super::buttons::CloseSidebarButton;
use super::hooks::{StyleControls, use_viewport};
use super::route_link::SidebarRouteLink;
use crate::app::AppContext;
use crate::components::logo::Logo;
use crate::config::{SIDEBAR_REVEAL_DELAY_MS, SIDEBAR_TRANSITION_SECS};
use crate::core::{Dismissal, DismissalWatcher, ViewportReading, VisibilityController};
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Drive the animation from the viewport reading and the open flag.
fn setup_visibility_effect(
    ctx: &AppContext,
    controls: StyleControls,
    viewport: Signal<ViewportReading>,
) {
    let controller =
        VisibilityController::new(controls, ctx.first_load.clone(), SIDEBAR_TRANSITION_SECS);
    let sidebar = ctx.sidebar;

    Effect::new(move || {
        controller.evaluate(viewport.get(), sidebar.get());
    });
}

/// Close the sidebar on presses outside of it.
///
/// The listener lives on the document and is removed with the component.
fn setup_dismissal(
    ctx: &AppContext,
    viewport: Signal<ViewportReading>,
    root: NodeRef<leptos::html::Aside>,
) {
    let watcher = DismissalWatcher::new(ctx.sidebar);

    let _ = use_event_listener(document(), ev::pointerdown, move |event| {
        // Unmounted root: nothing to compare the path against
        let Some(el) = root.get_untracked() else {
            return;
        };
        let inside = dom::event_path_contains(&event, &el);
        let class = viewport.get_untracked().class();
        if let Dismissal::Ignored(reason) = watcher.on_press(class, inside) {
            log::trace!("outside press ignored: {:?}", reason);
        }
    });
}

/// Reveal the element after a short delay.
///
/// The timeout is cleared if the component is torn down before it fires.
fn setup_reveal_timer(revealed: RwSignal<bool>) {
    match set_timeout_with_handle(
        move || revealed.set(true),
        Duration::from_millis(SIDEBAR_REVEAL_DELAY_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => revealed.set(true),
    }
}

/// Navigation sidebar with logo, close button and route links.
#[component]
pub fn Sidebar(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let root = NodeRef::<leptos::html::Aside>::new();
    let controls = StyleControls::new();
    let viewport = use_viewport();
    let revealed = RwSignal::new(false);

    setup_visibility_effect(&ctx, controls, viewport);
    setup_dismissal(&ctx, viewport, root);
    setup_reveal_timer(revealed);

    let is_narrow = Signal::derive(move || viewport.get().is_narrow());
    let routes = ctx.site.with_value(|site| site.routes.clone());

    let root_class = move || {
        if is_narrow.get() && !revealed.get() {
            format!("{} {}", css::sidebar, css::hidden)
        } else {
            css::sidebar.to_string()
        }
    };

    view! {
        <aside
            node_ref=root
            class=root_class
            style:transform=move || controls.transform()
            style:transition=move || controls.transition()
            aria-hidden=move || (is_narrow.get() && controls.is_hidden()).to_string()
        >
            <div class=css::head>
                <Logo />
                <Show when=move || is_narrow.get()>
                    <CloseSidebarButton />
                </Show>
            </div>

            <nav class=css::routes>
                {routes
                    .into_iter()
                    .map(|r| view! { <SidebarRouteLink route=r current=route /> })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn delay(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(window) = dom::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn test_reveal_timer_fires_after_delay() {
        let owner = Owner::new();
        let revealed = owner.with(|| {
            let revealed = RwSignal::new(false);
            setup_reveal_timer(revealed);
            revealed
        });
        assert!(!revealed.get_untracked());

        delay(SIDEBAR_REVEAL_DELAY_MS as i32 + 50).await;
        assert!(revealed.get_untracked());
    }

    #[wasm_bindgen_test]
    async fn test_reveal_timer_cleared_on_cleanup() {
        let owner = Owner::new();
        let (revealed, child) = owner.with(|| {
            let revealed = RwSignal::new(false);
            let child = Owner::new();
            child.with(|| setup_reveal_timer(revealed));
            (revealed, child)
        });

        // Tear down the component scope before the timeout fires
        child.cleanup();
        delay(SIDEBAR_REVEAL_DELAY_MS as i32 + 50).await;
        assert!(!revealed.get_untracked());
    }
}
