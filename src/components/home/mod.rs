//! Landing page: greeting, short intro and link buttons.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::SiteLink;
use crate::models::href_for;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let home = ctx.site.with_value(|site| site.home.clone());

    view! {
        <section class=css::greet>
            <h2 class=css::heading>
                {home.greeting}
                <br />
                {home.headline}
            </h2>
            <p class=css::intro>{home.intro}</p>
            <div class=css::buttons>
                {home.links.into_iter().map(|link| view! { <LinkButton link=link /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// External links open in a new tab; internal ones route through the hash.
#[component]
fn LinkButton(link: SiteLink) -> impl IntoView {
    if link.external {
        view! {
            <a class=css::button href=link.href target="_blank" rel="noreferrer">
                {link.label}
                <span class=css::externalIcon><Icon icon=ic::EXTERNAL_LINK /></span>
            </a>
        }
        .into_any()
    } else {
        view! {
            <a class=css::button href=href_for(&link.href)>
                {link.label}
            </a>
        }
        .into_any()
    }
}
