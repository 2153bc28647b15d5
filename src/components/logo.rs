//! Brand logo: first name over a stroked last name, linking home.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/logo.module.css");

#[component]
pub fn Logo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let brand = ctx.site.with_value(|site| site.brand.clone());
    let title = brand.full_name();

    view! {
        <a class=css::logo href=AppRoute::home().to_hash() title=title>
            <span class=css::first>{brand.first}</span>
            <span class=css::last>{brand.last}</span>
        </a>
    }
}
