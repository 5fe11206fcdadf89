use brain_web::content::STYLESHEET_HREF;
use brain_web::layout::landing_page;
use leptos::prelude::*;
use leptos_meta::Stylesheet;

use crate::components::render_node;
use crate::navigation::use_router_navigator;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigator = use_router_navigator();

    view! {
        <Stylesheet id="landing-page" href=STYLESHEET_HREF/>
        {render_node(&landing_page(), &navigator)}
    }
}
