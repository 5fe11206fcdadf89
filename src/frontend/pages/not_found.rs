use brain_web::content::LANDING_PATH;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page not found"</p>
            <a href=LANDING_PATH>"Back to start"</a>
        </div>
    }
}
