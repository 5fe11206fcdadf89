use brain_web::content::LANDING_PATH;
use leptos::prelude::*;

#[component]
pub fn Users() -> impl IntoView {
    view! {
        <div class="users-page">
            <h2>"Users"</h2>
            <p>"User listing coming soon"</p>
            <a href=LANDING_PATH>"Back to start"</a>
        </div>
    }
}
