use brain_web::content::{LANDING_SEGMENT, USERS_SEGMENT};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{LandingPage, NotFound, Users};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Brain Project"/>
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment(LANDING_SEGMENT) view=LandingPage/>
                    <Route path=StaticSegment(USERS_SEGMENT) view=Users/>
                </Routes>
            </main>
        </Router>
    }
}
