//! Router-backed navigation for the browser.

use brain_web::navigation::Navigator;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// [`Navigator`] that hands paths to the enclosing `Router`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        web_sys::console::debug_1(&format!("Navigating to {}", path).into());
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Must be called under a `Router`.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static>
{
    RouterNavigator {
        navigate: use_navigate(),
    }
}
