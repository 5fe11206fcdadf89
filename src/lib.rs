//! Landing page for the Brain Project web frontend.
//!
//! The library half is framework-agnostic and runs natively: it holds the
//! page copy, the render description of the landing page, and the navigation
//! capability the page delegates to. The `frontend` feature builds the Leptos
//! application that mounts it in the browser.

pub mod content;
pub mod layout;
pub mod navigation;

#[cfg(test)]
mod navigation_test;
