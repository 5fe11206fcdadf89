//! Navigation capability the landing page delegates route transitions to.
//!
//! The page never navigates by itself. Activating a link hands its
//! destination to a [`Navigator`], which the hosting application backs with
//! its router.

use miette::Diagnostic;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::layout::{Element, Node, Tag};

/// Errors raised when activating an element of a rendered tree.
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No element with id '{id}' in the rendered tree")]
    #[diagnostic(code(brain_web::navigation::not_found))]
    NotFound { id: String },

    #[error("Element '{id}' does not navigate")]
    #[diagnostic(
        code(brain_web::navigation::not_navigable),
        help("Only link elements carry a destination path.")
    )]
    NotNavigable { id: String },

    #[error("Link '{id}' has no destination path")]
    #[diagnostic(code(brain_web::navigation::missing_destination))]
    MissingDestination { id: String },
}

pub type NavigationResult<T> = Result<T, NavigationError>;

/// Requests a transition to a logical path. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait Navigator {
    /// Request navigation to `path`. Fire-and-forget: the router owns the outcome.
    fn navigate(&self, path: &str);
}

impl Element {
    /// Activate this element, issuing one navigation request if it is a link.
    pub fn activate<N: Navigator + ?Sized>(&self, navigator: &N) -> NavigationResult<()> {
        let id = || self.id.clone().unwrap_or_default();

        if self.tag != Tag::Link {
            return Err(NavigationError::NotNavigable { id: id() });
        }
        let href = self
            .href
            .as_deref()
            .ok_or_else(|| NavigationError::MissingDestination { id: id() })?;

        navigator.navigate(href);
        Ok(())
    }

    /// Click handler for this element. Each call is one activation.
    pub fn click_handler<N: Navigator>(
        &self,
        navigator: N,
    ) -> impl Fn() -> NavigationResult<()> + use<N> {
        let element = self.clone();
        move || element.activate(&navigator)
    }
}

/// Activate the element identified by `id` within `tree`.
pub fn activate<N: Navigator + ?Sized>(
    tree: &Node,
    id: &str,
    navigator: &N,
) -> NavigationResult<()> {
    tree.find_by_id(id)
        .ok_or_else(|| NavigationError::NotFound { id: id.to_string() })?
        .activate(navigator)
}
