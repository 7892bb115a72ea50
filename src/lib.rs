mod document;
mod error;
mod matcher;
mod model;
mod pattern;
#[cfg(target_arch = "wasm32")]
mod web;

pub use document::{Document, NodeId, NodeSpec};
pub use error::Error;
pub use matcher::{apply, decide, filter, filter_with, snapshot, RenderTarget};
pub use model::{Decision, FilterConfig, Visibility};
pub use pattern::{Flags, Pattern};
#[cfg(target_arch = "wasm32")]
pub use web::DomTarget;

/// Import this trait to add to every type `x` that can be made into an iterator over
/// `(element, text)` pairs a `x.visibility_filter(expression: &str)` function that returns
/// the visibility decided for each element
pub trait VisibilityFilter {
    type Element;
    fn visibility_filter(self, expression: &str) -> Result<Vec<Decision<Self::Element>>, Error>;
}

impl<E, S: AsRef<str>, T: IntoIterator<Item = (E, S)>> VisibilityFilter for T {
    type Element = E;

    fn visibility_filter(self, expression: &str) -> Result<Vec<Decision<E>>, Error> {
        let pattern = Pattern::new(expression)?;
        Ok(decide(&pattern, self))
    }
}
