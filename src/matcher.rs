use log::{debug, trace, warn};

use crate::error::Error;
use crate::model::{Decision, FilterConfig, Visibility};
use crate::pattern::Pattern;

#[cfg(test)]
#[path = "test/matcher_test.rs"]
mod matcher_test;

/// The host capabilities the filter needs from a document.
pub trait RenderTarget {
    type Element;

    /// Elements carrying `marker_class`, in document order.
    fn marked_elements(&self, marker_class: &str) -> Vec<Self::Element>;

    /// The concatenated text of every descendant text node.
    fn text_content(&self, element: &Self::Element) -> String;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    fn set_display(&mut self, element: &Self::Element, display: &str);
}

/// Materialize the marked elements and their text before anything is mutated.
pub fn snapshot<T: RenderTarget>(target: &T, marker_class: &str) -> Vec<(T::Element, String)> {
    target
        .marked_elements(marker_class)
        .into_iter()
        .map(|element| {
            let text = target.text_content(&element);
            (element, text)
        })
        .collect()
}

pub fn decide<E, S, I>(pattern: &Pattern, elements: I) -> Vec<Decision<E>>
where
    S: AsRef<str>,
    I: IntoIterator<Item = (E, S)>,
{
    elements
        .into_iter()
        .map(|(element, text)| {
            let visibility = Visibility::from_match(pattern.is_match(text.as_ref()));
            trace!("{:?} {:?} => {:?}", pattern.to_string(), text.as_ref(), visibility);
            Decision::new(element, visibility)
        })
        .collect()
}

/// Write the display of each decided element's parent, returning how many
/// parents were written.
pub fn apply<T: RenderTarget>(
    target: &mut T,
    decisions: &[Decision<T::Element>],
    config: &FilterConfig,
) -> usize {
    let mut written = 0;
    for decision in decisions {
        match target.parent(&decision.element) {
            Some(parent) => {
                target.set_display(&parent, decision.visibility.display(config));
                written += 1;
            }
            None => warn!("marked element without a parent element, skipping"),
        }
    }
    written
}

/// Snapshot, decide and apply in one pass.
pub fn filter_with<T: RenderTarget>(
    target: &mut T,
    pattern: &Pattern,
    config: &FilterConfig,
) -> Vec<Decision<T::Element>> {
    let elements = snapshot(target, &config.marker_class);
    let decisions = decide(pattern, elements);
    let written = apply(target, &decisions, config);
    debug!(
        "filtered .{} by {}: {} visible, {} hidden, {} parents written",
        config.marker_class,
        pattern,
        decisions.iter().filter(|d| d.visibility.is_visible()).count(),
        decisions.iter().filter(|d| !d.visibility.is_visible()).count(),
        written
    );
    decisions
}

/// Show the parents of `.branch` elements whose text matches `expression`
/// and hide the others.
///
/// The expression is compiled before the document is touched, so an invalid
/// one leaves every display as it was.
pub fn filter<T: RenderTarget>(target: &mut T, expression: &str) -> Result<(), Error> {
    let pattern = Pattern::new(expression)?;
    filter_with(target, &pattern, &FilterConfig::default());
    Ok(())
}
