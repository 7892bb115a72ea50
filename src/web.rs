//! The live browser document as a filter target.

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

use crate::matcher::RenderTarget;

#[cfg(test)]
#[path = "test/web_test.rs"]
mod web_test;

pub struct DomTarget {
    document: Document,
}

impl DomTarget {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl RenderTarget for DomTarget {
    type Element = Element;

    fn marked_elements(&self, marker_class: &str) -> Vec<Element> {
        // the collection is live, copy it out before anything is written
        let collection = self.document.get_elements_by_class_name(marker_class);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn text_content(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn set_display(&mut self, element: &Element, display: &str) {
        let Some(style) = inline_style(element) else {
            warn!("<{}> has no inline style, display not set", element.tag_name());
            return;
        };
        if let Err(err) = style.set_property("display", display) {
            warn!("setting display on <{}> failed: {:?}", element.tag_name(), err);
        }
    }
}

fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        return Some(element.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

/// `filter(exp)` for page scripts: show the parents of `.branch` elements whose
/// text matches `exp`, hide the others.
#[wasm_bindgen(js_name = filter)]
pub fn filter_document(exp: &str) -> Result<(), JsError> {
    let mut target = DomTarget::from_window().ok_or_else(|| JsError::new("no document to filter"))?;
    crate::filter(&mut target, exp).map_err(|e| JsError::new(&e.to_string()))
}
