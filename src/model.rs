use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "test/model_test.rs"]
mod model_test;

pub const DEFAULT_MARKER_CLASS: &str = "branch";
pub const VISIBLE_DISPLAY: &str = "inherit";
pub const HIDDEN_DISPLAY: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }

    /// The display style value written on the parent for this visibility.
    pub fn display<'a>(&self, config: &'a FilterConfig) -> &'a str {
        match self {
            Self::Visible => &config.visible_display,
            Self::Hidden => &config.hidden_display,
        }
    }
}

/// What the filter decided for one marked element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision<E> {
    pub element: E,
    pub visibility: Visibility,
}

impl<E> Decision<E> {
    pub fn new(element: E, visibility: Visibility) -> Self {
        Self {
            element,
            visibility,
        }
    }
}

/// Which elements are filtered and which display values are written.
///
/// Every field is optional when deserializing:
///
/// ```json
/// { "marker_class": "leaf", "visible_display": "block" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub marker_class: String,
    pub visible_display: String,
    pub hidden_display: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            visible_display: VISIBLE_DISPLAY.to_owned(),
            hidden_display: HIDDEN_DISPLAY.to_owned(),
        }
    }
}

impl FilterConfig {
    pub fn from_json(input: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(input)?)
    }
}
