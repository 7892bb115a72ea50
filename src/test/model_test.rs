use test_case::test_case;

use crate::model::{FilterConfig, Visibility};

#[test_case("{}", "branch", "inherit", "none"; "all defaults")]
#[test_case(r#"{ "marker_class": "leaf" }"#, "leaf", "inherit", "none"; "marker class only")]
#[test_case(r#"{ "visible_display": "block", "hidden_display": "hidden" }"#, "branch", "block", "hidden"; "display values")]
fn config_from_json(input: &str, marker_class: &str, visible: &str, hidden: &str) {
    let config = FilterConfig::from_json(input).unwrap();

    assert_eq!(
        FilterConfig {
            marker_class: marker_class.to_string(),
            visible_display: visible.to_string(),
            hidden_display: hidden.to_string(),
        },
        config
    );
}

#[test]
fn config_from_invalid_json() {
    assert!(FilterConfig::from_json(r#"{ "marker_class": 3 }"#).is_err());
}

#[test_case(Visibility::Visible, "inherit"; "visible")]
#[test_case(Visibility::Hidden, "none"; "hidden")]
fn display_with_default_config(visibility: Visibility, expected: &str) {
    assert_eq!(expected, visibility.display(&FilterConfig::default()));
}

#[test_case(true, Visibility::Visible; "match")]
#[test_case(false, Visibility::Hidden; "no match")]
fn from_match(matched: bool, expected: Visibility) {
    assert_eq!(expected, Visibility::from_match(matched));
}

#[test]
fn visibility_serializes_lowercase() {
    assert_eq!(
        r#"["visible","hidden"]"#,
        serde_json::to_string(&[Visibility::Visible, Visibility::Hidden]).unwrap()
    );
}
