use test_case::test_case;

use crate::{Document, Error};

fn tree() -> Document {
    Document::from_json(
        r#"{ "tag": "main", "id": "main", "children": [
            { "tag": "section", "id": "first", "class": "branch open", "children": [
                "alpha ",
                { "tag": "em", "id": "nested", "class": "branch", "children": ["beta"] }
            ] },
            { "tag": "section", "id": "second", "class": "closed", "display": "none", "children": ["gamma"] },
            { "tag": "aside", "id": "last", "class": "branch" }
        ] }"#,
    )
    .unwrap()
}

#[test]
fn elements_by_class_name_in_tree_order() {
    let document = tree();
    let expected: Vec<_> = ["first", "nested", "last"]
        .iter()
        .map(|id| document.element_by_id(id).unwrap())
        .collect();

    assert_eq!(expected, document.elements_by_class_name("branch"));
}

#[test_case("open", vec!["first"]; "second class in the list")]
#[test_case("closed", vec!["second"]; "single class")]
#[test_case("bran", vec![]; "no partial class match")]
fn elements_by_class_name(class: &str, ids: Vec<&str>) {
    let document = tree();
    let expected: Vec<_> = ids
        .iter()
        .map(|id| document.element_by_id(id).unwrap())
        .collect();

    assert_eq!(expected, document.elements_by_class_name(class));
}

#[test_case("main", "alpha betagamma"; "whole tree")]
#[test_case("first", "alpha beta"; "text and nested element")]
#[test_case("nested", "beta"; "leaf element")]
#[test_case("last", ""; "no children")]
fn text_content(id: &str, expected: &str) {
    let document = tree();
    let node = document.element_by_id(id).unwrap();

    assert_eq!(expected, document.text_content(node));
}

#[test]
fn parent_element() {
    let document = tree();
    let main = document.element_by_id("main").unwrap();
    let first = document.element_by_id("first").unwrap();
    let nested = document.element_by_id("nested").unwrap();

    assert_eq!(Some(first), document.parent_element(nested));
    assert_eq!(Some(main), document.parent_element(first));
    assert_eq!(None, document.parent_element(main));
    assert_eq!(None, document.parent_element(document.root()));
}

#[test]
fn display_from_json_and_set_display() {
    let mut document = tree();
    let first = document.element_by_id("first").unwrap();
    let second = document.element_by_id("second").unwrap();

    assert_eq!(None, document.display(first));
    assert_eq!(Some("none"), document.display(second));

    document.set_display(first, "inherit");
    assert_eq!(Some("inherit"), document.display(first));
}

#[test]
fn display_on_non_element_is_ignored() {
    let mut document = Document::new();
    let root = document.root();
    document.set_display(root, "none");

    assert_eq!(None, document.display(root));
}

#[test]
fn build_by_hand() {
    let mut document = Document::new();
    let list = document.append_element(document.root(), "ul", &[]);
    let item = document.append_element(list, "li", &[]);
    let label = document.append_element(item, "span", &["branch"]);
    document.append_text(label, "apple");
    document.set_id(item, "item");

    assert_eq!(Some("li"), document.tag_name(item));
    assert_eq!(Some(item), document.element_by_id("item"));
    assert_eq!(vec![label], document.elements_by_class_name("branch"));
    assert_eq!("apple", document.text_content(list));
}

#[test]
fn first_id_wins() {
    let document = Document::from_json(
        r#"[{ "tag": "p", "id": "dup", "children": ["one"] }, { "tag": "p", "id": "dup", "children": ["two"] }]"#,
    )
    .unwrap();
    let node = document.element_by_id("dup").unwrap();

    assert_eq!("one", document.text_content(node));
}

#[test]
fn text_root() {
    let document = Document::from_json(r#""just text""#).unwrap();

    assert_eq!("just text", document.text_content(document.root()));
    assert!(document.elements_by_class_name("branch").is_empty());
}

#[test_case("{"; "truncated")]
#[test_case(r#"{ "id": "no-tag" }"#; "element without tag")]
#[test_case("42"; "number")]
fn invalid_document(input: &str) {
    assert!(matches!(
        Document::from_json(input),
        Err(Error::InvalidDocument(_))
    ));
}
