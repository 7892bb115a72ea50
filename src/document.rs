use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::matcher::RenderTarget;

#[cfg(test)]
#[path = "test/document_test.rs"]
mod document_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    classes: Vec<String>,
    display: Option<String>,
}

/// A node tree as written in JSON: a string is a text node, an object is an
/// element.
///
/// ```json
/// { "tag": "li", "children": [{ "tag": "span", "class": "branch", "children": ["apple"] }] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Text(String),
    Element {
        tag: String,
        #[serde(default)]
        id: Option<String>,
        /// whitespace separated, like the HTML attribute
        #[serde(default)]
        class: String,
        #[serde(default)]
        display: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Roots {
    Many(Vec<NodeSpec>),
    One(NodeSpec),
}

/// An in-memory document: a document node owning a tree of elements and
/// text nodes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    /// Build a document from one node tree or an array of them, appended
    /// under the document node.
    pub fn from_json(input: &str) -> Result<Self, Error> {
        let specs = match serde_json::from_str::<Roots>(input)? {
            Roots::Many(specs) => specs,
            Roots::One(spec) => vec![spec],
        };
        let mut document = Self::new();
        let root = document.root;
        for spec in &specs {
            document.append_spec(root, spec);
        }
        Ok(document)
    }

    pub fn append_spec(&mut self, parent: NodeId, spec: &NodeSpec) -> NodeId {
        match spec {
            NodeSpec::Text(text) => self.append_text(parent, text),
            NodeSpec::Element {
                tag,
                id,
                class,
                display,
                children,
            } => {
                let classes: Vec<&str> = class.split_whitespace().collect();
                let node_id = self.append_element(parent, tag, &classes);
                if let Some(id) = id {
                    self.set_id(node_id, id);
                }
                if let Some(display) = display {
                    self.set_display(node_id, display);
                }
                for child in children {
                    self.append_spec(node_id, child);
                }
                node_id
            }
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn create_node(&mut self, parent: NodeId, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        id
    }

    pub fn append_element(&mut self, parent: NodeId, tag_name: &str, classes: &[&str]) -> NodeId {
        let element = Element {
            tag_name: tag_name.to_owned(),
            classes: classes.iter().map(|class| class.to_string()).collect(),
            display: None,
        };
        self.create_node(parent, NodeType::Element(element))
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.create_node(parent, NodeType::Text(text.to_owned()))
    }

    /// The first element given an id keeps it.
    pub fn set_id(&mut self, node_id: NodeId, id: &str) {
        if self.element(node_id).is_some() {
            self.id_index.entry(id.to_owned()).or_insert(node_id);
        }
    }

    fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id.0)
    }

    fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.node(node_id)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// Elements carrying `class`, in tree order.
    pub fn elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node_id) = stack.pop() {
            let Some(node) = self.node(node_id) else {
                continue;
            };
            if let NodeType::Element(element) = &node.node_type {
                if element.classes.iter().any(|c| c == class) {
                    found.push(node_id);
                }
            }
            stack.extend(node.children.iter().rev());
        }
        found
    }

    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node_id, &mut out);
        out
    }

    fn collect_text(&self, node_id: NodeId, out: &mut String) {
        let Some(node) = self.node(node_id) else {
            return;
        };
        match &node.node_type {
            NodeType::Text(text) => out.push_str(text),
            NodeType::Document | NodeType::Element(_) => {
                for child in &node.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    pub fn parent_element(&self, node_id: NodeId) -> Option<NodeId> {
        let parent = self.node(node_id)?.parent?;
        self.element(parent).map(|_| parent)
    }

    pub fn display(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id)?.display.as_deref()
    }

    pub fn set_display(&mut self, node_id: NodeId, display: &str) {
        if let Some(element) = self.element_mut(node_id) {
            element.display = Some(display.to_owned());
        }
    }
}

impl RenderTarget for Document {
    type Element = NodeId;

    fn marked_elements(&self, marker_class: &str) -> Vec<NodeId> {
        self.elements_by_class_name(marker_class)
    }

    fn text_content(&self, element: &NodeId) -> String {
        Document::text_content(self, *element)
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.parent_element(*element)
    }

    fn set_display(&mut self, element: &NodeId, display: &str) {
        Document::set_display(self, *element, display)
    }
}
