use std::collections::HashMap;

use crate::element::{count_elements, Content, Element};
use crate::types::Display;
use crate::window::Window;

/// Stable handle of an element inside a [`Document`].
///
/// Handles are assigned in document order, so comparing two handles compares
/// their position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// An attached element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub text: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    pub data: HashMap<String, String>,
    pub display: Display,

    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Arena-backed element tree plus the window it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
    window: Window,
}

impl Document {
    /// Attach a detached element tree. The root gets `NodeId` 0 and the rest
    /// follow in pre-order.
    pub fn new(root: Element) -> Self {
        let mut nodes = Vec::with_capacity(count_elements(&root));
        attach(&mut nodes, root, None);
        log::trace!("attached document with {} elements", nodes.len());
        Self {
            nodes,
            window: Window::default(),
        }
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// All elements in document order.
    pub fn descendants(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.node(id).and_then(Node::parent),
        }
    }

    // Queries

    /// First element in document order whose `id` equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants()
            .find(|node| self.nodes[node.0].id.as_deref() == Some(id))
    }

    /// Elements carrying the `data-<key>` attribute, in document order.
    pub fn query_data(&self, key: &str) -> Vec<NodeId> {
        self.descendants()
            .filter(|node| self.nodes[node.0].data.contains_key(key))
            .collect()
    }

    /// Elements whose `data-<key>` equals `value`, in document order.
    pub fn query_data_eq(&self, key: &str, value: &str) -> Vec<NodeId> {
        self.descendants()
            .filter(|node| self.data_eq(*node, key, value))
            .collect()
    }

    /// Nearest element, starting at `id` itself, whose `data-<key>` equals `value`.
    pub fn closest_data_eq(&self, id: NodeId, key: &str, value: &str) -> Option<NodeId> {
        self.node(id)?;
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|node| self.data_eq(*node, key, value))
    }

    fn data_eq(&self, id: NodeId, key: &str, value: &str) -> bool {
        self.data(id, key) == Some(value)
    }

    // Reads

    pub fn id(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.id.as_deref()
    }

    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.node(id)?.data.get(key).map(String::as_str)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|node| node.has_class(class))
    }

    pub fn display(&self, id: NodeId) -> Display {
        self.node(id).map(|node| node.display).unwrap_or_default()
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    // Mutation

    pub fn set_id(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.id = Some(value.into());
        }
    }

    /// Add a class. Returns true if the class was not present before.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        if class.is_empty() || node.has_class(class) {
            return false;
        }
        node.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if the class was present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        node.classes.len() != before
    }

    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.insert(name.into(), value.into());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.node_mut(id)?.attrs.remove(name)
    }

    pub fn set_display(&mut self, id: NodeId, display: Display) {
        if let Some(node) = self.node_mut(id) {
            node.display = display;
        }
    }

    // Window

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window.resize(width, height);
    }

    pub fn hash(&self) -> &str {
        self.window.hash()
    }

    pub fn set_hash(&mut self, hash: impl AsRef<str>) {
        self.window.set_hash(hash);
    }
}

fn attach(nodes: &mut Vec<Node>, element: Element, parent: Option<NodeId>) -> NodeId {
    let id = NodeId(nodes.len());
    let (text, children) = match element.content {
        Content::None => (None, Vec::new()),
        Content::Text(text) => (Some(text), Vec::new()),
        Content::Children(children) => (None, children),
    };

    nodes.push(Node {
        tag: element.tag,
        id: element.id,
        text,
        classes: element.classes,
        attrs: element.attrs,
        data: element.data,
        display: element.display,
        parent,
        children: Vec::with_capacity(children.len()),
    });

    for child in children {
        let child_id = attach(nodes, child, Some(id));
        nodes[id.0].children.push(child_id);
    }

    id
}

/// Iterator over the ancestors of an element, nearest first.
pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.document.node(current).and_then(Node::parent);
        Some(current)
    }
}
