//! Host seam.
//!
//! Controllers only ever touch the page through [`Dom`], so any host that can
//! answer these queries and apply these mutations can run groups. The
//! in-memory [`tabby_dom::Document`] is the implementation shipped here.

use tabby_dom::{Display, Document, NodeId};

/// Query and mutation primitives a controller needs from its host.
pub trait Dom {
    /// Elements carrying `data-<key>`, in document order.
    fn query_data(&self, key: &str) -> Vec<NodeId>;

    /// Elements whose `data-<key>` equals `value`, in document order.
    fn query_data_eq(&self, key: &str, value: &str) -> Vec<NodeId>;

    /// Nearest element, `node` included, whose `data-<key>` equals `value`.
    fn closest_data_eq(&self, node: NodeId, key: &str, value: &str) -> Option<NodeId>;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    fn data(&self, node: NodeId, key: &str) -> Option<String>;

    fn set_id(&mut self, node: NodeId, id: &str);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn set_display(&mut self, node: NodeId, display: Display);

    /// Current viewport width in px.
    fn viewport_width(&self) -> u32;

    /// Location fragment as the host reports it, `#` included.
    fn location_hash(&self) -> String;

    fn set_location_hash(&mut self, fragment: &str);
}

impl Dom for Document {
    fn query_data(&self, key: &str) -> Vec<NodeId> {
        Document::query_data(self, key)
    }

    fn query_data_eq(&self, key: &str, value: &str) -> Vec<NodeId> {
        Document::query_data_eq(self, key, value)
    }

    fn closest_data_eq(&self, node: NodeId, key: &str, value: &str) -> Option<NodeId> {
        Document::closest_data_eq(self, node, key, value)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        Document::element_by_id(self, id)
    }

    fn data(&self, node: NodeId, key: &str) -> Option<String> {
        Document::data(self, node, key).map(str::to_string)
    }

    fn set_id(&mut self, node: NodeId, id: &str) {
        Document::set_id(self, node, id);
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        Document::add_class(self, node, class);
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        Document::remove_class(self, node, class);
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.set_attr(node, name, value);
    }

    fn set_display(&mut self, node: NodeId, display: Display) {
        Document::set_display(self, node, display);
    }

    fn viewport_width(&self) -> u32 {
        self.window().width
    }

    fn location_hash(&self) -> String {
        self.hash().to_string()
    }

    fn set_location_hash(&mut self, fragment: &str) {
        self.set_hash(fragment);
    }
}
