use std::collections::HashMap;

use super::Content;
use crate::types::Display;

/// Builder for a detached element tree.
///
/// Elements are plain values until handed to [`crate::Document::new`], which
/// flattens them into an arena with stable handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,

    pub content: Content,

    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: HashMap<String, String>,

    pub display: Display,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set a `data-*` attribute. Pass the key without the `data-` prefix.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Text is replaced, same as assigning innerHTML
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
