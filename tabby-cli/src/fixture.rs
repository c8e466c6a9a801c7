//! JSON fixtures describing a page and the events played against it.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tabby_dom::{Display, Element, Window};

use crate::error::CliError;

/// A page: window state plus the element tree.
#[derive(Debug, Deserialize)]
pub(crate) struct PageFixture {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub hash: String,
    pub root: NodeFixture,
}

fn default_width() -> u32 {
    Window::default().width
}

fn default_height() -> u32 {
    Window::default().height
}

impl PageFixture {
    pub fn window(&self) -> Window {
        Window::new(self.width, self.height).with_hash(&self.hash)
    }
}

/// One element of the page tree.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NodeFixture {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub class: Vec<String>,
    /// `data-*` attributes without the prefix.
    pub data: HashMap<String, String>,
    pub attrs: HashMap<String, String>,
    pub display: Option<String>,
    pub text: Option<String>,
    pub children: Vec<NodeFixture>,
}

impl From<NodeFixture> for Element {
    fn from(node: NodeFixture) -> Self {
        let mut element = match node.text {
            Some(text) => Element::text(text),
            None => Element::div(),
        };
        if let Some(tag) = node.tag {
            element.tag = tag;
        }
        if let Some(id) = node.id {
            element = element.id(id);
        }
        for class in node.class {
            element = element.class(class);
        }
        element.attrs.extend(node.attrs);
        element.data.extend(node.data);
        element.display = match node.display.as_deref() {
            Some("block") => Display::Block,
            Some("none") => Display::None,
            _ => Display::Unset,
        };
        if node.children.is_empty() {
            element
        } else {
            element.children(node.children.into_iter().map(Element::from))
        }
    }
}

/// One step of an event script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ScriptedEvent {
    /// Click the element with this id.
    Click(String),
    /// Resize the window to `[width, height]`.
    Resize(u32, u32),
    /// Pause the script, in milliseconds.
    Wait(u64),
}

pub(crate) fn load<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
