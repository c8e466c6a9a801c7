pub mod document;
pub mod element;
pub mod event;
pub mod types;
pub mod window;

pub use document::{Document, Node, NodeId};
pub use element::Element;
pub use event::Event;
pub use types::*;
pub use window::Window;
