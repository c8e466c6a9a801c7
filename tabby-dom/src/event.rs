use crate::document::NodeId;

/// Host events delivered to widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click, targeted at the deepest element under the pointer
    Click { target: NodeId },
    /// Viewport resized
    Resize { width: u32, height: u32 },
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Self::Resize { width, height }
    }

    /// Element the event is aimed at, if any.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::Click { target } => Some(*target),
            Self::Resize { .. } => None,
        }
    }
}
