mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Count the elements of a detached tree, root included.
pub fn count_elements(root: &Element) -> usize {
    match &root.content {
        Content::Children(children) => 1 + children.iter().map(count_elements).sum::<usize>(),
        _ => 1,
    }
}
