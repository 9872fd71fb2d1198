pub mod html;
pub mod memory;


pub use html::HtmlTree;
pub use memory::{MemoryTree, NodeId};

/// Classification of a child node as seen by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildNode<N> {
    /// An element node, carrying the tree's handle for it
    Element(N),
    /// A text node (including whitespace between tags)
    Text,
    /// A comment node
    Comment,
    /// Anything else (doctype, processing instruction, ...)
    Other,
}

impl<N> ChildNode<N> {
    /// Returns the element handle if this child is an element
    pub fn element(self) -> Option<N> {
        match self {
            ChildNode::Element(node) => Some(node),
            _ => None,
        }
    }
}

/// Read-only view over a populated document tree.
///
/// The extractor only needs to find marked elements, walk their children
/// and read attributes, so any tree representation (a parsed page, a
/// synthetic tree built in a test) can be plugged in.
pub trait DocumentTree {
    /// Handle to an element node, borrowed from the tree
    type Node<'a>: Copy
    where
        Self: 'a;

    /// All elements whose class list contains `marker`, in document order
    fn nodes_by_marker<'a>(&'a self, marker: &str) -> Vec<Self::Node<'a>>;

    /// All child nodes of `node`, in order, including non-element nodes
    fn child_nodes<'a>(&'a self, node: Self::Node<'a>) -> Vec<ChildNode<Self::Node<'a>>>;

    /// Value of the attribute `name` on `node`, if present
    fn attribute<'a>(&'a self, node: Self::Node<'a>, name: &str) -> Option<&'a str>;

    /// Tag name of `node`
    fn tag_name<'a>(&'a self, node: Self::Node<'a>) -> &'a str;
}
