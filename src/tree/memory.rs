use crate::tree::{ChildNode, DocumentTree};

/// Handle to a node of a [`MemoryTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct MemoryNode {
    kind: NodeKind,
    children: Vec<NodeId>,
}

/// A synthetic document tree assembled in code.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Nodes added
/// without a parent become top-level roots; document order is a pre-order
/// walk over the roots in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    nodes: Vec<MemoryNode>,
    roots: Vec<NodeId>,
}

impl MemoryTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` (or as a root) and return its handle
    pub fn element(&mut self, parent: Option<NodeId>, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let attributes = attributes
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        self.push(
            parent,
            NodeKind::Element {
                tag: tag.to_string(),
                attributes,
            },
        )
    }

    /// Append a text node under `parent`
    pub fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(Some(parent), NodeKind::Text(text.to_string()))
    }

    /// Append a comment node under `parent`
    pub fn comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(Some(parent), NodeKind::Comment(text.to_string()))
    }

    /// Number of nodes of any kind
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Content of a text or comment node
    pub fn node_text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) | NodeKind::Comment(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MemoryNode {
            kind,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn has_class(&self, id: NodeId, marker: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|class| class == marker))
    }
}

impl DocumentTree for MemoryTree {
    type Node<'a> = NodeId;

    fn nodes_by_marker<'a>(&'a self, marker: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if self.has_class(id, marker) {
                found.push(id);
            }
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }

        found
    }

    fn child_nodes<'a>(&'a self, node: NodeId) -> Vec<ChildNode<NodeId>> {
        self.nodes[node.0]
            .children
            .iter()
            .map(|&child| match self.nodes[child.0].kind {
                NodeKind::Element { .. } => ChildNode::Element(child),
                NodeKind::Text(_) => ChildNode::Text,
                NodeKind::Comment(_) => ChildNode::Comment,
            })
            .collect()
    }

    fn attribute<'a>(&'a self, node: NodeId, name: &str) -> Option<&'a str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(attr, _)| attr == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    fn tag_name<'a>(&'a self, node: NodeId) -> &'a str {
        match &self.nodes[node.0].kind {
            NodeKind::Element { tag, .. } => tag,
            NodeKind::Text(_) => "#text",
            NodeKind::Comment(_) => "#comment",
        }
    }
}
