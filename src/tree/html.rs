use crate::tree::{ChildNode, DocumentTree};
use scraper::{ElementRef, Html, Node};

/// A static HTML document parsed with `scraper`
pub struct HtmlTree {
    doc: Html,
}

impl HtmlTree {
    /// Parses a complete page (saved listing page, WebDriver page source)
    pub fn parse_document(html: &str) -> Self {
        let doc = Html::parse_document(html);
        if !doc.errors.is_empty() {
            ::log::debug!("HTML parser reported {} recoverable errors", doc.errors.len());
        }
        Self { doc }
    }

    /// Parses a snippet of markup, such as a handful of tiles
    pub fn parse_fragment(html: &str) -> Self {
        Self {
            doc: Html::parse_fragment(html),
        }
    }

    /// The underlying parsed document
    pub fn document(&self) -> &Html {
        &self.doc
    }
}

impl DocumentTree for HtmlTree {
    type Node<'a> = ElementRef<'a>;

    fn nodes_by_marker<'a>(&'a self, marker: &str) -> Vec<ElementRef<'a>> {
        self.doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().classes().any(|class| class == marker))
            .collect()
    }

    fn child_nodes<'a>(&'a self, node: ElementRef<'a>) -> Vec<ChildNode<ElementRef<'a>>> {
        node.children()
            .map(|child| match child.value() {
                Node::Element(_) => ElementRef::wrap(child).map_or(ChildNode::Other, ChildNode::Element),
                Node::Text(_) => ChildNode::Text,
                Node::Comment(_) => ChildNode::Comment,
                _ => ChildNode::Other,
            })
            .collect()
    }

    fn attribute<'a>(&'a self, node: ElementRef<'a>, name: &str) -> Option<&'a str> {
        node.value().attr(name)
    }

    fn tag_name<'a>(&'a self, node: ElementRef<'a>) -> &'a str {
        node.value().name()
    }
}
