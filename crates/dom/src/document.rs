use crate::selector::Selector;
use indicator_core::{IndicatorError, Result};

/// Handle to a node inside one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An element's tag, identity and inline style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag:     String,
    pub id:      Option<String>,
    pub classes: Vec<String>,
    /// Inline style in insertion order; setting a property again replaces
    /// its value in place.
    style: Vec<(String, String)>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn set_style(&mut self, property: &str, value: &str) {
        match self.style.iter_mut().find(|(name, _)| name == property) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self.style.push((property.to_string(), value.to_string())),
        }
    }

    fn inline_style(&self) -> String {
        self.style
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Root,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent:   Option<NodeId>,
    children: Vec<NodeId>,
    kind:     NodeKind,
}

/// Arena-backed document tree with `<html>`, `<head>` and `<body>`.
///
/// Nodes are never freed; removing a node only detaches it, so a stale
/// [`NodeId`] keeps pointing at the same (now disconnected) node.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root:  NodeId,
    html:  NodeId,
    head:  NodeId,
    body:  NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Node {
                parent:   None,
                children: Vec::new(),
                kind:     NodeKind::Root,
            }],
            root: NodeId(0),
            html: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        };
        doc.html = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.attach(doc.root, doc.html, false);
        doc.attach(doc.html, doc.head, false);
        doc.attach(doc.html, doc.body, false);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn html(&self) -> NodeId {
        self.html
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // ── Construction ──────────────────────────────────────────────────────────

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Create an element and append it to `parent` in one step.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId> {
        let child = self.create_element(tag);
        self.append_child(parent, child)?;
        Ok(child)
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) -> Result<()> {
        self.element_mut(node)?.id = Some(id.to_string());
        Ok(())
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> Result<()> {
        let element = self.element_mut(node)?;
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    // ── Tree mutation ─────────────────────────────────────────────────────────

    /// Insert `child` as the last child of `parent`, moving it if attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_insert(parent, child)?;
        self.attach(parent, child, false);
        Ok(())
    }

    /// Insert `child` as the first child of `parent`, moving it if attached.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_insert(parent, child)?;
        self.attach(parent, child, true);
        Ok(())
    }

    /// Detach `node` (and its subtree) from its parent.
    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        if node == self.root {
            return Err(IndicatorError::Dom("cannot remove the document root".into()));
        }
        self.detach(node);
        Ok(())
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        self.element_mut(node)?.set_style(property, value);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)?.style(property)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Element children only, skipping text nodes.
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    /// `true` if `node` is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == self.root {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// First connected element whose `id` equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.connected_elements()
            .into_iter()
            .find(|node| self.element(*node).and_then(|e| e.id.as_deref()) == Some(id))
    }

    /// All connected elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .connected_elements()
            .into_iter()
            .filter(|node| selector.matches(self, *node))
            .collect())
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Serialise `node` and its subtree to HTML.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    fn node(&self, node: NodeId) -> Result<&Node> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| IndicatorError::Dom(format!("unknown node {}", node.0)))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element> {
        match self.nodes.get_mut(node.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(element)) => Ok(element),
            _ => Err(IndicatorError::Dom(format!("node {} is not an element", node.0))),
        }
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.element(parent).is_none() {
            return Err(IndicatorError::Dom(format!("node {} cannot have children", parent.0)));
        }
        self.node(child)?;
        if child == self.root {
            return Err(IndicatorError::Dom("cannot move the document root".into()));
        }
        // Refuse to create a cycle.
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(IndicatorError::Dom(format!(
                    "node {} is an ancestor of node {}",
                    child.0, parent.0
                )));
            }
            cursor = self.parent(current);
        }
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, first: bool) {
        self.detach(child);
        let children = &mut self.nodes[parent.0].children;
        if first {
            children.insert(0, child);
        } else {
            children.push(child);
        }
        self.nodes[child.0].parent = Some(parent);
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn connected_elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(self.root, &mut out);
        out
    }

    fn collect_elements(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(node) {
            if self.element(*child).is_some() {
                out.push(*child);
            }
            self.collect_elements(*child, out);
        }
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        match &n.kind {
            NodeKind::Root => {
                for child in &n.children {
                    self.write_html(*child, out);
                }
            }
            NodeKind::Text(text) => {
                let raw = self
                    .parent(node)
                    .and_then(|p| self.element(p))
                    .is_some_and(|p| p.tag == "style" || p.tag == "script");
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&escape(text));
                }
            }
            NodeKind::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                if let Some(id) = &element.id {
                    out.push_str(&format!(" id=\"{}\"", escape(id)));
                }
                if !element.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", escape(&element.classes.join(" "))));
                }
                if !element.style.is_empty() {
                    out.push_str(&format!(" style=\"{}\"", escape(&element.inline_style())));
                }
                out.push('>');
                for child in &n.children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{}>", element.tag));
            }
        }
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_document_has_head_and_body() {
        let doc = Document::new();
        assert_eq!(doc.outer_html(doc.root()), "<html><head></head><body></body></html>");
        assert_eq!(doc.parent(doc.body()), Some(doc.html()));
    }

    #[test]
    fn append_and_prepend_order_children() -> Result<()> {
        let mut doc = Document::new();
        let body = doc.body();
        let main = doc.append_element(body, "main")?;
        let first = doc.create_element("nav");
        doc.prepend_child(body, first)?;
        let last = doc.append_element(body, "footer")?;
        assert_eq!(doc.children(body), &[first, main, last]);
        Ok(())
    }

    #[test]
    fn moving_a_node_detaches_it_first() -> Result<()> {
        let mut doc = Document::new();
        let a = doc.append_element(doc.body(), "div")?;
        let b = doc.append_element(doc.body(), "div")?;
        let span = doc.append_element(a, "span")?;
        doc.append_child(b, span)?;
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[span]);
        Ok(())
    }

    #[test]
    fn cycles_are_rejected() -> Result<()> {
        let mut doc = Document::new();
        let outer = doc.append_element(doc.body(), "div")?;
        let inner = doc.append_element(outer, "div")?;
        assert!(doc.append_child(inner, outer).is_err());
        Ok(())
    }

    #[test]
    fn style_replaces_in_place() -> Result<()> {
        let mut doc = Document::new();
        let div = doc.append_element(doc.body(), "div")?;
        doc.set_style(div, "width", "0%")?;
        doc.set_style(div, "height", "5px")?;
        doc.set_style(div, "width", "40%")?;
        assert_eq!(doc.style(div, "width"), Some("40%"));
        assert_eq!(
            doc.outer_html(div),
            r#"<div style="width: 40%; height: 5px;"></div>"#
        );
        Ok(())
    }

    #[test]
    fn removed_nodes_are_not_found() -> Result<()> {
        let mut doc = Document::new();
        let div = doc.append_element(doc.body(), "div")?;
        doc.set_id(div, "gone")?;
        assert_eq!(doc.get_element_by_id("gone"), Some(div));
        doc.remove(div)?;
        assert!(!doc.is_connected(div));
        assert_eq!(doc.get_element_by_id("gone"), None);
        Ok(())
    }

    #[test]
    fn style_text_is_not_escaped() -> Result<()> {
        let mut doc = Document::new();
        let style = doc.append_element(doc.head(), "style")?;
        let css = doc.create_text("a > b {}");
        doc.append_child(style, css)?;
        let p = doc.append_element(doc.body(), "p")?;
        let text = doc.create_text("a > b");
        doc.append_child(p, text)?;
        assert_eq!(doc.outer_html(style), "<style>a > b {}</style>");
        assert_eq!(doc.outer_html(p), "<p>a &gt; b</p>");
        Ok(())
    }

    #[test]
    fn text_nodes_cannot_hold_children() {
        let mut doc = Document::new();
        let text = doc.create_text("x");
        let div = doc.create_element("div");
        assert!(matches!(doc.append_child(text, div), Err(IndicatorError::Dom(_))));
    }
}
