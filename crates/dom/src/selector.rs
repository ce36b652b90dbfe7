//! A small CSS selector engine covering what placement targets use in
//! practice: type, `#id`, `.class`, `*`, compound steps, the descendant
//! and child combinators, and comma-separated groups.

use crate::document::{Document, NodeId};
use indicator_core::{IndicatorError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Step {
    tag:       Option<String>,
    universal: bool,
    id:        Option<String>,
    classes:   Vec<String>,
}

impl Step {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(element) = doc.element(node) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Part {
    step: Step,
    // Relation to the part on the left; `None` for the first part.
    combinator: Option<Combinator>,
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Vec<Part>>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self> {
        let groups = selector
            .split(',')
            .map(|group| parse_chain(group, selector))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// `true` if `node` matches any group of the list.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.groups.iter().any(|parts| matches_chain(doc, node, parts))
    }
}

fn matches_chain(doc: &Document, node: NodeId, parts: &[Part]) -> bool {
    let Some((last, rest)) = parts.split_last() else {
        return false;
    };
    if !last.step.matches(doc, node) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }

    let combinator = last.combinator.unwrap_or(Combinator::Descendant);
    let mut cursor = doc.parent(node);
    while let Some(ancestor) = cursor {
        if matches_chain(doc, ancestor, rest) {
            return true;
        }
        if combinator == Combinator::Child {
            return false;
        }
        cursor = doc.parent(ancestor);
    }
    false
}

fn parse_chain(group: &str, full: &str) -> Result<Vec<Part>> {
    let unsupported = || IndicatorError::UnsupportedSelector(full.to_string());
    let group = group.trim();
    if group.is_empty() {
        return Err(unsupported());
    }

    let spaced = group.replace('>', " > ");
    let mut parts = Vec::new();
    let mut pending: Option<Combinator> = None;

    for token in spaced.split_ascii_whitespace() {
        if token == ">" {
            if pending.is_some() || parts.is_empty() {
                return Err(unsupported());
            }
            pending = Some(Combinator::Child);
            continue;
        }
        let step = parse_step(token).ok_or_else(unsupported)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending.take().unwrap_or(Combinator::Descendant))
        };
        parts.push(Part { step, combinator });
    }

    if parts.is_empty() || pending.is_some() {
        return Err(unsupported());
    }
    Ok(parts)
}

fn parse_step(token: &str) -> Option<Step> {
    let mut step = Step::default();
    let mut rest = token;

    if let Some(tail) = rest.strip_prefix('*') {
        step.universal = true;
        rest = tail;
    } else if rest.starts_with(is_ident_char) {
        let (tag, tail) = split_ident(rest);
        step.tag = Some(tag.to_ascii_lowercase());
        rest = tail;
    }

    while let Some(marker) = rest.chars().next() {
        let (ident, tail) = split_ident(&rest[marker.len_utf8()..]);
        if ident.is_empty() {
            return None;
        }
        match marker {
            '#' if step.id.is_none() => step.id = Some(ident.to_string()),
            '.' => step.classes.push(ident.to_string()),
            _ => return None,
        }
        rest = tail;
    }

    let empty = step.tag.is_none() && step.id.is_none() && step.classes.is_empty();
    (!empty || step.universal).then_some(step)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii()
}

fn split_ident(src: &str) -> (&str, &str) {
    let end = src.find(|ch: char| !is_ident_char(ch)).unwrap_or(src.len());
    src.split_at(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> Result<(Document, NodeId, NodeId, NodeId)> {
        let mut doc = Document::new();
        let header = doc.append_element(doc.body(), "header")?;
        doc.set_id(header, "top")?;
        doc.add_class(header, "site")?;
        let nav = doc.append_element(header, "nav")?;
        doc.add_class(nav, "menu")?;
        let main = doc.append_element(doc.body(), "main")?;
        let inner = doc.append_element(main, "div")?;
        doc.add_class(inner, "menu")?;
        Ok((doc, header, nav, inner))
    }

    #[test]
    fn type_id_and_class() -> Result<()> {
        let (doc, header, nav, inner) = page()?;
        assert_eq!(doc.query_selector_all("header")?, vec![header]);
        assert_eq!(doc.query_selector_all("#top")?, vec![header]);
        assert_eq!(doc.query_selector_all(".menu")?, vec![nav, inner]);
        assert_eq!(doc.query_selector_all("header#top.site")?, vec![header]);
        assert_eq!(doc.query_selector_all("#missing")?, Vec::<NodeId>::new());
        Ok(())
    }

    #[test]
    fn combinators_and_groups() -> Result<()> {
        let (doc, header, nav, inner) = page()?;
        assert_eq!(doc.query_selector_all("header .menu")?, vec![nav]);
        assert_eq!(doc.query_selector_all("body > header")?, vec![header]);
        assert_eq!(doc.query_selector_all("body > .menu")?, Vec::<NodeId>::new());
        assert_eq!(doc.query_selector_all("body .menu")?, vec![nav, inner]);
        assert_eq!(doc.query_selector_all("main>div")?, vec![inner]);
        assert_eq!(doc.query_selector_all("nav, #top")?, vec![header, nav]);
        Ok(())
    }

    #[test]
    fn universal_matches_every_element() -> Result<()> {
        let (doc, ..) = page()?;
        // html, head, body, header, nav, main, div
        assert_eq!(doc.query_selector_all("*")?.len(), 7);
        Ok(())
    }

    #[test]
    fn unsupported_syntax_is_rejected() {
        for bad in ["", "  ", "a[href]", "li:first-child", "a + b", "> a", "a >", "a,,b", "#"] {
            let err = Selector::parse(bad).unwrap_err();
            assert!(
                matches!(err, IndicatorError::UnsupportedSelector(_)),
                "expected rejection of {bad:?}"
            );
        }
    }
}
