//! In-memory page model.
//!
//! A [`Page`] is a tree of [`Element`]s whose leaves may be raw HTML. It is
//! deliberately small: enough structure for selector lookups, attribute
//! edits and serialisation, and nothing else. Raw HTML children are emitted
//! verbatim; attribute values are escaped on output.

use super::{Document, Mount, Node, Selector};
use crate::render::escape::escape_attribute;

/// Elements serialised without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A child of an element: another element or a run of raw HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Child {
    Element(Element),
    Html(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Child>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attribute("id", id)
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.with_attribute("class", class)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        let html = html.into();
        if !html.is_empty() {
            self.children.push(Child::Html(html));
        }
        self
    }

    /// Direct element children, skipping raw HTML runs.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Child::Element(element) => Some(element),
            Child::Html(_) => None,
        })
    }

    /// First descendant matching `selector`, in document order.
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        find_in(&self.children, &|e: &Element| selector.matches(e))
    }

    /// Serialised children.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        write_children(&self.children, &mut out);
        out
    }

    /// Serialised element including its own tag.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

impl Mount for Element {
    fn set_content(&mut self, html: &str) {
        self.children.clear();
        if !html.is_empty() {
            self.children.push(Child::Html(html.to_string()));
        }
    }

    fn append_child(&mut self, child: Element) {
        self.children.push(Child::Element(child));
    }

    fn detach_child(&mut self, selector: &Selector) -> Option<Element> {
        detach_in(&mut self.children, selector)
    }
}

impl Node for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| n != name);
    }
}

/// A page body plus the little state a browser would track for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    body: Vec<Child>,
    scrolled_to: Option<Selector>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.body.push(Child::Element(element));
        self
    }

    /// First element matching `selector`, read-only.
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        find_in(&self.body, &|e: &Element| selector.matches(e))
    }

    /// Selector of the element most recently scrolled into view.
    pub fn scrolled_to(&self) -> Option<&Selector> {
        self.scrolled_to.as_ref()
    }

    /// Serialised body.
    pub fn body_html(&self) -> String {
        let mut out = String::new();
        write_children(&self.body, &mut out);
        out
    }
}

impl Document for Page {
    type Node = Element;

    fn query(&mut self, selector: &Selector) -> Option<&mut Element> {
        find_in_mut(&mut self.body, &|e: &Element| selector.matches(e))
    }

    fn query_attribute_containing(&mut self, attribute: &str, needle: &str) -> Option<&mut Element> {
        if needle.is_empty() {
            return None;
        }
        find_in_mut(&mut self.body, &|e: &Element| {
            e.attribute(attribute).is_some_and(|value| value.contains(needle))
        })
    }

    fn scroll_into_view(&mut self, selector: &Selector) -> bool {
        if self.find(selector).is_none() {
            return false;
        }
        self.scrolled_to = Some(selector.clone());
        true
    }
}

fn find_in<'a>(children: &'a [Child], pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    for child in children {
        if let Child::Element(element) = child {
            if pred(element) {
                return Some(element);
            }
            if let Some(found) = find_in(&element.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn find_in_mut<'a>(
    children: &'a mut [Child],
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    for child in children.iter_mut() {
        if let Child::Element(element) = child {
            if pred(element) {
                return Some(element);
            }
            if let Some(found) = find_in_mut(&mut element.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

fn detach_in(children: &mut Vec<Child>, selector: &Selector) -> Option<Element> {
    for i in 0..children.len() {
        let matched = matches!(&children[i], Child::Element(e) if selector.matches(e));
        if matched {
            return match children.remove(i) {
                Child::Element(element) => Some(element),
                Child::Html(_) => None,
            };
        }
        if let Child::Element(element) = &mut children[i]
            && let Some(found) = detach_in(&mut element.children, selector)
        {
            return Some(found);
        }
    }
    None
}

fn write_children(children: &[Child], out: &mut String) {
    for child in children {
        match child {
            Child::Element(element) => write_element(element, out),
            Child::Html(html) => out.push_str(html),
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        // Boolean attributes such as `hidden` carry no value.
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    write_children(&element.children, out);
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> Page {
        Page::new().with_element(
            Element::new("main").with_child(
                Element::new("div")
                    .with_id("revealableContent")
                    .with_html("<p>placeholder</p>")
                    .with_child(
                        Element::new("div").with_class("social-icons").with_child(
                            Element::new("a")
                                .with_id("githubLink")
                                .with_attribute("href", "https://github.com/"),
                        ),
                    ),
            ),
        )
    }

    #[test]
    fn test_query_by_id_and_class() {
        let mut page = sample_page();
        assert!(page.query(&Selector::id("revealableContent")).is_some());
        assert!(page.query(&Selector::class("social-icons")).is_some());
        assert!(page.query(&Selector::id("articlesGrid")).is_none());
    }

    #[test]
    fn test_set_content_and_append_child() {
        let mut page = sample_page();
        let mount = page.query(&Selector::id("revealableContent")).unwrap();
        mount.set_content("");
        mount.append_child(Element::new("p").with_html("one"));
        mount.append_child(Element::new("p").with_html("two"));

        assert_eq!(
            page.find(&Selector::id("revealableContent")).unwrap().inner_html(),
            "<p>one</p><p>two</p>"
        );
    }

    #[test]
    fn test_detach_child_removes_descendant() {
        let mut page = sample_page();
        let mount = page.query(&Selector::id("revealableContent")).unwrap();
        let icons = mount.detach_child(&Selector::class("social-icons")).unwrap();

        assert!(icons.find(&Selector::id("githubLink")).is_some());
        assert!(page.find(&Selector::class("social-icons")).is_none());
    }

    #[test]
    fn test_query_attribute_containing() {
        let mut page = sample_page();
        let link = page.query_attribute_containing("href", "github.com").unwrap();
        assert_eq!(link.attribute("id"), Some("githubLink"));
        assert!(page.query_attribute_containing("href", "").is_none());
    }

    #[test]
    fn test_serialisation_escapes_attributes_and_handles_void_elements() {
        let element = Element::new("div")
            .with_attribute("title", "a \"quoted\" <value>")
            .with_attribute("hidden", "")
            .with_child(Element::new("br"));
        assert_eq!(
            element.outer_html(),
            "<div title=\"a &quot;quoted&quot; &lt;value&gt;\" hidden><br></div>"
        );
    }

    #[test]
    fn test_scroll_into_view_records_target() {
        let mut page = sample_page();
        assert!(page.scroll_into_view(&Selector::id("githubLink")));
        assert_eq!(page.scrolled_to(), Some(&Selector::id("githubLink")));
        assert!(!page.scroll_into_view(&Selector::id("missing")));
    }
}
