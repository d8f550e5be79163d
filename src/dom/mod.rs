//! Document capability interface.
//!
//! Renderers never touch markup directly. They see the page through three
//! small traits:
//!
//! - [`Mount`] - the element a renderer injects into (`set_content`,
//!   `append_child`, `detach_child`)
//! - [`Node`] - a [`Mount`] with a tag name and attributes
//! - [`Document`] - selector lookups and scrolling
//!
//! [`Page`] is the in-memory implementation used by the site builder and the
//! tests; any other host only has to implement these traits.

pub mod page;

pub use page::{Element, Page};

use std::fmt;

/// A single-element selector: `#id` or `.class`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Whether `node` matches this selector.
    pub fn matches<N: Node + ?Sized>(&self, node: &N) -> bool {
        match self {
            Self::Id(id) => node.attribute("id") == Some(id.as_str()),
            Self::Class(class) => node
                .attribute("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class)),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// An injection target for generated markup.
pub trait Mount {
    /// Replace all content with `html`. An empty string clears the mount.
    fn set_content(&mut self, html: &str);

    /// Append a generated fragment after the existing content.
    fn append_child(&mut self, child: Element);

    /// Remove and return the first descendant matching `selector`.
    fn detach_child(&mut self, selector: &Selector) -> Option<Element>;
}

/// A mount that also exposes its tag and attributes.
pub trait Node: Mount {
    /// Lower-case tag name (`a`, `div`, ...).
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);
}

/// The page a renderer runs against.
pub trait Document {
    type Node: Node;

    /// First element matching `selector`, in document order.
    fn query(&mut self, selector: &Selector) -> Option<&mut Self::Node>;

    /// First element whose `attribute` contains `needle`.
    ///
    /// Like a CSS `[attr*="needle"]` selector, an empty needle matches nothing.
    fn query_attribute_containing(&mut self, attribute: &str, needle: &str) -> Option<&mut Self::Node>;

    /// Scroll the element matching `selector` into view. Returns `false` when
    /// no element matches.
    fn scroll_into_view(&mut self, selector: &Selector) -> bool;
}
