//! Exclusive reference toggling.
//!
//! The home page renders every reference as a hidden `div.reference#ref-n`.
//! Activating a toggle reveals exactly one block and hides the rest. In the
//! generated site the stylesheet does this with `:target`; [`ReferencePanel`]
//! is the same state machine against a [`Document`], used by hosts that drive
//! the page themselves.

use tracing::debug;

use super::markup::reference_id;
use crate::dom::{Document, Node, Selector};

/// Tracks which reference block is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencePanel {
    numbers: Vec<u32>,
    active: Option<u32>,
}

impl ReferencePanel {
    pub fn new(numbers: Vec<u32>) -> Self {
        Self {
            numbers,
            active: None,
        }
    }

    /// The currently visible reference, if any.
    pub fn active(&self) -> Option<u32> {
        self.active
    }

    /// Show reference `number` and hide every other block, then scroll it into
    /// view.
    ///
    /// Unknown numbers, and numbers whose block is missing from `doc`, are
    /// ignored and return `false`.
    pub fn activate<D: Document>(&mut self, doc: &mut D, number: u32) -> bool {
        if !self.numbers.contains(&number) {
            debug!("Ignoring toggle for unknown reference {}", number);
            return false;
        }
        let target = Selector::id(reference_id(number));
        if doc.query(&target).is_none() {
            debug!("Reference block {} not in document", target);
            return false;
        }

        for &other in &self.numbers {
            if let Some(block) = doc.query(&Selector::id(reference_id(other))) {
                if other == number {
                    block.remove_attribute("hidden");
                } else {
                    block.set_attribute("hidden", "");
                }
            }
        }

        doc.scroll_into_view(&target);
        self.active = Some(number);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, Page};

    fn page_with_references(numbers: &[u32]) -> Page {
        let mut references = Element::new("div").with_class("references");
        for n in numbers {
            references = references.with_child(
                Element::new("div")
                    .with_class("reference")
                    .with_id(&reference_id(*n))
                    .with_attribute("hidden", ""),
            );
        }
        Page::new().with_element(references)
    }

    fn is_hidden(page: &Page, number: u32) -> bool {
        page.find(&Selector::id(reference_id(number)))
            .and_then(|block| block.attribute("hidden"))
            .is_some()
    }

    #[test]
    fn test_activating_second_hides_first() {
        let mut page = page_with_references(&[1, 2, 3]);
        let mut panel = ReferencePanel::new(vec![1, 2, 3]);

        assert!(panel.activate(&mut page, 1));
        assert!(!is_hidden(&page, 1));
        assert!(is_hidden(&page, 2));

        assert!(panel.activate(&mut page, 2));
        assert!(is_hidden(&page, 1));
        assert!(!is_hidden(&page, 2));
        assert!(is_hidden(&page, 3));
        assert_eq!(panel.active(), Some(2));
        assert_eq!(page.scrolled_to(), Some(&Selector::id("ref-2")));
    }

    #[test]
    fn test_unknown_reference_is_ignored() {
        let mut page = page_with_references(&[1]);
        let mut panel = ReferencePanel::new(vec![1]);
        panel.activate(&mut page, 1);

        assert!(!panel.activate(&mut page, 9));
        assert_eq!(panel.active(), Some(1));
        assert!(!is_hidden(&page, 1));
    }

    #[test]
    fn test_missing_block_is_ignored() {
        let mut page = page_with_references(&[1]);
        let mut panel = ReferencePanel::new(vec![1, 2]);

        assert!(!panel.activate(&mut page, 2));
        assert!(is_hidden(&page, 1));
        assert_eq!(page.scrolled_to(), None);
    }
}
