//! Home page: profile bio, references and social links.
//!
//! The home mount (`#revealableContent`) already holds the page's social icon
//! block. It is detached before the loading placeholder goes in and appended
//! again after the bio whatever the outcome, so a failed profile load never
//! takes the contact links with it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::markup::{cited_references, reference_id, translate_markup};
use super::{RenderOutcome, Renderer, empty_placeholder, error_placeholder, loading_placeholder};
use crate::constants::{PROFILE_RESOURCE, REVEALABLE_CONTENT_ID, SOCIAL_ICONS_CLASS, SOCIAL_LINKS};
use crate::content::ContentSource;
use crate::core::FolioError;
use crate::dom::{Document, Element, Mount, Node, Selector};
use crate::models::Profile;

const NOUN: &str = "profile";

impl<S: ContentSource> Renderer<'_, S> {
    /// Render the profile into `#revealableContent` and rewrite the social
    /// links from `profile.social`.
    pub async fn render_home<D: Document>(&self, doc: &mut D) -> RenderOutcome {
        let selector = Selector::id(REVEALABLE_CONTENT_ID);
        let Some(mount) = doc.query(&selector) else {
            warn!("{} mount '{}' not found, skipping", NOUN, selector);
            return RenderOutcome::MissingMount;
        };

        let icons = mount.detach_child(&Selector::class(SOCIAL_ICONS_CLASS));
        mount.set_content(&loading_placeholder(NOUN));

        let (outcome, profile) = match parse_profile(self.loader.fetch(PROFILE_RESOURCE).await) {
            Ok(Some(profile)) if profile.bio.is_empty() => {
                mount.set_content(&empty_placeholder(NOUN));
                (RenderOutcome::Empty, Some(profile))
            }
            Ok(Some(profile)) => {
                mount.set_content("");
                for fragment in profile_fragments(&profile) {
                    mount.append_child(fragment);
                }
                debug!("Rendered {} bio paragraphs", profile.bio.len());
                (RenderOutcome::Rendered(profile.bio.len()), Some(profile))
            }
            Ok(None) => {
                mount.set_content(&empty_placeholder(NOUN));
                (RenderOutcome::Empty, None)
            }
            Err(e) => {
                error!("Error rendering {}: {}", NOUN, e);
                mount.set_content(&error_placeholder(NOUN));
                (RenderOutcome::Failed, None)
            }
        };

        if let Some(icons) = icons {
            mount.append_child(icons);
        }

        if let Some(profile) = profile {
            let updated = update_social_links(doc, &profile.social);
            debug!("Updated {} social links", updated);
        }

        outcome
    }
}

/// `Ok(None)` for an unavailable or `null` document.
fn parse_profile(document: Option<Arc<Value>>) -> Result<Option<Profile>, FolioError> {
    match document.as_deref() {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Profile::deserialize(value).map(Some).map_err(|e| {
            FolioError::MalformedContent {
                name: PROFILE_RESOURCE.to_string(),
                reason: e.to_string(),
            }
        }),
    }
}

/// Bio paragraphs followed by the (hidden) reference blocks.
fn profile_fragments(profile: &Profile) -> Vec<Element> {
    check_citations(profile);

    let mut fragments = Vec::with_capacity(profile.bio.len() * 2 + 1);
    for paragraph in &profile.bio {
        fragments.push(
            Element::new("p")
                .with_class("description")
                .with_html(translate_markup(paragraph).into_string()),
        );
        fragments.push(Element::new("br"));
    }

    if !profile.references.is_empty() {
        let mut references = Element::new("div").with_class("references");
        for reference in &profile.references {
            references = references.with_child(
                Element::new("div")
                    .with_class("reference")
                    .with_id(&reference_id(reference.number))
                    .with_attribute("hidden", "")
                    .with_html(format!(
                        "<span class=\"reference-number\">[{}]</span> {}",
                        reference.number,
                        translate_markup(&reference.description)
                    )),
            );
        }
        fragments.push(references);
    }

    fragments
}

fn check_citations(profile: &Profile) {
    let defined = profile.reference_numbers();
    let mut cited = Vec::new();
    for paragraph in &profile.bio {
        for number in cited_references(paragraph) {
            if !defined.contains(&number) {
                warn!("Bio cites reference [{}] which is not defined", number);
            }
            cited.push(number);
        }
    }
    for number in defined.iter().filter(|n| !cited.contains(n)) {
        debug!("Reference [{}] is never cited", number);
    }
}

/// Rewrite the `href` of known social links from `social`.
///
/// Each link is found by its element id, or failing that by the first element
/// whose `href` contains the last `/`-separated segment of the new value.
/// Only `<a>` elements are changed. Returns how many links were rewritten.
pub fn update_social_links<D: Document>(doc: &mut D, social: &BTreeMap<String, String>) -> usize {
    let mut updated = 0;

    for &(id, key, scheme) in SOCIAL_LINKS {
        let Some(value) = social.get(key).filter(|v| !v.is_empty()) else {
            continue;
        };
        let href = format!("{}{}", scheme.unwrap_or_default(), value);

        if let Some(element) = doc.query(&Selector::id(id)) {
            updated += usize::from(set_link_href(element, &href));
            continue;
        }

        let needle = href.rsplit('/').next().unwrap_or_default();
        if let Some(element) = doc.query_attribute_containing("href", needle) {
            updated += usize::from(set_link_href(element, &href));
        } else {
            debug!("No element found for social link {}", id);
        }
    }

    updated
}

fn set_link_href<N: Node>(element: &mut N, href: &str) -> bool {
    if element.tag_name() != "a" {
        return false;
    }
    element.set_attribute("href", href);
    true
}
