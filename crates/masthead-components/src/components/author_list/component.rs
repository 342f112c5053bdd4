//! AuthorList and AuthorBadge components.

use std::collections::HashMap;

use dioxus::prelude::*;
use masthead_common::{AuthorRecord, AuthorRegistry};
use smol_str::SmolStr;

use crate::components::provider::use_author_registry;

/// Link target used when an author has no social handle.
pub const PLACEHOLDER_HREF: &str = "#";

/// Avatar width and height, in CSS pixels.
pub const AVATAR_SIZE: u32 = 40;

/// Badges switch to first names once more than this many authors are shown.
pub const FULL_NAME_LIMIT: usize = 2;

const LIST_CLASS: &str = "flex flex-wrap gap-x-10 gap-y-6 justify-center py-7 max-w-xl mx-auto";
const BADGE_CLASS: &str = "group shrink-0";
const BADGE_ROW_CLASS: &str = "flex items-center gap-4";
const AVATAR_CLASS: &str = "rounded-full";
const LABEL_CLASS: &str = "text-primary/60 group-hover:text-primary whitespace-nowrap";

/// Everything a badge shows, resolved from one [`AuthorRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeView {
    pub href: String,
    pub image: String,
    pub alt: String,
    pub label: SmolStr,
}

impl BadgeView {
    pub fn new(record: &AuthorRecord, hide_last_name: bool) -> Self {
        Self {
            href: record
                .profile_url()
                .unwrap_or_else(|| PLACEHOLDER_HREF.to_string()),
            image: record.image.clone(),
            alt: record.image_alt(),
            label: record.display_name(hide_last_name).into(),
        }
    }

    /// Whether the badge links anywhere.
    pub fn has_profile(&self) -> bool {
        self.href != PLACEHOLDER_HREF
    }
}

/// Resolve a badge by key, or by first name when no key matches.
///
/// Returns `None` when neither matches; the badge then renders nothing.
pub fn badge_view(registry: &AuthorRegistry, author: &str, hide_last_name: bool) -> Option<BadgeView> {
    registry
        .resolve_with_fallback(author)
        .map(|record| BadgeView::new(record, hide_last_name))
}

/// One badge slot in an author list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// Identity of the badge among its siblings.
    pub key: String,
    pub author: String,
    pub hide_last_name: bool,
}

/// Plan the badges for a list of author identifiers.
///
/// Only exact registry keys survive, in their original order. The key of each
/// entry is its identifier; a repeated identifier gets an occurrence suffix
/// (`id#2`, `id#3`) so sibling keys stay unique.
pub fn list_entries<S: AsRef<str>>(registry: &AuthorRegistry, authors: Option<&[S]>) -> Vec<ListEntry> {
    let known = registry.filter_known(authors);
    let hide_last_name = known.len() > FULL_NAME_LIMIT;

    let mut seen: HashMap<&str, usize> = HashMap::new();
    known
        .iter()
        .map(|&author| {
            let count = seen.entry(author).or_default();
            *count += 1;
            let key = if *count == 1 {
                author.to_string()
            } else {
                format!("{author}#{count}")
            };
            ListEntry {
                key,
                author: author.to_string(),
                hide_last_name,
            }
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct AuthorListProps {
    /// Author keys, in display order. Keys missing from the registry are skipped.
    #[props(default)]
    pub authors: Vec<String>,
}

/// A centered, wrapping row of author badges.
///
/// Renders nothing when none of the authors are known. With more than two
/// authors every badge shows first names only.
#[component]
pub fn AuthorList(props: AuthorListProps) -> Element {
    let Some(registry) = use_author_registry() else {
        return rsx! {};
    };

    let entries = list_entries(&registry, Some(props.authors.as_slice()));
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: LIST_CLASS,
            for entry in entries {
                AuthorBadge {
                    key: "{entry.key}",
                    author: entry.author,
                    hide_last_name: entry.hide_last_name,
                }
            }
        }
    }
}

/// Avatar and name for one author, linking to their profile in a new tab.
///
/// `author` may be a registry key or an author's first name.
#[component]
pub fn AuthorBadge(author: String, #[props(default)] hide_last_name: bool) -> Element {
    let Some(registry) = use_author_registry() else {
        return rsx! {};
    };

    let Some(view) = badge_view(&registry, &author, hide_last_name) else {
        tracing::debug!(%author, "no author matches identifier, skipping badge");
        return rsx! {};
    };

    rsx! {
        a {
            href: "{view.href}",
            class: BADGE_CLASS,
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: BADGE_ROW_CLASS,
                img {
                    src: "{view.image}",
                    width: "{AVATAR_SIZE}",
                    height: "{AVATAR_SIZE}",
                    class: AVATAR_CLASS,
                    alt: "{view.alt}",
                }
                span { class: LABEL_CLASS, "{view.label}" }
            }
        }
    }
}
