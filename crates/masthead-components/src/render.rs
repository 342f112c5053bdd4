//! Server-side rendering of the components to HTML strings, for static pages
//! and previews.

use dioxus::prelude::*;
use masthead_common::AuthorRegistry;

use crate::components::{AuthorBadge, AuthorList, Frame, FrameOptions, RegistryProvider};

/// Render an [`AuthorList`] for `authors`. Empty when none of them are known.
pub fn render_author_list(registry: &AuthorRegistry, authors: &[String]) -> String {
    let registry = registry.clone();
    let authors = authors.to_vec();
    dioxus_ssr::render_element(rsx! {
        RegistryProvider { registry,
            AuthorList { authors }
        }
    })
}

/// Render a single [`AuthorBadge`]. Empty when `author` matches no key or first name.
pub fn render_author_badge(registry: &AuthorRegistry, author: &str, hide_last_name: bool) -> String {
    let registry = registry.clone();
    let author = author.to_string();
    dioxus_ssr::render_element(rsx! {
        RegistryProvider { registry,
            AuthorBadge { author, hide_last_name }
        }
    })
}

/// Render a [`Frame`] around `children`.
pub fn render_frame(options: FrameOptions, class: &str, children: Element) -> String {
    let class = class.to_string();
    dioxus_ssr::render_element(rsx! {
        Frame {
            border: options.border,
            full_width: options.full_width,
            transparent: options.transparent,
            class,
            {children}
        }
    })
}

/// Render a [`Frame`] around a run of text.
pub fn render_frame_text(options: FrameOptions, class: &str, text: &str) -> String {
    let text = text.to_string();
    render_frame(options, class, rsx! { "{text}" })
}
