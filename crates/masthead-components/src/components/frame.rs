//! Decorative frame for screenshots, embeds and other inset content.

use dioxus::prelude::*;
use masthead_common::{ClassSet, class_names};

const OUTER_BASE: &str = "my-4";
const BORDER_SHELL: &str = "p-2 pb-1 bg-gradient-to-tr from-blue-300/50 via-green-200/50 to-yellow-300/50 inline-block rounded";
const INNER_BASE: &str = "inline-block rounded overflow-hidden bg-primary/5 max-w-2xl [&>*]:mt-0";
const FULL_WIDTH: &str = "max-w-full";
const TRANSPARENT: &str = "bg-transparent";

/// Styling switches for [`Frame`]. All default to off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOptions {
    /// Wrap the content in a padded gradient shell.
    pub border: bool,
    /// Let the content span the available width instead of capping it.
    pub full_width: bool,
    /// Drop the tinted background behind the content.
    pub transparent: bool,
}

/// Classes for the two containers a frame renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameClasses {
    pub outer: ClassSet,
    pub inner: ClassSet,
}

impl FrameOptions {
    /// Compose the container classes. `extra` is appended to the outer container.
    pub fn classes(&self, extra: Option<&str>) -> FrameClasses {
        FrameClasses {
            outer: class_names([Some(OUTER_BASE), self.border.then_some(BORDER_SHELL), extra]),
            inner: class_names([
                Some(INNER_BASE),
                self.full_width.then_some(FULL_WIDTH),
                self.transparent.then_some(TRANSPARENT),
            ]),
        }
    }
}

/// Two nested containers around `children`: an outer margin (and optional
/// shell) and an inner clipped box.
#[component]
pub fn Frame(
    children: Element,
    #[props(default)] border: bool,
    #[props(default)] full_width: bool,
    #[props(default)] transparent: bool,
    // extra classes for the outer container
    #[props(default)] class: String,
) -> Element {
    let classes = FrameOptions {
        border,
        full_width,
        transparent,
    }
    .classes(Some(class.as_str()));

    rsx! {
        div { class: "{classes.outer}",
            div { class: "{classes.inner}", {children} }
        }
    }
}
