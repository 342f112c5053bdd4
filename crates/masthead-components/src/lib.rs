//! Dioxus components for author attribution and content framing.
//!
//! Author components read their [`AuthorRegistry`](masthead_common::AuthorRegistry)
//! from context, so wrap them in a [`RegistryProvider`]:
//!
//! ```ignore
//! rsx! {
//!     RegistryProvider { registry: AuthorRegistry::bundled(),
//!         AuthorList { authors: vec!["ada".into(), "grace".into()] }
//!     }
//! }
//! ```

pub mod components;
#[cfg(feature = "ssr")]
pub mod render;

pub use components::{
    AuthorBadge, AuthorList, Frame, FrameClasses, FrameOptions, RegistryProvider,
    use_author_registry,
};
