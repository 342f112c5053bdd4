//! The components module contains the shared components of the site chrome:
//! author attribution and the decorative frame placed around embedded content.

pub mod author_list;
pub use author_list::{AuthorBadge, AuthorList};

pub mod frame;
pub use frame::{Frame, FrameClasses, FrameOptions};

pub mod provider;
pub use provider::{RegistryProvider, use_author_registry};
