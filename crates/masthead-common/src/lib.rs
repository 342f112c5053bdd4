//! Shared data model and helpers for masthead: the author registry, class-name
//! composition, error types, configuration and telemetry.

pub mod author;
pub mod classes;
pub mod config;
pub mod error;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use crate::author::{AuthorRecord, AuthorRegistry};
pub use crate::classes::{ClassSet, class_names};
pub use crate::config::{AuthorSource, Config};
pub use crate::error::{MastheadError, ParseError};

pub use smol_str;
