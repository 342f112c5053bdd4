//! The author registry: an immutable lookup table of author metadata.
//!
//! The registry is built once (from the bundled data file, a file on disk, or
//! records assembled in code) and then shared by handle. Nothing mutates it
//! after construction, so clones can be handed to any number of renderers.

use serde::Deserialize;
use serde::de::{self, MapAccess, Visitor};
use smol_str::SmolStr;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::{MastheadError, ParseError};

/// Author data compiled into the binary.
pub const BUNDLED_AUTHORS: &str = include_str!("../data/authors.json");

const TWITTER_BASE: &str = "https://twitter.com/";

static BUNDLED: LazyLock<AuthorRegistry> = LazyLock::new(|| {
    AuthorRegistry::from_json("authors.json", BUNDLED_AUTHORS)
        .expect("bundled author data must be well-formed")
});

/// A single author, as stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub key: SmolStr,
    pub name: SmolStr,
    pub first_name: SmolStr,
    /// URL or path of the avatar.
    pub image: String,
    pub twitter: Option<SmolStr>,
}

impl AuthorRecord {
    /// The social handle, if one is set. An empty handle counts as absent.
    pub fn twitter_handle(&self) -> Option<&str> {
        self.twitter.as_deref().filter(|handle| !handle.is_empty())
    }

    /// Link to the author's profile, if they have a handle.
    pub fn profile_url(&self) -> Option<String> {
        self.twitter_handle()
            .map(|handle| format!("{TWITTER_BASE}{handle}"))
    }

    /// Name shown on a badge.
    pub fn display_name(&self, hide_last_name: bool) -> &str {
        if hide_last_name {
            &self.first_name
        } else {
            &self.name
        }
    }

    /// Accessibility description for the avatar.
    pub fn image_alt(&self) -> String {
        format!("Picture {}", self.name)
    }
}

/// Read-only mapping from author key to [`AuthorRecord`].
///
/// Cloning is cheap: all clones share the same records.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Debug, PartialEq)]
struct RegistryInner {
    /// Records in data-file order. The first-name fallback walks this order.
    records: Vec<AuthorRecord>,
    index: HashMap<SmolStr, usize>,
}

impl AuthorRegistry {
    /// Build a registry from records, keeping their order.
    pub fn new(records: impl IntoIterator<Item = AuthorRecord>) -> Result<Self, MastheadError> {
        let records: Vec<AuthorRecord> = records.into_iter().collect();
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.key.clone(), i).is_some() {
                return Err(MastheadError::DuplicateAuthor(record.key.clone()));
            }
        }
        Ok(Self {
            inner: Arc::new(RegistryInner { records, index }),
        })
    }

    /// Parse the data-file format: a JSON object mapping each key to
    /// `{ name, firstName, image, twitter? }`.
    ///
    /// `name` is only used to label diagnostics.
    pub fn from_json(name: impl AsRef<str>, src: &str) -> Result<Self, MastheadError> {
        let raw: RawAuthors = serde_json::from_str(src)
            .map_err(|err| ParseError::from_json(err, name, src))?;
        Self::new(raw.0.into_iter().map(|(key, raw)| raw.into_record(key)))
    }

    /// Read and parse a data file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MastheadError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| MastheadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(path.display().to_string(), &src)?;
        tracing::debug!(path = %path.display(), authors = registry.len(), "loaded author registry");
        Ok(registry)
    }

    /// The registry compiled into the binary from `data/authors.json`.
    ///
    /// Parsed on first use and shared afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the bundled data is malformed or holds duplicate keys.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    /// Direct key lookup.
    pub fn resolve_exact(&self, id: &str) -> Option<&AuthorRecord> {
        self.inner
            .index
            .get(id)
            .map(|&i| &self.inner.records[i])
    }

    /// Key lookup, falling back to the first record whose first name is `id`.
    pub fn resolve_with_fallback(&self, id: &str) -> Option<&AuthorRecord> {
        self.resolve_exact(id).or_else(|| {
            self.inner
                .records
                .iter()
                .find(|record| record.first_name.as_str() == id)
        })
    }

    pub fn get(&self, id: &str) -> Option<&AuthorRecord> {
        self.resolve_exact(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.index.contains_key(id)
    }

    /// The identifiers from `ids` that are registry keys, in their original
    /// order. Duplicates are kept; `None` behaves like an empty list.
    ///
    /// Only exact keys pass. The first-name fallback is deliberately not applied.
    pub fn filter_known<'a, S: AsRef<str>>(&self, ids: Option<&'a [S]>) -> Vec<&'a str> {
        ids.unwrap_or_default()
            .iter()
            .map(|id| -> &'a str { id.as_ref() })
            .filter(|id| self.contains(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    /// Records in data-file order.
    pub fn iter(&self) -> impl Iterator<Item = &AuthorRecord> {
        self.inner.records.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|record| record.key.as_str())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuthor {
    name: SmolStr,
    first_name: SmolStr,
    image: String,
    #[serde(default)]
    twitter: Option<SmolStr>,
}

impl RawAuthor {
    fn into_record(self, key: SmolStr) -> AuthorRecord {
        AuthorRecord {
            key,
            name: self.name,
            first_name: self.first_name,
            image: self.image,
            twitter: self.twitter,
        }
    }
}

/// Top-level data-file object. Keeps entry order and rejects repeated keys,
/// which a plain map would silently collapse.
struct RawAuthors(Vec<(SmolStr, RawAuthor)>);

impl<'de> Deserialize<'de> for RawAuthors {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AuthorsVisitor;

        impl<'de> Visitor<'de> for AuthorsVisitor {
            type Value = RawAuthors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of author keys to author records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(SmolStr, RawAuthor)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(key) = map.next_key::<SmolStr>()? {
                    if entries.iter().any(|(existing, _)| *existing == key) {
                        return Err(de::Error::custom(format!(
                            "duplicate author key `{key}`"
                        )));
                    }
                    let author = map.next_value::<RawAuthor>()?;
                    entries.push((key, author));
                }
                Ok(RawAuthors(entries))
            }
        }

        deserializer.deserialize_map(AuthorsVisitor)
    }
}
