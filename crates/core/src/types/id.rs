//! Newtype IDs for type-safe entity references.
//!
//! Melon IDs are opaque short codes taken from the catalog file (for example
//! `"cren"` or `"mora"`), so they wrap a `String` rather than a number.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a melon in the catalog.
///
/// # Example
///
/// ```rust
/// # use ubermelon_core::MelonId;
/// let id = MelonId::new("cren");
/// assert_eq!(id.as_str(), "cren");
/// assert_eq!(id.to_string(), "cren");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MelonId(String);

impl MelonId {
    /// Create a new ID from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MelonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MelonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MelonId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<MelonId> for String {
    fn from(id: MelonId) -> Self {
        id.0
    }
}

impl AsRef<str> for MelonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MelonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
