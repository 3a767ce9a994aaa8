//! Vulnerability lookup keyed by digest.
//!
//! [`Lookup`] is the only thing [`Preflight`](crate::Preflight) knows about a
//! vulnerability source. Implementations are queried only after the digest
//! has already matched.

use std::sync::Arc;

use preflight_verify::Digest;

pub use file::FileLookup;
pub use fixed::FixedLookup;

mod file;
mod fixed;

/// Answer to "is this digest known to be vulnerable?".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub vulnerable: bool,
    pub message: String,
    pub link: String,
}

impl LookupResult {
    pub fn vulnerable(message: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            vulnerable: true,
            message: message.into(),
            link: link.into(),
        }
    }
}

pub trait Lookup: Send + Sync {
    /// Short identifier for the startup banner. Empty means unnamed.
    fn name(&self) -> &str;

    fn hash(&self, digest: &Digest) -> LookupResult;
}

impl<L: Lookup + ?Sized> Lookup for Arc<L> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn hash(&self, digest: &Digest) -> LookupResult {
        (**self).hash(digest)
    }
}

impl<L: Lookup + ?Sized> Lookup for Box<L> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn hash(&self, digest: &Digest) -> LookupResult {
        (**self).hash(digest)
    }
}

/// Lookup that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl Lookup for NoLookup {
    fn name(&self) -> &str {
        ""
    }

    fn hash(&self, _digest: &Digest) -> LookupResult {
        LookupResult::default()
    }
}
