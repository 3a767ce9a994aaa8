use std::sync::atomic::{AtomicUsize, Ordering};

use preflight_verify::Digest;

use super::{Lookup, LookupResult};

/// Test double: answers every query with the same result and counts queries.
#[derive(Debug, Default)]
pub struct FixedLookup {
    name: String,
    result: LookupResult,
    calls: AtomicUsize,
}

impl FixedLookup {
    pub fn new(name: impl Into<String>, result: LookupResult) -> Self {
        Self {
            name: name.into(),
            result,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`Lookup::hash`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Lookup for FixedLookup {
    fn name(&self) -> &str {
        &self.name
    }

    fn hash(&self, _digest: &Digest) -> LookupResult {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone()
    }
}
