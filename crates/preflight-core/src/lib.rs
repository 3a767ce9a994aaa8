//! Digest-gated command execution.
//!
//! # Architecture
//!
//! [`Preflight::check`] is the whole decision: parse the expected digest,
//! digest the content, compare, and only on a match ask the [`Lookup`]
//! whether the content is known to be vulnerable. Everything else in this
//! crate obtains content (spawned process, shell command, stdin, script) and
//! reports the [`CheckResult`].
//!
//! # Example
//!
//! ```
//! use preflight_core::{NoLookup, Preflight};
//!
//! let preflight = Preflight::new(NoLookup);
//! let result = preflight.check(
//!     "echo 'hello'",
//!     "sha256=3b084aa6ad2246428c9270825d8631e077b7e7c9bb16f6cafb482bc7fd63e348",
//! );
//! assert!(result.ok);
//!
//! let result = preflight.check("abcd", "123");
//! assert!(!result.ok);
//! assert_eq!(result.expected_digest, "123");
//! ```

pub use error::{Error, Result};
pub use lookup::{FileLookup, FixedLookup, Lookup, LookupResult, NoLookup};
pub use preflight::{FAILURE_EXIT_CODE, Preflight};
pub use result::{CheckResult, Failure};

pub use preflight_platform::Shell;
pub use preflight_verify::{Digest, DigestAlgorithm, ExpectedDigest};

mod error;
pub mod lookup;
mod preflight;
pub mod report;
mod result;
