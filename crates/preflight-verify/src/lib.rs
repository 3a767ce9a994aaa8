//! Digest primitives for preflight checks.
//!
//! Parses expected digests, computes actual ones and compares them. Nothing
//! here decides policy: callers get a [`Digest`] and an [`ExpectedDigest`]
//! and choose what a mismatch means.
//!
//! # Example
//!
//! ```
//! use preflight_verify::{ExpectedDigest, DigestAlgorithm, compute};
//!
//! let expected = ExpectedDigest::parse("md5=a849639cc38d82e3c0ac4e4dfd8186dd");
//! let actual = compute(expected.algorithm(), b"echo 'hello'");
//!
//! assert_eq!(actual.algorithm(), DigestAlgorithm::Md5);
//! assert!(expected.matches(&actual));
//! ```

pub use self::algorithm::DigestAlgorithm;
pub use self::error::Error;
pub use self::expected::ExpectedDigest;
pub use self::hasher::{
    AlgorithmHasher, DigestHasher, Hasher, Md5Hasher, Sha1Hasher, Sha256Hasher, compute,
};
pub use self::reader::VerifiedReader;
pub use self::value::Digest;

mod algorithm;
mod error;
mod expected;
mod hasher;
mod reader;
mod value;
