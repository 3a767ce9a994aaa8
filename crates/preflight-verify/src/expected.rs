use crate::{Digest, DigestAlgorithm};

/// An expected digest in the form `<tag>=<hex>` or bare `<hex>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedDigest {
    algorithm: DigestAlgorithm,
    hex: String,
}

impl ExpectedDigest {
    pub fn new(algorithm: DigestAlgorithm, hex: impl Into<String>) -> Self {
        Self {
            algorithm,
            hex: hex.into(),
        }
    }

    /// Parse an expected digest.
    ///
    /// Splits on the first `=`. An unknown or missing tag does not fail: the
    /// whole input is then taken as a SHA-256 hex value, and a malformed value
    /// surfaces later as an ordinary mismatch.
    pub fn parse(raw: &str) -> Self {
        if let Some((tag, hex)) = raw.split_once('=')
            && let Some(algorithm) = DigestAlgorithm::from_tag(tag)
        {
            return Self::new(algorithm, hex);
        }

        Self::new(DigestAlgorithm::default(), raw)
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Case-insensitive hex comparison. Lengths are not validated up front.
    pub fn matches(&self, actual: &Digest) -> bool {
        actual.algorithm() == self.algorithm && actual.to_hex().eq_ignore_ascii_case(&self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;

    #[test]
    fn test_parse_tagged() {
        let wanted = ExpectedDigest::parse("md5=a849639cc38d82e3c0ac4e4dfd8186dd");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Md5);
        assert_eq!(wanted.hex(), "a849639cc38d82e3c0ac4e4dfd8186dd");

        let wanted = ExpectedDigest::parse("sha1=abc");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Sha1);
        assert_eq!(wanted.hex(), "abc");
    }

    #[test]
    fn test_parse_bare_defaults_to_sha256() {
        let wanted = ExpectedDigest::parse("123");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(wanted.hex(), "123");
    }

    #[test]
    fn test_parse_unknown_tag_keeps_whole_string() {
        let wanted = ExpectedDigest::parse("sha512=abc");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(wanted.hex(), "sha512=abc");

        let wanted = ExpectedDigest::parse("SHA1=abc");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(wanted.hex(), "SHA1=abc");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let wanted = ExpectedDigest::parse("sha256=ab=cd");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(wanted.hex(), "ab=cd");
    }

    #[test]
    fn test_parse_empty() {
        let wanted = ExpectedDigest::parse("");
        assert_eq!(wanted.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(wanted.hex(), "");
    }

    #[test]
    fn test_matches_ignores_case() {
        let actual = compute(DigestAlgorithm::Sha256, b"abcd");
        let upper = actual.to_hex().to_uppercase();
        assert!(ExpectedDigest::parse(&upper).matches(&actual));
    }

    #[test]
    fn test_matches_rejects_wrong_length() {
        let actual = compute(DigestAlgorithm::Sha256, b"abcd");
        assert!(!ExpectedDigest::parse("88d4266f").matches(&actual));
    }
}
