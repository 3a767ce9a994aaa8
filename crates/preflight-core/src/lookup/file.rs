use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use preflight_verify::{Digest, ExpectedDigest};
use tracing::{debug, warn};

use super::{Lookup, LookupResult};
use crate::error::{Error, Result};

/// Lookup backed by a list of known-bad digests, loaded once.
///
/// One entry per line:
///
/// ```text
/// # comment
/// <digest> [message words...] [https://link]
/// ```
///
/// `<digest>` may carry a `<tag>=` prefix. A trailing `http://` or `https://`
/// token becomes the link; anything between digest and link is the message.
#[derive(Debug, Clone)]
pub struct FileLookup {
    name: String,
    entries: HashMap<String, LookupResult>,
}

impl FileLookup {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::LookupFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path, BufReader::new(file))
    }

    /// Parse entries from `reader`; `path` is used for naming only.
    pub fn from_reader<R: BufRead>(path: impl AsRef<Path>, reader: R) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let fallback = format!("digest is listed in {}", path.display());
        let mut entries = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::LookupFile {
                path: path.clone(),
                source,
            })?;
            if let Some((hex, result)) = parse_line(&line, &fallback) {
                if entries.insert(hex, result).is_some() {
                    warn!(path = %path.display(), line = index + 1, "duplicate digest in lookup file");
                }
            }
        }

        debug!(path = %path.display(), entries = entries.len(), "lookup file loaded");

        Ok(Self {
            name: format!("file lookup: {}", path.display()),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str, fallback: &str) -> Option<(String, LookupResult)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    let digest = ExpectedDigest::parse(tokens.remove(0));

    let link = match tokens.last() {
        Some(last) if last.starts_with("http://") || last.starts_with("https://") => {
            tokens.pop().unwrap_or_default().to_string()
        }
        _ => String::new(),
    };

    let message = if tokens.is_empty() {
        fallback.to_string()
    } else {
        tokens.join(" ")
    };

    Some((
        digest.hex().to_ascii_lowercase(),
        LookupResult::vulnerable(message, link),
    ))
}

impl Lookup for FileLookup {
    fn name(&self) -> &str {
        &self.name
    }

    fn hash(&self, digest: &Digest) -> LookupResult {
        self.entries
            .get(&digest.to_hex())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflight_verify::{DigestAlgorithm, compute};
    use std::io::Cursor;
    use std::path::PathBuf;

    const ABCD_SHA256: &str = "88d4266fd4e6338d13b845fcf289579d209c897823b9217da3e161936f031589";

    fn lookup(contents: &str) -> FileLookup {
        FileLookup::from_reader("list.txt", Cursor::new(contents.to_string())).unwrap()
    }

    #[test]
    fn test_parse_line_full() {
        let (hex, result) =
            parse_line("sha256=ABCD remote code exec https://example.com/1", "fallback").unwrap();
        assert_eq!(hex, "abcd");
        assert_eq!(result, LookupResult::vulnerable("remote code exec", "https://example.com/1"));
    }

    #[test]
    fn test_parse_line_digest_only() {
        let (hex, result) = parse_line("  abcd  ", "fallback").unwrap();
        assert_eq!(hex, "abcd");
        assert_eq!(result, LookupResult::vulnerable("fallback", ""));
    }

    #[test]
    fn test_parse_line_link_without_message() {
        let (_, result) = parse_line("abcd http://example.com", "fallback").unwrap();
        assert_eq!(result.message, "fallback");
        assert_eq!(result.link, "http://example.com");
    }

    #[test]
    fn test_parse_line_skips_comments_and_blanks() {
        assert!(parse_line("", "f").is_none());
        assert!(parse_line("   ", "f").is_none());
        assert!(parse_line("# abcd", "f").is_none());
    }

    #[test]
    fn test_listed_digest_is_vulnerable() {
        let lookup = lookup(&format!("# known bad\n{ABCD_SHA256} bad build\n"));
        let result = lookup.hash(&compute(DigestAlgorithm::Sha256, b"abcd"));

        assert!(result.vulnerable);
        assert_eq!(result.message, "bad build");
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_unlisted_digest_is_clean() {
        let lookup = lookup(&format!("{ABCD_SHA256}\n"));
        let result = lookup.hash(&compute(DigestAlgorithm::Sha256, b"abce"));
        assert_eq!(result, LookupResult::default());
    }

    #[test]
    fn test_fallback_message_names_path() {
        let lookup = lookup(ABCD_SHA256);
        let result = lookup.hash(&compute(DigestAlgorithm::Sha256, b"abcd"));
        assert_eq!(result.message, "digest is listed in list.txt");
    }

    #[test]
    fn test_later_duplicate_wins() {
        let lookup = lookup(&format!("{ABCD_SHA256} first\n{ABCD_SHA256} second\n"));
        let result = lookup.hash(&compute(DigestAlgorithm::Sha256, b"abcd"));
        assert_eq!(result.message, "second");
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_name_embeds_path() {
        assert_eq!(lookup("").name(), "file lookup: list.txt");
        assert!(lookup("").is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let err = FileLookup::open("/nonexistent/lookup/list.txt").unwrap_err();
        match err {
            Error::LookupFile { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/lookup/list.txt"))
            }
            other => panic!("expected LookupFile error, got {other:?}"),
        }
    }
}
