use crate::lookup::LookupResult;

/// Outcome of one [`Preflight::check`](crate::Preflight::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Lowercase hex digest of the content.
    pub actual_digest: String,
    /// The expected digest exactly as the caller gave it.
    pub expected_digest: String,
    pub lookup: LookupResult,
    pub ok: bool,
}

/// Why a check did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    DigestMismatch,
    Vulnerable,
}

impl CheckResult {
    pub fn failure(&self) -> Option<Failure> {
        if self.ok {
            None
        } else if self.lookup.vulnerable {
            Some(Failure::Vulnerable)
        } else {
            Some(Failure::DigestMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(ok: bool, vulnerable: bool) -> CheckResult {
        CheckResult {
            actual_digest: "aa".into(),
            expected_digest: "aa".into(),
            lookup: LookupResult {
                vulnerable,
                ..Default::default()
            },
            ok,
        }
    }

    #[test]
    fn test_failure_classification() {
        assert_eq!(result(true, false).failure(), None);
        assert_eq!(result(false, false).failure(), Some(Failure::DigestMismatch));
        assert_eq!(result(false, true).failure(), Some(Failure::Vulnerable));
    }
}
