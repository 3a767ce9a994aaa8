//! User-facing report text.

use std::io::{self, Write};

use crate::result::{CheckResult, Failure};

pub fn write_start<W: Write>(out: &mut W, lookup_name: &str) -> io::Result<()> {
    if lookup_name.is_empty() {
        writeln!(out, "⌛️ Preflight starting")
    } else {
        writeln!(out, "⌛️ Preflight starting with {lookup_name}")
    }
}

/// Success banner only; callers decide what, if anything, follows it.
pub fn write_verified<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "✅ Preflight verified")
}

/// Failure report for a result that did not pass. Writes nothing for `ok`.
pub fn write_failure<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    match result.failure() {
        None => Ok(()),
        Some(Failure::DigestMismatch) => {
            writeln!(out, "❌ Preflight failed: Digest does not match.")?;
            writeln!(out)?;
            writeln!(out, "   Expected: {}", result.expected_digest)?;
            writeln!(out, "   Actual: {}", result.actual_digest)
        }
        Some(Failure::Vulnerable) => {
            writeln!(out, "❌ Preflight failed: Digest matches but marked as vulnerable.")?;
            writeln!(out)?;
            writeln!(out, "Information:")?;
            writeln!(out, "  Vulnerability: {}", result.lookup.message)?;
            writeln!(out, "  More: {}", result.lookup.link)
        }
    }
}

/// Full outcome: success banner plus `content` verbatim, or the failure report.
pub fn write_outcome<W: Write>(out: &mut W, result: &CheckResult, content: &[u8]) -> io::Result<()> {
    if result.ok {
        write_verified(out)?;
        out.write_all(content)
    } else {
        write_failure(out, result)
    }
}
