use std::io::{self, Write};
use std::process::{self, ExitStatus};

use preflight_platform::{Command, Shell};
use preflight_verify::{Digest, DigestAlgorithm, ExpectedDigest, compute};
use tracing::{debug, info};

use crate::error::Result;
use crate::lookup::{Lookup, LookupResult};
use crate::report;
use crate::result::CheckResult;

/// Exit status used when a check fails.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Digest gate in front of command execution.
///
/// Holds the lookup and the shell used for string commands; nothing else, so
/// one instance serves any number of checks.
pub struct Preflight {
    lookup: Box<dyn Lookup>,
    shell: Shell,
}

impl Preflight {
    pub fn new(lookup: impl Lookup + 'static) -> Self {
        Self::with_lookup(Box::new(lookup))
    }

    pub fn with_lookup(lookup: Box<dyn Lookup>) -> Self {
        Self {
            lookup,
            shell: Shell::default(),
        }
    }

    /// Shell used by [`exec_piped`](Self::exec_piped) and
    /// [`run_script`](Self::run_script).
    pub fn shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    pub fn lookup_name(&self) -> &str {
        self.lookup.name()
    }

    /// Verify `content` against `expected`.
    ///
    /// The lookup is consulted only when the digest matches.
    pub fn check(&self, content: impl AsRef<[u8]>, expected: &str) -> CheckResult {
        let wanted = ExpectedDigest::parse(expected);
        let actual = compute(wanted.algorithm(), content.as_ref());
        let matched = wanted.matches(&actual);

        let lookup = if matched {
            self.lookup.hash(&actual)
        } else {
            LookupResult::default()
        };
        let ok = matched && !lookup.vulnerable;

        debug!(
            algorithm = %wanted.algorithm(),
            actual = %actual.to_hex(),
            matched,
            vulnerable = lookup.vulnerable,
            "preflight check decided"
        );

        CheckResult {
            actual_digest: actual.to_hex(),
            expected_digest: expected.to_string(),
            lookup,
            ok,
        }
    }

    /// Digest of `content` under every supported algorithm.
    pub fn digests(content: impl AsRef<[u8]>) -> Vec<Digest> {
        DigestAlgorithm::ALL
            .into_iter()
            .map(|alg| compute(alg, content.as_ref()))
            .collect()
    }

    /// Spawn `args[0]` with the remaining arguments, then check its stdout.
    pub fn exec_to<W, S>(&self, out: &mut W, args: &[S], expected: &str) -> Result<CheckResult>
    where
        W: Write,
        S: AsRef<str>,
    {
        report::write_start(out, self.lookup_name())?;
        let command = Command::from_argv(args)?.resolve()?;
        let content = command.capture()?;
        self.conclude(out, content, expected)
    }

    /// Like [`exec_to`](Self::exec_to) but `command` runs through the shell.
    pub fn exec_piped_to<W: Write>(&self, out: &mut W, command: &str, expected: &str) -> Result<CheckResult> {
        report::write_start(out, self.lookup_name())?;
        let content = Command::in_shell(self.shell, command).capture()?;
        self.conclude(out, content, expected)
    }

    /// Check content that was already produced, e.g. read from stdin.
    pub fn verify_input_to<W: Write>(&self, out: &mut W, content: &[u8], expected: &str) -> Result<CheckResult> {
        report::write_start(out, self.lookup_name())?;
        let result = self.check(content, expected);
        report::write_outcome(out, &result, content)?;
        out.flush()?;
        Ok(result)
    }

    /// Check the script text itself and run it through the shell only if it
    /// passes. Returns the script's exit status when it ran.
    ///
    /// The verified bytes are written to a temporary file that the shell
    /// runs, so exactly what was hashed is what executes.
    pub fn run_script_to<W: Write>(
        &self,
        out: &mut W,
        script: &[u8],
        expected: &str,
    ) -> Result<(CheckResult, Option<ExitStatus>)> {
        report::write_start(out, self.lookup_name())?;
        let result = self.check(script, expected);
        if !result.ok {
            report::write_failure(out, &result)?;
            out.flush()?;
            return Ok((result, None));
        }

        report::write_verified(out)?;
        out.flush()?;

        let mut file = tempfile::Builder::new()
            .prefix("preflight-")
            .suffix(&format!(".{}", self.shell.script_extension()))
            .tempfile()?;
        file.write_all(script)?;
        file.flush()?;

        let status = Command::script_file(self.shell, file.path()).status()?;
        info!(%status, "script finished");
        Ok((result, Some(status)))
    }

    /// [`exec_to`](Self::exec_to) on stdout; exits the process on failure.
    pub fn exec<S: AsRef<str>>(&self, args: &[S], expected: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        let result = self.exec_to(&mut out, args, expected)?;
        exit_on_failure(&result);
        Ok(())
    }

    /// [`exec_piped_to`](Self::exec_piped_to) on stdout; exits the process on failure.
    pub fn exec_piped(&self, command: &str, expected: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        let result = self.exec_piped_to(&mut out, command, expected)?;
        exit_on_failure(&result);
        Ok(())
    }

    /// [`verify_input_to`](Self::verify_input_to) on stdout; exits the process on failure.
    pub fn verify_input(&self, content: &[u8], expected: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        let result = self.verify_input_to(&mut out, content, expected)?;
        exit_on_failure(&result);
        Ok(())
    }

    /// [`run_script_to`](Self::run_script_to) on stdout; exits the process on
    /// failure, otherwise returns the script's exit status.
    pub fn run_script(&self, script: &[u8], expected: &str) -> Result<ExitStatus> {
        let mut out = io::stdout().lock();
        let (result, status) = self.run_script_to(&mut out, script, expected)?;
        drop(out);
        match status {
            Some(status) => Ok(status),
            None => fail(&result),
        }
    }

    fn conclude<W: Write>(&self, out: &mut W, content: Vec<u8>, expected: &str) -> Result<CheckResult> {
        let result = self.check(&content, expected);
        report::write_outcome(out, &result, &content)?;
        out.flush()?;
        Ok(result)
    }
}

fn exit_on_failure(result: &CheckResult) {
    if !result.ok {
        fail(result);
    }
}

fn fail(result: &CheckResult) -> ! {
    debug!(failure = ?result.failure(), "preflight failed, exiting");
    let _ = io::stdout().flush();
    process::exit(FAILURE_EXIT_CODE)
}
