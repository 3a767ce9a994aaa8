use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{Error, Result};
use crate::shell::Shell;

/// A child process to run either directly or through a shell.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    /// Build from an argument vector: the first element is the program.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or(Error::EmptyCommand)?;
        Ok(Self::new(program.as_ref()).args(args.iter().map(AsRef::<str>::as_ref)))
    }

    /// Run `script` as a command string through `shell`.
    pub fn in_shell(shell: Shell, script: impl Into<String>) -> Self {
        let script = script.into();
        let mut inner = StdCommand::new(shell.executable());
        inner.args([shell.command_flag(), &script]);
        Self {
            inner,
            program: script,
        }
    }

    /// Run the script file at `path` through `shell`.
    ///
    /// The file is read by the shell as is, so its bytes reach the
    /// interpreter unchanged and are not limited by argument size.
    pub fn script_file(shell: Shell, path: &Path) -> Self {
        let mut inner = StdCommand::new(shell.executable());
        inner.args(shell.script_args()).arg(path);
        Self {
            inner,
            program: format!("{shell} {}", path.display()),
        }
    }

    /// Resolve the program on `PATH` (or as a path) before spawning, so a
    /// missing binary is reported as such rather than as a spawn failure.
    pub fn resolve(mut self) -> Result<Self> {
        let path = which::which(&self.program).map_err(|_| Error::CommandNotFound {
            cmd: self.program.clone(),
        })?;
        let args: Vec<_> = self.inner.get_args().map(ToOwned::to_owned).collect();
        self.inner = StdCommand::new(path);
        self.inner.args(args);
        Ok(self)
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run to completion and return everything written to stdout.
    ///
    /// Stderr is inherited and never part of the captured bytes. Stdin is
    /// closed. A non-zero exit is an error.
    pub fn capture(mut self) -> Result<Vec<u8>> {
        debug!(cmd = %self.program, "capturing command output");
        let output = self
            .inner
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Error::CommandFailed {
                cmd: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::NonZeroExit {
                cmd: self.program,
                status: output.status,
            });
        }

        debug!(cmd = %self.program, bytes = output.stdout.len(), "command finished");
        Ok(output.stdout)
    }

    /// Run to completion with inherited stdio and return the exit status.
    pub fn status(mut self) -> Result<ExitStatus> {
        debug!(cmd = %self.program, "running command");
        self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}
