use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use preflight_core::Preflight;

use crate::config::{Config, ShellChoice};

pub mod check;
pub mod create;
pub mod exec;
pub mod pipe;
pub mod run;

#[derive(Debug, Parser)]
#[command(name = "preflight", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the user config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Digest list to consult once a digest matches
    #[arg(long, global = true, value_name = "PATH")]
    pub lookup_file: Option<PathBuf>,

    /// Shell used for string commands and scripts
    #[arg(long, global = true, value_enum)]
    pub shell: Option<ShellChoice>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "exec", about = "Run a command and verify its output")]
    Exec(exec::ExecArg),
    #[command(name = "pipe", about = "Run a command string through the shell and verify its output")]
    Pipe(pipe::PipeArg),
    #[command(name = "run", about = "Verify a script, then run it")]
    Run(run::RunArg),
    #[command(name = "check", about = "Verify piped input and pass it through")]
    Check(check::CheckArg),
    #[command(name = "create", about = "Print digests for pinning")]
    Create(create::CreateArg),
}

impl App {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        match self.cmd {
            Commands::Exec(arg) => arg.run(&self.global.preflight()?),
            Commands::Pipe(arg) => arg.run(&self.global.preflight()?),
            Commands::Run(arg) => arg.run(&self.global.preflight()?),
            Commands::Check(arg) => arg.run(&self.global.preflight()?),
            Commands::Create(arg) => arg.run(),
        }
    }
}

impl GlobalArgs {
    fn preflight(self) -> anyhow::Result<Preflight> {
        let config = Config::load(self.config.as_deref())?.with_overrides(self.lookup_file, self.shell);
        tracing::debug!(?config, "configuration loaded");

        Ok(Preflight::with_lookup(config.lookup()?).shell(config.shell()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_exec_collects_trailing_args() {
        let app = App::try_parse_from(["preflight", "exec", "123", "--", "ls", "-la", "/tmp"]).unwrap();
        match app.cmd {
            Commands::Exec(arg) => {
                assert_eq!(arg.digest, "123");
                assert_eq!(arg.command, ["ls", "-la", "/tmp"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = App::try_parse_from([
            "preflight", "pipe", "--lookup-file", "list.txt", "--shell", "bash", "123", "echo hi",
        ])
        .unwrap();
        assert_eq!(app.global.lookup_file, Some(PathBuf::from("list.txt")));
        assert_eq!(app.global.shell, Some(ShellChoice::Bash));
    }

    #[test]
    fn test_exec_requires_command() {
        assert!(App::try_parse_from(["preflight", "exec", "123"]).is_err());
    }
}
