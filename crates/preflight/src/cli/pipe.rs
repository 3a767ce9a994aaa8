use std::process::ExitCode;

use preflight_core::Preflight;

#[derive(Debug, clap::Args)]
pub struct PipeArg {
    /// Expected digest of the command's stdout
    pub digest: String,

    /// Command string handed to the shell
    pub command: String,
}

impl PipeArg {
    pub fn run(self, preflight: &Preflight) -> anyhow::Result<ExitCode> {
        preflight.exec_piped(&self.command, &self.digest)?;
        Ok(ExitCode::SUCCESS)
    }
}
