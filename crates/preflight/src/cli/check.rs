use std::path::PathBuf;
use std::process::ExitCode;

use preflight_core::Preflight;

use crate::input;

#[derive(Debug, clap::Args)]
pub struct CheckArg {
    /// Expected digest of the input
    pub digest: String,

    /// Input file; reads stdin when absent or `-`
    pub file: Option<PathBuf>,
}

impl CheckArg {
    pub fn run(self, preflight: &Preflight) -> anyhow::Result<ExitCode> {
        let content = input::read_all(self.file.as_deref())?;
        preflight.verify_input(&content, &self.digest)?;
        Ok(ExitCode::SUCCESS)
    }
}
