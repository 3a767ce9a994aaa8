use std::path::PathBuf;
use std::process::ExitCode;

use preflight_core::Preflight;

use crate::input;

/// `curl -sL https://example.com/install.sh | preflight run sha256=...`
#[derive(Debug, clap::Args)]
pub struct RunArg {
    /// Expected digest of the script text
    pub digest: String,

    /// Script file; reads stdin when absent or `-`
    pub script: Option<PathBuf>,
}

impl RunArg {
    pub fn run(self, preflight: &Preflight) -> anyhow::Result<ExitCode> {
        let script = input::read_all(self.script.as_deref())?;
        let status = preflight.run_script(&script, &self.digest)?;

        Ok(match status.code() {
            Some(0) => ExitCode::SUCCESS,
            Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
            None => ExitCode::FAILURE,
        })
    }
}
