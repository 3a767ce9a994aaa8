use std::process::ExitCode;

use preflight_core::Preflight;

#[derive(Debug, clap::Args)]
pub struct ExecArg {
    /// Expected digest of the command's stdout, `[md5=|sha1=|sha256=]<hex>`
    pub digest: String,

    /// Program and arguments, after `--`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl ExecArg {
    pub fn run(self, preflight: &Preflight) -> anyhow::Result<ExitCode> {
        preflight.exec(&self.command, &self.digest)?;
        Ok(ExitCode::SUCCESS)
    }
}
