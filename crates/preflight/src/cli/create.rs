use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use console::{Term, style};
use preflight_core::{Digest, Preflight};
use preflight_verify::{DigestAlgorithm, VerifiedReader};

use crate::input;

#[derive(Debug, clap::Args)]
pub struct CreateArg {
    /// Input file; reads stdin when absent or `-`
    pub file: Option<PathBuf>,

    /// Only compute this algorithm, streaming the input instead of buffering it
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<DigestAlgorithm>,
}

impl CreateArg {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let digests = match self.algorithm {
            Some(algorithm) => {
                let mut reader = VerifiedReader::new(input::open(self.file.as_deref())?, algorithm);
                io::copy(&mut reader, &mut io::sink()).context("failed to read input")?;
                tracing::debug!(bytes = reader.bytes_read(), %algorithm, "input digested");
                vec![reader.finish()]
            }
            None => Preflight::digests(input::read_all(self.file.as_deref())?),
        };

        let term = Term::stdout();
        for digest in digests {
            term.write_line(&render(&digest))?;
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn render(digest: &Digest) -> String {
    format!("{}={}", style(digest.algorithm()).bold(), digest.to_hex())
}
