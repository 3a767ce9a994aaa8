use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

/// Open `path`, or stdin when it is absent or `-`.
pub fn open(path: Option<&Path>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

pub fn read_all(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut content = Vec::new();
    open(path)?
        .read_to_end(&mut content)
        .context("failed to read input")?;
    Ok(content)
}
