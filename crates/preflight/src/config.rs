//! Layered settings: defaults < config file < `PF_*` environment < flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::ValueEnum;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use preflight_core::{FileLookup, Lookup, NoLookup, Shell};
use preflight_platform::dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

const APP_NAME: &str = "preflight";
const ENV_PREFIX: &str = "PF_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Digest list consulted after a digest matches.
    pub file_lookup: Option<PathBuf>,
    /// Shell for string commands. Unset means the platform default.
    pub shell: Option<ShellChoice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShellChoice {
    Sh,
    Bash,
    Zsh,
    Powershell,
    Pwsh,
    Cmd,
    /// Whatever shell the user is running, falling back to the default.
    Auto,
}

impl ShellChoice {
    pub fn resolve(self) -> Shell {
        match self {
            ShellChoice::Sh => Shell::Sh,
            ShellChoice::Bash => Shell::Bash,
            ShellChoice::Zsh => Shell::Zsh,
            ShellChoice::Powershell => Shell::Powershell,
            ShellChoice::Pwsh => Shell::Pwsh,
            ShellChoice::Cmd => Shell::Cmd,
            ShellChoice::Auto => Shell::detect().unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load from `explicit` if given (it must exist), otherwise from the user
    /// config file if present, then apply the environment.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(path) = dir::app_config_file(APP_NAME) {
                    debug!(path = %path.display(), "using user config file if present");
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("invalid preflight configuration")
    }

    pub fn with_overrides(mut self, file_lookup: Option<PathBuf>, shell: Option<ShellChoice>) -> Self {
        if file_lookup.is_some() {
            self.file_lookup = file_lookup;
        }
        if shell.is_some() {
            self.shell = shell;
        }
        self
    }

    pub fn shell(&self) -> Shell {
        self.shell.map(ShellChoice::resolve).unwrap_or_default()
    }

    pub fn lookup(&self) -> anyhow::Result<Box<dyn Lookup>> {
        match &self.file_lookup {
            Some(path) => {
                let lookup = FileLookup::open(path)
                    .with_context(|| format!("cannot load lookup list {}", path.display()))?;
                Ok(Box::new(lookup))
            }
            None => Ok(Box::new(NoLookup)),
        }
    }
}
