//! Shell selection for string-form commands.

use std::fmt;

pub use query_shell::Shell as QueryShell;

/// Shells a command string can be handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Sh,
    Bash,
    Zsh,
    Powershell,
    Pwsh,
    Cmd,
}

impl Default for Shell {
    #[cfg(target_os = "windows")]
    fn default() -> Self {
        Shell::Cmd
    }

    #[cfg(not(target_os = "windows"))]
    fn default() -> Self {
        Shell::Sh
    }
}

fn from_query_shell(qs: QueryShell) -> Option<Shell> {
    match qs {
        QueryShell::Bash => Some(Shell::Bash),
        QueryShell::Zsh => Some(Shell::Zsh),
        QueryShell::Powershell => Some(Shell::Powershell),
        _ => None,
    }
}

impl Shell {
    /// Detect the user's shell.
    ///
    /// Returns `None` if detection fails or the shell cannot run `-c` style
    /// command strings.
    pub fn detect() -> Option<Shell> {
        query_shell::get_shell().ok().and_then(from_query_shell)
    }

    pub fn executable(&self) -> &'static str {
        match self {
            Shell::Sh => "sh",
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Powershell => "powershell",
            Shell::Pwsh => "pwsh",
            Shell::Cmd => "cmd.exe",
        }
    }

    /// Flag that makes the shell execute its next argument as a command string.
    pub fn command_flag(&self) -> &'static str {
        match self {
            Shell::Sh | Shell::Bash | Shell::Zsh => "-c",
            Shell::Powershell | Shell::Pwsh => "-Command",
            Shell::Cmd => "/C",
        }
    }

    /// Arguments placed before a script path to run that file.
    pub fn script_args(&self) -> &'static [&'static str] {
        match self {
            Shell::Sh | Shell::Bash | Shell::Zsh => &[],
            Shell::Powershell | Shell::Pwsh => &["-NoProfile", "-ExecutionPolicy", "Bypass", "-File"],
            Shell::Cmd => &["/C"],
        }
    }

    /// File extension the shell expects on a script file.
    pub fn script_extension(&self) -> &'static str {
        match self {
            Shell::Sh | Shell::Bash | Shell::Zsh => "sh",
            Shell::Powershell | Shell::Pwsh => "ps1",
            Shell::Cmd => "cmd",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shell::Sh => "sh",
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Powershell => "powershell",
            Shell::Pwsh => "pwsh",
            Shell::Cmd => "cmd",
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
