pub use command::Command;
pub use error::{Error, Result};
pub use shell::Shell;

pub mod command;
pub mod dir;
mod error;
pub mod shell;
