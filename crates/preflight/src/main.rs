use std::process::ExitCode;

use clap::Parser;

use crate::cli::App;

mod cli;
mod config;
mod input;
mod logging;

fn main() -> anyhow::Result<ExitCode> {
    let app = App::parse();
    logging::init(app.global.verbose);
    app.run()
}
