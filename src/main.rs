//! `neo`: print today's near-Earth objects as one JSON line.

use std::process::ExitCode;

fn main() -> ExitCode {
    let Err(err) = neo_feed::app::run() else {
        return ExitCode::SUCCESS;
    };
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}
