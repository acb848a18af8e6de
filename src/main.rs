//! Binary entrypoint for the `tabgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Pick up TABGEN_MANIFEST and friends from a local .env, if present.
    let _ = dotenvy::dotenv();

    match tabgen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
