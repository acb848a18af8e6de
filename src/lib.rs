//! Core library entry for the `tabgen` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod deriver;
pub mod policy;
pub mod ports;
pub mod registry;
pub mod routes;
pub mod task;
pub mod tour;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["tabgen", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_missing_manifest() {
        let result = run(["tabgen", "derive", "--manifest", "/nonexistent/manifest.yaml"]);
        assert!(result.is_err());
    }
}
