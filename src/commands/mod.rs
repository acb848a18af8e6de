//! Command dispatch and handlers.

pub mod derive;
pub mod show;
pub mod tour;
pub mod validate;

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = AppContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: &Command, ctx: &AppContext) -> Result<(), String> {
    match command {
        Command::Derive { manifest, out, format } => {
            derive::run(ctx, &manifest_path(manifest.as_deref()), out.as_deref(), *format)
        }
        Command::Show { manifest } => show::run(ctx, &manifest_path(manifest.as_deref())),
        Command::Validate { manifest } => validate::run(ctx, &manifest_path(manifest.as_deref())),
        Command::Tour { file } => tour::run(ctx, file),
    }
}

/// Resolves the manifest path: `--manifest` flag, then the
/// `TABGEN_MANIFEST` env var, then `entity_types.yaml`.
fn manifest_path(flag: Option<&Path>) -> PathBuf {
    flag.map_or_else(
        || {
            env::var("TABGEN_MANIFEST")
                .map_or_else(|_| PathBuf::from("entity_types.yaml"), PathBuf::from)
        },
        Path::to_path_buf,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_default() {
        let path = manifest_path(Some(Path::new("/custom/manifest.yaml")));
        assert_eq!(path, PathBuf::from("/custom/manifest.yaml"));
    }

    #[test]
    fn falls_back_to_conventional_name() {
        std::env::remove_var("TABGEN_MANIFEST");
        let path = manifest_path(None);
        assert_eq!(path, PathBuf::from("entity_types.yaml"));
    }
}
