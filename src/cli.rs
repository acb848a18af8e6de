//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `tabgen`.
#[derive(Debug, Parser)]
#[command(name = "tabgen", version, about = "Derive admin UI tabs from entity type manifests")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive local tasks and emit the pass artifact.
    Derive {
        /// Path to the entity type manifest.
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Write the artifact to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Artifact serialization format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// List the entity types of a manifest with their capabilities.
    Show {
        /// Path to the entity type manifest.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Check that every derived base route is resolvable.
    Validate {
        /// Path to the entity type manifest.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Print the tips of a tour file in display order.
    Tour {
        /// Path to the tour file.
        file: PathBuf,
    },
}

/// Serialization format for the derived task artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}
