pub mod build;
pub mod completions;
pub mod fetch;
pub mod init;
pub mod list;
pub mod project;
pub mod validate;

use clap::{Parser, Subcommand};

pub use project::{Project, SourceArgs};

/// fatex - Font Awesome to LaTeX package generator
#[derive(Parser, Debug)]
#[command(name = "fatex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate LaTeX packages from a Font Awesome release
    Build(build::BuildArgs),

    /// Download a Font Awesome release from GitHub
    Fetch(fetch::FetchArgs),

    /// Initialize a fatex project (generates fatex.yaml)
    Init(init::InitArgs),

    /// List the macros a build would generate
    List(list::ListArgs),

    /// Check a release without writing any packages
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
