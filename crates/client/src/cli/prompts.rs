//! Prompt CLI commands.

use clap::Parser;

/// Fetch a prompt.
#[derive(Debug, Parser)]
pub struct GetCommand {
    /// Prompt reference.
    pub reference: String,
    /// Exact version; the latest version when omitted.
    pub versioning: Option<String>,
    /// Treat versions as MAJOR.MINOR.PATCH and pad them for storage.
    #[arg(long)]
    pub semver: bool,
}

/// List prompt versions.
#[derive(Debug, Parser)]
pub struct VersionsCommand {
    /// Prompt reference.
    pub reference: String,
    /// Show padded MAJOR.MINOR.PATCH tokens without padding.
    #[arg(long)]
    pub semver: bool,
}

/// Store a prompt version.
#[derive(Debug, Parser)]
pub struct PutCommand {
    /// Prompt reference.
    pub reference: String,
    /// Version token. Versions sort as plain strings, so zero-pad numbers.
    pub versioning: String,
    /// Prompt content; read from stdin when omitted.
    #[arg(long, short)]
    pub content: Option<String>,
    /// Treat the version as MAJOR.MINOR.PATCH and pad it for storage.
    #[arg(long)]
    pub semver: bool,
    /// Fail instead of replacing an existing version.
    #[arg(long)]
    pub create_only: bool,
}
