//! CLI command definitions.

pub mod health;
pub mod prompts;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the prompt API.
#[derive(Debug, Parser)]
#[command(name = "prompt-api-client")]
#[command(about = "CLI client for the prompt API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "PROMPT_API_URL", default_value = crate::client::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the latest or an exact version of a prompt.
    Get(prompts::GetCommand),
    /// List every version of a prompt.
    Versions(prompts::VersionsCommand),
    /// Store a prompt version.
    Put(prompts::PutCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put_with_semver() {
        let cli = Cli::try_parse_from([
            "prompt-api-client",
            "--base-url",
            "http://api.test",
            "put",
            "greeting",
            "1.2.3",
            "--content",
            "Hello",
            "--semver",
            "--create-only",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://api.test");
        match cli.command {
            Commands::Put(put) => {
                assert_eq!(put.reference, "greeting");
                assert_eq!(put.versioning, "1.2.3");
                assert_eq!(put.content.as_deref(), Some("Hello"));
                assert!(put.semver);
                assert!(put.create_only);
            }
            other => panic!("Expected put command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_get_without_version() {
        let cli = Cli::try_parse_from(["prompt-api-client", "get", "greeting"]).unwrap();

        match cli.command {
            Commands::Get(get) => {
                assert_eq!(get.reference, "greeting");
                assert_eq!(get.versioning, None);
            }
            other => panic!("Expected get command, got {other:?}"),
        }
    }
}
