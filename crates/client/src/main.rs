//! prompt-api-client CLI entry point.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use prompt_api_client::cli::{health::HealthAction, Cli, Commands, OutputFormat};
use prompt_api_client::client::PromptClient;
use prompt_api_client::output::{format_output, pretty};
use prompt_api_core::prompt::encode_semver;

/// Pads the version when `--semver` is set.
fn storage_version(versioning: &str, semver: bool) -> Result<String> {
    if semver {
        Ok(encode_semver(versioning)?)
    } else {
        Ok(versioning.to_string())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = PromptClient::new(&cli.base_url);

    match cli.command {
        Commands::Get(get) => {
            let prompt = match &get.versioning {
                Some(versioning) => {
                    let versioning = storage_version(versioning, get.semver)?;
                    client.get_version(&get.reference, &versioning).await?
                }
                None => client.get_latest(&get.reference).await?,
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&prompt, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_prompt(&prompt, get.semver)),
            }
        }
        Commands::Versions(versions) => {
            let prompts = client.list_versions(&versions.reference).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&prompts, cli.format)),
                OutputFormat::Pretty => println!(
                    "{}",
                    pretty::format_versions(&versions.reference, &prompts, versions.semver)
                ),
            }
        }
        Commands::Put(put) => {
            let content = match put.content {
                Some(content) => content,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read prompt content from stdin")?;
                    buffer
                }
            };
            let versioning = storage_version(&put.versioning, put.semver)?;
            let prompt = client
                .put_prompt(&put.reference, &versioning, &content, put.create_only)
                .await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&prompt, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("Stored:\n{}", pretty::format_prompt(&prompt, put.semver))
                    }
                }
            }
        }
        Commands::Health(health) => match health.action {
            HealthAction::Livez => {
                client.livez().await?;
                if !cli.quiet {
                    println!("OK ({})", client.base_url());
                }
            }
        },
    }

    Ok(())
}
