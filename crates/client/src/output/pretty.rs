//! Pretty output formatting.

use prompt_api_core::prompt::{decode_semver, Prompt};

fn display_version(prompt: &Prompt, semver: bool) -> String {
    if semver {
        decode_semver(&prompt.versioning)
    } else {
        prompt.versioning.clone()
    }
}

/// Format a prompt for display.
pub fn format_prompt(prompt: &Prompt, semver: bool) -> String {
    format!(
        "{} @ {}\n  Created: {}\n\n{}",
        prompt.reference,
        display_version(prompt, semver),
        prompt.created_at.to_rfc3339(),
        prompt.content
    )
}

/// Format the versions of a prompt for display.
pub fn format_versions(reference: &str, prompts: &[Prompt], semver: bool) -> String {
    if prompts.is_empty() {
        return format!("No versions found for {reference}.");
    }
    let mut output = format!("VERSIONS OF {} ({})\n", reference, prompts.len());
    output.push_str(&"-".repeat(40));
    for prompt in prompts {
        output.push_str(&format!(
            "\n{}  {}",
            display_version(prompt, semver),
            prompt.created_at.to_rfc3339()
        ));
    }
    output
}
