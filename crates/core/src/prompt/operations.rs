use super::error::PromptError;
use super::types::Prompt;

/// Versioning token taken by the `GET /prompt/{reference}/versions` route.
pub const RESERVED_VERSIONING: &str = "versions";

/// Validates a prompt reference.
pub fn validate_reference(reference: &str) -> Result<(), PromptError> {
    if reference.is_empty() {
        return Err(PromptError::EmptyReference);
    }
    Ok(())
}

/// Validates the key of a prompt before it is written.
pub fn validate_key(reference: &str, versioning: &str) -> Result<(), PromptError> {
    validate_reference(reference)?;
    if versioning.is_empty() {
        return Err(PromptError::EmptyVersioning);
    }
    if versioning == RESERVED_VERSIONING {
        return Err(PromptError::ReservedVersioning(versioning.to_string()));
    }
    Ok(())
}

/// Sorts prompts ascending by their versioning token (plain string order).
pub fn sort_by_versioning(prompts: &mut [Prompt]) {
    prompts.sort_by(|a, b| a.versioning.cmp(&b.versioning));
}

/// Returns the prompt with the greatest versioning token.
pub fn latest_of(prompts: &[Prompt]) -> Option<&Prompt> {
    prompts.iter().max_by(|a, b| a.versioning.cmp(&b.versioning))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts(versions: &[&str]) -> Vec<Prompt> {
        versions
            .iter()
            .map(|v| Prompt::new("greeting", *v, format!("content {v}")))
            .collect()
    }

    #[test]
    fn test_validate_key_accepts_regular_tokens() {
        assert_eq!(validate_key("greeting", "0001"), Ok(()));
        assert_eq!(validate_key("team#greeting", "2024-05-01T10:00:00Z"), Ok(()));
    }

    #[test]
    fn test_validate_key_rejects_empty_parts() {
        assert_eq!(validate_key("", "1"), Err(PromptError::EmptyReference));
        assert_eq!(validate_key("greeting", ""), Err(PromptError::EmptyVersioning));
    }

    #[test]
    fn test_validate_key_rejects_reserved_token() {
        assert_eq!(
            validate_key("greeting", "versions"),
            Err(PromptError::ReservedVersioning("versions".to_string()))
        );
    }

    #[test]
    fn test_sort_by_versioning_is_lexicographic() {
        let mut list = prompts(&["2", "10", "1", "9"]);
        sort_by_versioning(&mut list);

        let order: Vec<&str> = list.iter().map(|p| p.versioning.as_str()).collect();
        assert_eq!(order, vec!["1", "10", "2", "9"]);
    }

    #[test]
    fn test_latest_of_uses_string_order() {
        let list = prompts(&["0009", "0010", "0002"]);
        assert_eq!(latest_of(&list).unwrap().versioning, "0010");

        // Unpadded numeric tokens compare as strings.
        let list = prompts(&["9", "10"]);
        assert_eq!(latest_of(&list).unwrap().versioning, "9");
    }

    #[test]
    fn test_latest_of_empty_is_none() {
        assert!(latest_of(&[]).is_none());
    }
}
