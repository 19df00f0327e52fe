use serde::{Deserialize, Serialize};

use super::types::Prompt;

/// Body of a `PUT`/`POST /prompt/{reference}/{versioning}` request.
///
/// Only `content` is required; unknown fields are ignored. The key comes
/// from the path, never from the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritePromptRequest {
    pub content: String,
}

impl WritePromptRequest {
    /// Decodes a request body. Fails unless the body is a JSON object with
    /// a string `content` field.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Converts the request into a prompt record stamped with the current time.
    pub fn into_prompt(
        self,
        reference: impl Into<String>,
        versioning: impl Into<String>,
    ) -> Prompt {
        Prompt::new(reference, versioning, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_content() {
        let request = WritePromptRequest::from_json(br#"{"content":"hello"}"#).unwrap();
        assert_eq!(request.content, "hello");
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let request =
            WritePromptRequest::from_json(br#"{"content":"hello","reference":"other"}"#).unwrap();
        assert_eq!(request.content, "hello");
    }

    #[test]
    fn test_rejects_missing_content() {
        assert!(WritePromptRequest::from_json(b"{}").is_err());
    }

    #[test]
    fn test_rejects_non_string_content() {
        assert!(WritePromptRequest::from_json(br#"{"content":42}"#).is_err());
        assert!(WritePromptRequest::from_json(br#"{"content":null}"#).is_err());
    }

    #[test]
    fn test_rejects_non_json_body() {
        assert!(WritePromptRequest::from_json(b"").is_err());
        assert!(WritePromptRequest::from_json(b"content=hello").is_err());
    }

    #[test]
    fn test_into_prompt_takes_key_from_arguments() {
        let prompt = WritePromptRequest {
            content: "hello".to_string(),
        }
        .into_prompt("greeting", "1");

        assert_eq!(prompt.reference, "greeting");
        assert_eq!(prompt.versioning, "1");
        assert_eq!(prompt.content, "hello");
    }
}
