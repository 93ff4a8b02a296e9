use thiserror::Error;

/// Stable error codes surfaced through the JSON API and CLI.
pub mod error_codes {
    pub const MALFORMED_PAYLOAD: &str = "MALFORMED_PAYLOAD";
    pub const EMPTY_RESULT: &str = "EMPTY_RESULT";
    pub const EMPTY_PROMPT: &str = "EMPTY_PROMPT";
    pub const GENERATION_FAILED: &str = "GENERATION_FAILED";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Failure to turn a generated payload into events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Payload contained no events")]
    EmptyResult,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedPayload(_) => error_codes::MALFORMED_PAYLOAD,
            ValidationError::EmptyResult => error_codes::EMPTY_RESULT,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MalformedPayload(_) => {
                "Could not interpret the generated response. Please try again."
            }
            ValidationError::EmptyResult => "No events found in the generated output.",
        }
    }
}

/// Failure of the external text-generation collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Scenario prompt is empty")]
    EmptyPrompt,

    #[error("Generation failed: {0}")]
    Failed(String),
}

impl GenerationError {
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::EmptyPrompt => error_codes::EMPTY_PROMPT,
            GenerationError::Failed(_) => error_codes::GENERATION_FAILED,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::EmptyPrompt => "Please enter a tactical scenario.",
            GenerationError::Failed(_) => "Generation failed.",
        }
    }
}

/// Anything that can stop a scenario from becoming a layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeWindowError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CodeWindowError {
    pub fn code(&self) -> &'static str {
        match self {
            CodeWindowError::Generation(e) => e.code(),
            CodeWindowError::Validation(e) => e.code(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            CodeWindowError::Generation(e) => e.user_message(),
            CodeWindowError::Validation(e) => e.user_message(),
        }
    }

    /// Blank prompts can be fixed by the user; everything else needs a new generation.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, CodeWindowError::Generation(GenerationError::EmptyPrompt))
    }
}

pub type Result<T> = std::result::Result<T, CodeWindowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_per_kind() {
        let malformed = CodeWindowError::from(ValidationError::MalformedPayload("x".into()));
        let empty = CodeWindowError::from(ValidationError::EmptyResult);
        let failed = CodeWindowError::from(GenerationError::Failed("quota".into()));

        assert_eq!(malformed.code(), error_codes::MALFORMED_PAYLOAD);
        assert_eq!(empty.code(), error_codes::EMPTY_RESULT);
        assert_eq!(failed.code(), error_codes::GENERATION_FAILED);
        assert_ne!(malformed.user_message(), empty.user_message());
    }

    #[test]
    fn test_transparent_display() {
        let err = CodeWindowError::from(GenerationError::Failed("timeout".into()));
        assert_eq!(err.to_string(), "Generation failed: timeout");
    }

    #[test]
    fn test_only_empty_prompt_is_user_correctable() {
        assert!(CodeWindowError::from(GenerationError::EmptyPrompt).is_user_correctable());
        assert!(!CodeWindowError::from(ValidationError::EmptyResult).is_user_correctable());
    }
}
