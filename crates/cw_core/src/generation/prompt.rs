use super::GenerationRequest;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::surface::Surface;

/// Instructions sent with every scenario. The reply must be the rows object the validator accepts.
pub const SYSTEM_PROMPT: &str = r#"You are a performance-analysis coding expert who designs code windows for tagging match video.
Always respond with a single valid JSON object and nothing else, in this format:
{
  "rows": [
    {
      "name": "High Press Trigger",
      "labels": ["Left Zone", "Pass Forced", "Interception"],
      "colour": "Red"
    },
    {
      "name": "Cutback Opportunity",
      "labels": ["Zone 14", "Player", "Assist Type"],
      "colour": "Yellow"
    }
  ]
}"#;

/// A non-blank tactical scenario described by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPrompt {
    text: String,
}

impl ScenarioPrompt {
    pub fn new(text: &str) -> Result<Self, GenerationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        Ok(Self { text: text.to_string() })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn request(&self, config: &GenerationConfig, surface: Surface) -> GenerationRequest {
        GenerationRequest {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system: format!("{SYSTEM_PROMPT}\nThe scenario is for {}.", surface.sport_name()),
            user: self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_scenario_rejected() {
        assert_eq!(ScenarioPrompt::new(""), Err(GenerationError::EmptyPrompt));
        assert_eq!(ScenarioPrompt::new(" \n\t"), Err(GenerationError::EmptyPrompt));
    }

    #[test]
    fn test_request_carries_config_and_sport() {
        let prompt = ScenarioPrompt::new("  Counter-press after losing the ball wide ").unwrap();
        let config = GenerationConfig { temperature: 0.2, ..GenerationConfig::default() };
        let request = prompt.request(&config, Surface::Basketball);

        assert_eq!(request.user, "Counter-press after losing the ball wide");
        assert_eq!(request.temperature, 0.2);
        assert!(request.system.starts_with(SYSTEM_PROMPT));
        assert!(request.system.ends_with("The scenario is for basketball."));
    }

    #[test]
    fn test_system_prompt_example_is_valid_payload() {
        let start = SYSTEM_PROMPT.find('{').unwrap();
        let events = crate::validator::validate(&SYSTEM_PROMPT[start..]).unwrap();
        assert_eq!(events.len(), 2);
    }
}
