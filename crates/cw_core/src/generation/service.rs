use tracing::{info, warn};

use super::{ScenarioPrompt, TextGenerator};
use crate::config::CodeWindowConfig;
use crate::error::{CodeWindowError, Result};
use crate::layout::{build, Layout};
use crate::validator::validate;

/// Scenario text in, layout out: prompt, one generator call, validation, layout.
///
/// Holds no mutable state, so one service can serve concurrent callers.
pub struct CodeWindowService<G> {
    generator: G,
    config: CodeWindowConfig,
}

impl<G: TextGenerator> CodeWindowService<G> {
    pub fn new(generator: G, config: CodeWindowConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &CodeWindowConfig {
        &self.config
    }

    pub fn generate(&self, scenario: &str) -> Result<Layout> {
        let prompt = ScenarioPrompt::new(scenario)?;
        let surface = self.config.surface;
        let request = prompt.request(&self.config.generation, surface);

        let raw = self.generator.complete(&request).map_err(|e| {
            warn!(error = %e, "text generation failed");
            e
        })?;

        let events = validate(&raw).map_err(CodeWindowError::from)?;
        let layout = build(&events, surface);
        info!(events = layout.event_count(), "generated code window");
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenerationError, ValidationError};
    use crate::generation::{GenerationRequest, StaticGenerator};
    use crate::models::Category;
    use crate::surface::{Surface, ZoneId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingGenerator;

    impl TextGenerator for FailingGenerator {
        fn complete(&self, _request: &GenerationRequest) -> std::result::Result<String, GenerationError> {
            Err(GenerationError::Failed("quota exceeded".into()))
        }
    }

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl TextGenerator for CountingGenerator {
        fn complete(&self, request: &GenerationRequest) -> std::result::Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!(r#"{{"rows":[{{"name":"{}"}}]}}"#, request.user))
        }
    }

    #[test]
    fn test_generates_layout_for_configured_surface() {
        let payload = r#"{"rows":[{"name":"Left corner three"},{"name":"Turnover in paint"}]}"#;
        let service =
            CodeWindowService::new(StaticGenerator::new(payload), CodeWindowConfig::basketball());

        let layout = service.generate("Zone defence breakdowns").unwrap();
        assert_eq!(layout.surface(), Surface::Basketball);
        assert_eq!(layout.event_count(), 2);
        let turnovers = layout.get(Category::Turnovers).unwrap();
        assert_eq!(turnovers[0].zone, ZoneId::Paint);
    }

    #[test]
    fn test_blank_scenario_never_calls_generator() {
        let generator = CountingGenerator::default();
        let service = CodeWindowService::new(&generator, CodeWindowConfig::default());

        let err = service.generate("   ").unwrap_err();
        assert_eq!(err, CodeWindowError::Generation(GenerationError::EmptyPrompt));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);

        service.generate("High Press").unwrap();
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_generator_failure_is_surfaced_without_retry() {
        let service = CodeWindowService::new(FailingGenerator, CodeWindowConfig::default());
        let err = service.generate("Pressing triggers").unwrap_err();
        assert_eq!(err.code(), crate::error::error_codes::GENERATION_FAILED);
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let service =
            CodeWindowService::new(StaticGenerator::new("not json"), CodeWindowConfig::default());
        assert!(matches!(
            service.generate("Crosses"),
            Err(CodeWindowError::Validation(ValidationError::MalformedPayload(_)))
        ));

        let service =
            CodeWindowService::new(StaticGenerator::new(r#"{"rows":[]}"#), CodeWindowConfig::default());
        assert_eq!(
            service.generate("Crosses"),
            Err(CodeWindowError::Validation(ValidationError::EmptyResult))
        );
    }
}
