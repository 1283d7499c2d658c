use serde::{Deserialize, Serialize};

/// Models the chat is known to work against; callers may pass any slug.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Nucleus sampling value used by the preset levels.
const PRESET_TOP_P: f64 = 0.8;

/// Defaults for the free-form (slider) configuration path.
const CUSTOM_TEMPERATURE: f64 = 0.4;
const CUSTOM_TOP_P: f64 = 0.9;
const CUSTOM_MAX_OUTPUT_TOKENS: u32 = 600;

/// Coarse verbosity/audience preset. Each level is a fixed
/// `(temperature, maxOutputTokens, style directive)` triple; the values are
/// load-bearing for compatibility and covered by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationLevel {
    Brief,
    Standard,
    Detailed,
}

impl ExplanationLevel {
    pub fn temperature(self) -> f64 {
        match self {
            Self::Brief => 0.2,
            Self::Standard => 0.5,
            Self::Detailed => 0.7,
        }
    }

    pub fn max_output_tokens(self) -> u32 {
        match self {
            Self::Brief => 300,
            Self::Standard => 512,
            Self::Detailed => 1024,
        }
    }

    /// Natural-language instruction interpolated into the system directive.
    pub fn style_directive(self) -> &'static str {
        match self {
            Self::Brief => {
                "Keep the answer short and in plain language, using analogies \
                 and bullet points. Annotate any technical term you must use."
            }
            Self::Standard => {
                "Write a readable answer that defines the key concepts and \
                 illustrates them with practical examples and simple text diagrams."
            }
            Self::Detailed => {
                "Technical vocabulary is fine. Cover the theory's background, \
                 its main proponents, criticisms, and practical applications in depth."
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Standard => "standard",
            Self::Detailed => "detailed",
        }
    }
}

/// Sampling parameters plus model selection for one request.
///
/// Rebuilt from UI state on every request and never persisted. Two
/// construction paths exist: [`GenerationConfig::for_level`] (the preset
/// table) and [`GenerationConfig::custom`] (free sliders), matching the two
/// surrounding chat variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    model_name: String,
    temperature: f64,
    top_p: f64,
    max_output_tokens: u32,
    style_directive: String,
}

impl GenerationConfig {
    pub fn for_level(model_name: impl Into<String>, level: ExplanationLevel) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: level.temperature(),
            top_p: PRESET_TOP_P,
            max_output_tokens: level.max_output_tokens(),
            style_directive: level.style_directive().to_string(),
        }
    }

    pub fn custom(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: CUSTOM_TEMPERATURE,
            top_p: CUSTOM_TOP_P,
            max_output_tokens: CUSTOM_MAX_OUTPUT_TOKENS,
            style_directive: ExplanationLevel::Standard.style_directive().to_string(),
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        // The provider rejects 0; keep the request well-formed.
        self.max_output_tokens = max_output_tokens.max(1);
        self
    }

    pub fn with_style_directive(mut self, directive: impl Into<String>) -> Self {
        self.style_directive = directive.into();
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    pub fn style_directive(&self) -> &str {
        &self.style_directive
    }
}

/// Free-form formatting toggles rendered into one trailing hint message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StyleHints {
    pub bullet_points: bool,
    pub worked_examples: bool,
    pub plain_language: bool,
}

impl StyleHints {
    /// Render the active toggles into a single hint, or `None` when every
    /// toggle is off so no extra message is emitted.
    pub fn render(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.bullet_points {
            parts.push("structure the answer with bullet points");
        }
        if self.worked_examples {
            parts.push("include at least one worked example");
        }
        if self.plain_language {
            parts.push("avoid jargon and prefer plain language");
        }

        if parts.is_empty() {
            None
        } else {
            Some(format!("Formatting preferences: {}.", parts.join("; ")))
        }
    }

    pub fn any(&self) -> bool {
        self.bullet_points || self.worked_examples || self.plain_language
    }
}

/// Everything the assembler needs besides the conversation itself.
/// Rebuilt from widget state before each request.
#[derive(Debug, Clone)]
pub struct ChatProfile {
    pub config: GenerationConfig,
    pub system_directive: Option<String>,
    pub style_hints: StyleHints,
}

impl ChatProfile {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            system_directive: None,
            style_hints: StyleHints::default(),
        }
    }

    pub fn with_system_directive(mut self, directive: impl Into<String>) -> Self {
        self.system_directive = Some(directive.into());
        self
    }

    pub fn with_style_hints(mut self, hints: StyleHints) -> Self {
        self.style_hints = hints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_level_resolves_to_exact_constants() {
        let config = GenerationConfig::for_level(DEFAULT_MODEL, ExplanationLevel::Brief);
        assert_eq!(config.temperature(), 0.2);
        assert_eq!(config.max_output_tokens(), 300);
    }

    #[test]
    fn level_table_is_fixed() {
        assert_eq!(ExplanationLevel::Standard.temperature(), 0.5);
        assert_eq!(ExplanationLevel::Standard.max_output_tokens(), 512);
        assert_eq!(ExplanationLevel::Detailed.temperature(), 0.7);
        assert_eq!(ExplanationLevel::Detailed.max_output_tokens(), 1024);
    }

    #[test]
    fn custom_config_uses_slider_defaults() {
        let config = GenerationConfig::custom("gemini-2.5-pro");
        assert_eq!(config.temperature(), 0.4);
        assert_eq!(config.top_p(), 0.9);
        assert_eq!(config.max_output_tokens(), 600);
    }

    #[test]
    fn builders_clamp_out_of_range_values() {
        let config = GenerationConfig::custom(DEFAULT_MODEL)
            .with_temperature(3.0)
            .with_top_p(-1.0)
            .with_max_output_tokens(0);
        assert_eq!(config.temperature(), 1.0);
        assert_eq!(config.top_p(), 0.0);
        assert_eq!(config.max_output_tokens(), 1);
    }

    #[test]
    fn style_hints_render_nothing_when_all_off() {
        assert!(StyleHints::default().render().is_none());
    }

    #[test]
    fn style_hints_render_joins_active_toggles() {
        let hints = StyleHints {
            bullet_points: true,
            worked_examples: false,
            plain_language: true,
        };
        let rendered = hints.render().expect("hint text");
        assert!(rendered.contains("bullet points"));
        assert!(rendered.contains("plain language"));
        assert!(!rendered.contains("worked example"));
    }
}
