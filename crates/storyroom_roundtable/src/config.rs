//! Configuration loading and the model routing policy.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from storyroom.toml)
//! - User overrides (~/.config/storyroom/storyroom.toml, then ./storyroom.toml)
//! - Automatic merging with user values taking precedence

use crate::SchemaKind;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyroom_core::{CompletionOptions, PersonaName};
use storyroom_error::{
    BuilderError, ConfigError, RoundtableError, RoundtableErrorKind, StoryroomError,
    StoryroomResult,
};
use storyroom_models::ProviderSettings;
use tracing::{debug, instrument};

/// Abstract role a model call plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelRole {
    /// Persona calls in rounds one and two
    Agent,
    /// The single synthesis call
    Synthesis,
}

/// Maps abstract roles to concrete model identifiers.
///
/// Unset entries resolve to the provider's model (see
/// [`StoryroomConfig::model_for`]).
///
/// # Example
///
/// ```toml
/// [routing]
/// agent = "gpt-4o-mini"
/// synthesis = "gpt-4o"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelRouting {
    /// Model for persona calls
    pub agent: Option<String>,
    /// Model for synthesis
    pub synthesis: Option<String>,
}

impl ModelRouting {
    /// Explicit model override for `role`, if any.
    pub fn model_for(&self, role: ModelRole) -> Option<&str> {
        match role {
            ModelRole::Agent => self.agent.as_deref(),
            ModelRole::Synthesis => self.synthesis.as_deref(),
        }
    }
}

/// Sampling parameters for persona calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Output token cap
    pub max_tokens: u32,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_tokens: 600,
        }
    }
}

/// Sampling parameters and output schema for synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Output token cap
    pub max_tokens: u32,
    /// Output schema
    pub schema: SchemaKind,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2500,
            schema: SchemaKind::default(),
        }
    }
}

/// Protocol parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundtableSettings {
    /// Probability that round two opens with a challenge
    pub challenge_probability: f64,
    /// Personas invited to round one
    pub roster: Vec<PersonaName>,
}

impl Default for RoundtableSettings {
    fn default() -> Self {
        Self {
            challenge_probability: 0.3,
            roster: PersonaName::ROUND_ONE.to_vec(),
        }
    }
}

impl RoundtableSettings {
    /// Check the probability and roster, dropping duplicate roster entries
    /// (first occurrence wins).
    ///
    /// # Errors
    ///
    /// Fails when the probability is outside `[0, 1]`, the roster is empty,
    /// or a persona the round-two protocol addresses is missing.
    pub fn validated(mut self) -> Result<Self, RoundtableError> {
        if !(0.0..=1.0).contains(&self.challenge_probability) {
            return Err(RoundtableError::new(RoundtableErrorKind::InvalidProbability(
                self.challenge_probability,
            )));
        }

        let mut seen = Vec::with_capacity(self.roster.len());
        self.roster.retain(|persona| {
            if seen.contains(persona) {
                false
            } else {
                seen.push(*persona);
                true
            }
        });

        if self.roster.is_empty() {
            return Err(RoundtableError::new(RoundtableErrorKind::EmptyRoster));
        }
        if let Some(missing) = PersonaName::ROUND_TWO_REQUIRED
            .iter()
            .find(|required| !self.roster.contains(required))
        {
            return Err(RoundtableError::new(RoundtableErrorKind::MissingPersona(
                missing.to_string(),
            )));
        }
        Ok(self)
    }
}

/// Top-level Storyroom configuration.
///
/// # Example
///
/// ```no_run
/// use storyroom_roundtable::{ModelRole, StoryroomConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryroomConfig::load()?;
/// println!("synthesis model: {}", config.model_for(ModelRole::Synthesis));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryroomConfig {
    /// Role to model mapping
    pub routing: ModelRouting,
    /// Persona call sampling
    pub agent: AgentSettings,
    /// Synthesis sampling and schema
    pub synthesis: SynthesisSettings,
    /// Protocol parameters
    pub roundtable: RoundtableSettings,
    /// Provider selection
    pub provider: ProviderSettings,
}

impl StoryroomConfig {
    /// Load configuration from a specific file path, layered over the
    /// bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryroomResult<Self> {
        debug!("Loading configuration from file");
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or validated.
    #[instrument]
    pub fn load() -> StoryroomResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyroom/storyroom.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyroom").required(false));
        Self::finish(builder)
    }

    /// Parse a TOML string layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml_str(toml: &str) -> StoryroomResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryroomResult<Self> {
        let loaded: Self = builder
            .build()
            .map_err(|e| {
                StoryroomError::from(ConfigError::new(format!(
                    "Failed to read configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryroomError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        loaded.validated()
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// See [`RoundtableSettings::validated`].
    pub fn validated(mut self) -> StoryroomResult<Self> {
        self.roundtable = self.roundtable.validated()?;
        debug!(
            roster = self.roundtable.roster.len(),
            schema = %self.synthesis.schema,
            "Configuration validated"
        );
        Ok(self)
    }

    /// Model used for `role`: the routing override, else the provider's model.
    pub fn model_for(&self, role: ModelRole) -> &str {
        self.routing
            .model_for(role)
            .unwrap_or_else(|| self.provider.model())
    }

    /// Completion options for persona calls.
    pub fn agent_options(&self) -> StoryroomResult<CompletionOptions> {
        CompletionOptions::builder()
            .model(self.model_for(ModelRole::Agent))
            .temperature(self.agent.temperature)
            .max_tokens(self.agent.max_tokens)
            .build()
            .map_err(|e| BuilderError::incomplete("CompletionOptions", e).into())
    }

    /// Completion options for the synthesis call. Always structured.
    pub fn synthesis_options(&self) -> StoryroomResult<CompletionOptions> {
        CompletionOptions::builder()
            .model(self.model_for(ModelRole::Synthesis))
            .temperature(self.synthesis.temperature)
            .max_tokens(self.synthesis.max_tokens)
            .structured_output(true)
            .build()
            .map_err(|e| BuilderError::incomplete("CompletionOptions", e).into())
    }
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storyroom.toml");
