//! Configuration error types.

/// Configuration error with source location.
///
/// Raised when configuration files fail to load or parse, and when a
/// provider credential is missing at call time.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Configuration key or environment variable involved, if known
    pub key: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyroom_error::ConfigError;
    ///
    /// let err = ConfigError::new("roster must not be empty");
    /// assert!(err.message.contains("roster"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            key: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error for a provider credential that is not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyroom_error::ConfigError;
    ///
    /// let err = ConfigError::missing_credential("OPENAI_API_KEY");
    /// assert_eq!(err.key.as_deref(), Some("OPENAI_API_KEY"));
    /// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
    /// ```
    #[track_caller]
    pub fn missing_credential(env_var: impl Into<String>) -> Self {
        let env_var = env_var.into();
        let location = std::panic::Location::caller();
        Self {
            message: format!("{} environment variable not set", env_var),
            key: Some(env_var),
            line: location.line(),
            file: location.file(),
        }
    }
}
