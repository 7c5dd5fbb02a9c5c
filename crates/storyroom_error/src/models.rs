//! Model provider errors.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Provider answered with a non-2xx status
    #[display("{} API error {}: {}", provider, status, message)]
    Api {
        /// Provider name (e.g., "openai")
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },

    /// Request could not be sent or the response could not be read
    #[display("{} request failed: {}", provider, message)]
    Http {
        /// Provider name
        provider: &'static str,
        /// Transport error message
        message: String,
    },

    /// Response body did not match the provider's documented shape
    #[display("Failed to parse {} response: {}", provider, message)]
    Parse {
        /// Provider name
        provider: &'static str,
        /// Parse error message
        message: String,
    },

    /// Response parsed but carried no completion choices or content blocks
    #[display("{} returned no completion content", _0)]
    EmptyResponse(&'static str),

    /// Request could not be converted into the provider's wire format
    #[display("Request conversion error: {}", _0)]
    Conversion(String),
}

impl ModelsErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModelsErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ModelsErrorKind::Http { .. } => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_delay_secs)`.
    pub fn backoff_params(&self) -> (u64, u64) {
        match self {
            ModelsErrorKind::Api { status, .. } => match *status {
                429 => (5000, 40),
                503 => (2000, 60),
                500 | 502 | 504 => (1000, 8),
                _ => (2000, 30),
            },
            _ => (1000, 10),
        }
    }
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use storyroom_error::{ModelsError, ModelsErrorKind, RetryableError};
///
/// let err = ModelsError::new(ModelsErrorKind::Api {
///     provider: "openai",
///     status: 429,
///     message: "rate limited".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = ModelsError::new(ModelsErrorKind::EmptyResponse("openai"));
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// Transient errors like 503 (service unavailable), 429 (rate limit),
/// or dropped connections return true. Permanent errors like 401
/// (unauthorized) or 400 (bad request) return false.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Returns `(initial_backoff_ms, max_delay_secs)` for this error.
    fn backoff_params(&self) -> (u64, u64) {
        (1000, 10)
    }
}

impl RetryableError for ModelsError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn backoff_params(&self) -> (u64, u64) {
        self.kind.backoff_params()
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
