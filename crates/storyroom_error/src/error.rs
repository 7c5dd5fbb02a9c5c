//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, HttpError, JsonError, ModelsError, RoundtableError};

/// Every error family the workspace can surface.
///
/// # Examples
///
/// ```
/// use storyroom_error::{StoryroomError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StoryroomError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryroomErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Roundtable orchestration error
    #[from(RoundtableError)]
    Roundtable(RoundtableError),
}

/// Storyroom error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyroom_error::{StoryroomErrorKind, StoryroomResult, ConfigError};
///
/// fn might_fail() -> StoryroomResult<()> {
///     Err(ConfigError::missing_credential("OPENAI_API_KEY"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), StoryroomErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyroom Error: {}", _0)]
pub struct StoryroomError(Box<StoryroomErrorKind>);

impl StoryroomError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryroomErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryroomErrorKind {
        &self.0
    }

    /// Whether the failure is transient and the call could be retried.
    pub fn is_retryable(&self) -> bool {
        use crate::RetryableError;
        match self.kind() {
            StoryroomErrorKind::Http(e) => e.is_transient(),
            StoryroomErrorKind::Models(e) => e.is_retryable(),
            StoryroomErrorKind::Roundtable(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl<T> From<T> for StoryroomError
where
    T: Into<StoryroomErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyroom operations.
pub type StoryroomResult<T> = std::result::Result<T, StoryroomError>;
