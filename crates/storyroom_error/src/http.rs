//! HTTP transport error types.

/// Transport-level failure talking to a completion provider.
///
/// Carries the HTTP status when the provider answered with a non-2xx
/// response, and `None` when the request never produced a response
/// (DNS, TLS, connection reset, timeout).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} (status {:?}) at line {} in {}", message, status, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// HTTP status code, if a response was received
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a transport error with no response status.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyroom_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert!(err.status.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an error for a non-2xx provider response.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyroom_error::HttpError;
    ///
    /// let err = HttpError::with_status(503, "overloaded");
    /// assert_eq!(err.status, Some(503));
    /// assert!(err.is_transient());
    /// ```
    #[track_caller]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self.status {
            None => true,
            Some(code) => matches!(code, 408 | 429 | 500 | 502 | 503 | 504),
        }
    }
}
