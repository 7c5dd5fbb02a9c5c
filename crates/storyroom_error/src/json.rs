//! JSON error types.

/// JSON serialization/deserialization error with source location.
///
/// `context` names what was being encoded or decoded, e.g.
/// `"openai response"` or `"series context"`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error ({}): {} at line {} in {}", context, message, line, file)]
pub struct JsonError {
    /// What was being (de)serialized
    pub context: String,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError for the given context.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyroom_error::JsonError;
    ///
    /// let err = JsonError::new("series context", "expected `,` at line 3");
    /// assert_eq!(err.context, "series context");
    /// ```
    #[track_caller]
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            context: context.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Wrap a `serde_json` error.
    #[track_caller]
    pub fn from_serde(context: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::new(context, err.to_string())
    }
}
