//! Builder-related errors.

/// Specific builder error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A derive_builder build call failed (usually an uninitialized field)
    #[display("Failed to build {}: {}", target, reason)]
    Incomplete {
        /// Type being built
        target: &'static str,
        /// Message reported by the builder
        reason: String,
    },

    /// A built value failed validation
    #[display("Invalid {}: {}", target, reason)]
    Invalid {
        /// Type being built
        target: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Builder error with location tracking.
///
/// # Examples
///
/// ```
/// use storyroom_error::{BuilderError, BuilderErrorKind};
///
/// let err = BuilderError::incomplete("GenerateRequest", "`messages` must be initialized");
/// assert!(matches!(err.kind(), BuilderErrorKind::Incomplete { .. }));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", kind, line, file)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a failed derive_builder `build()` call.
    #[track_caller]
    pub fn incomplete(target: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::new(BuilderErrorKind::Incomplete {
            target,
            reason: reason.to_string(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}
