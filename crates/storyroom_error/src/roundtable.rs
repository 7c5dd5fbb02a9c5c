//! Roundtable orchestration error types.

/// Specific error conditions for roundtable runs.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum RoundtableErrorKind {
    /// A persona call failed; the whole roundtable is aborted
    #[display("Round {} call for '{}' failed: {}", round, persona, message)]
    AgentCallFailed {
        /// Persona whose call failed
        persona: String,
        /// Round number (1 or 2)
        round: u8,
        /// Underlying failure
        message: String,
        /// Whether the underlying failure was transient
        retryable: bool,
    },
    /// The synthesis model call itself failed (transport, not parsing)
    #[display("Synthesis call failed: {}", _0)]
    SynthesisCallFailed(String),
    /// A persona required by the round-2 protocol is not on the roster
    #[display("Roster is missing required persona '{}'", _0)]
    MissingPersona(String),
    /// The roster has no personas at all
    #[display("Roster cannot be empty")]
    EmptyRoster,
    /// Challenge probability outside [0, 1]
    #[display("Challenge probability must be within [0, 1], got {}", _0)]
    InvalidProbability(f64),
}

/// Error type for roundtable operations.
///
/// # Examples
///
/// ```
/// use storyroom_error::{RoundtableError, RoundtableErrorKind};
///
/// let err = RoundtableError::new(RoundtableErrorKind::MissingPersona("director".into()));
/// assert!(format!("{}", err).contains("director"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Roundtable Error: {} at line {} in {}", kind, line, file)]
pub struct RoundtableError {
    /// The specific error condition
    pub kind: RoundtableErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RoundtableError {
    /// Create a new RoundtableError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RoundtableErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether retrying the whole run could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            RoundtableErrorKind::AgentCallFailed {
                retryable: true,
                ..
            }
        )
    }
}
