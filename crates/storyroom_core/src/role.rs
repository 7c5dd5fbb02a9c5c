//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn.
///
/// # Examples
///
/// ```
/// use storyroom_core::Role;
///
/// assert_ne!(Role::User, Role::Assistant);
/// assert_eq!(Role::System.as_str(), "system");
/// assert_eq!(format!("{}", Role::Assistant), "assistant");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (persona contracts, output contracts)
    #[display("system")]
    System,
    /// Turns written by the orchestrator on the user's behalf
    #[display("user")]
    User,
    /// Turns produced by a model
    #[display("assistant")]
    Assistant,
}

impl Role {
    /// Wire name used by chat-completion style APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
