//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text turn in a conversation.
///
/// # Examples
///
/// ```
/// use storyroom_core::{Message, Role};
///
/// let message = Message::user("Pitch me a sunrise shot");
///
/// assert_eq!(message.role, Role::User);
/// assert!(message.content.contains("sunrise"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Text content of the turn
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
