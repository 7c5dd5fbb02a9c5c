//! Roundtable transcript types.

use crate::PersonaName;
use serde::{Deserialize, Serialize};

/// One persona's contribution to the discussion.
///
/// # Examples
///
/// ```
/// use storyroom_core::{AgentResponse, PersonaName};
///
/// let challenge = AgentResponse::new(PersonaName::PlatformExpert, "Too slow for the feed.")
///     .challenging(PersonaName::Director);
///
/// assert!(challenge.is_challenge);
/// assert_eq!(challenge.responding_to, Some(PersonaName::Director));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    /// Persona that spoke
    pub agent: PersonaName,
    /// What they said
    pub response: String,
    /// Persona being answered, for challenges and rebuttals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responding_to: Option<PersonaName>,
    /// Whether this entry challenges another persona
    #[serde(default)]
    pub is_challenge: bool,
    /// Personas whose ideas this entry builds on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_on: Option<Vec<PersonaName>>,
}

impl AgentResponse {
    /// A plain contribution with no branch metadata.
    pub fn new(agent: PersonaName, response: impl Into<String>) -> Self {
        Self {
            agent,
            response: response.into(),
            responding_to: None,
            is_challenge: false,
            building_on: None,
        }
    }

    /// Mark this entry as a challenge to `target`.
    pub fn challenging(mut self, target: PersonaName) -> Self {
        self.responding_to = Some(target);
        self.is_challenge = true;
        self
    }

    /// Mark this entry as a reply to `challenger`.
    pub fn replying_to(mut self, challenger: PersonaName) -> Self {
        self.responding_to = Some(challenger);
        self.is_challenge = false;
        self
    }

    /// Mark this entry as building on `sources`.
    pub fn building_on(mut self, sources: Vec<PersonaName>) -> Self {
        self.building_on = Some(sources);
        self
    }
}

/// Full transcript of a roundtable run.
///
/// `round1` holds exactly one entry per invited persona. `round2` varies in
/// length from run to run; never assume its shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentDiscussion {
    /// Independent first-pass contributions
    pub round1: Vec<AgentResponse>,
    /// Sequential debate and build entries
    pub round2: Vec<AgentResponse>,
}

impl AgentDiscussion {
    /// Every entry, round one first, in transcript order.
    pub fn entries(&self) -> impl Iterator<Item = &AgentResponse> {
        self.round1.iter().chain(self.round2.iter())
    }

    /// Total number of entries across both rounds.
    pub fn len(&self) -> usize {
        self.round1.len() + self.round2.len()
    }

    /// True when neither round has any entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenged() -> AgentDiscussion {
        AgentDiscussion {
            round1: vec![
                AgentResponse::new(PersonaName::Director, "Open on the ribbon."),
                AgentResponse::new(PersonaName::PlatformExpert, "Hook in one second."),
            ],
            round2: vec![
                AgentResponse::new(PersonaName::PlatformExpert, "The ribbon is too slow.")
                    .challenging(PersonaName::Director),
                AgentResponse::new(PersonaName::Director, "Then cut to the reveal.")
                    .replying_to(PersonaName::PlatformExpert),
            ],
        }
    }

    #[test]
    fn test_entries_run_round_one_then_round_two() {
        let discussion = challenged();
        let speakers: Vec<_> = discussion.entries().map(|entry| entry.agent).collect();
        assert_eq!(
            speakers,
            vec![
                PersonaName::Director,
                PersonaName::PlatformExpert,
                PersonaName::PlatformExpert,
                PersonaName::Director,
            ]
        );
        assert_eq!(discussion.len(), 4);
        assert!(AgentDiscussion::default().is_empty());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(challenged()).unwrap();
        let challenge = &json["round2"][0];
        assert_eq!(challenge["agent"], "platform_expert");
        assert_eq!(challenge["respondingTo"], "director");
        assert_eq!(challenge["isChallenge"], true);
        assert!(challenge.get("buildingOn").is_none());
    }
}
