//! Single persona calls.

use crate::persona;
use std::sync::Arc;
use storyroom_core::{AgentResponse, CompletionOptions, Message, PersonaName, Platform};
use storyroom_error::StoryroomResult;
use storyroom_interface::StoryroomDriver;
use tracing::{debug, instrument};

/// Which round-two move a persona is being asked to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundTwoBranch {
    /// Disagree with `target`'s contribution
    Challenge {
        /// Persona being challenged
        target: PersonaName,
    },
    /// Answer `challenger`'s challenge
    Rebuttal {
        /// Persona who challenged
        challenger: PersonaName,
    },
    /// Combine the contributions of `sources`
    BuildOn {
        /// Personas being built on
        sources: Vec<PersonaName>,
    },
}

impl RoundTwoBranch {
    /// The instruction sentence appended to the conversation.
    pub fn instruction(&self, platform: Platform) -> String {
        match self {
            RoundTwoBranch::Challenge { target } => format!(
                "You disagree with the {}'s approach. Challenge it constructively: name what \
will not work on {} and propose a concrete alternative.",
                persona(*target).display_name(),
                platform.display_name()
            ),
            RoundTwoBranch::Rebuttal { challenger } => format!(
                "The {} has challenged your approach. Respond to that challenge directly: \
concede what is valid, defend what matters, and state your refined plan.",
                persona(*challenger).display_name()
            ),
            RoundTwoBranch::BuildOn { sources } => {
                let names = sources
                    .iter()
                    .map(|source| format!("the {}", persona(*source).display_name()))
                    .collect::<Vec<_>>()
                    .join(" and ");
                format!(
                    "Build upon the ideas from {}. Combine their strongest points into a hook \
and shareable moments for {}.",
                    names,
                    platform.display_name()
                )
            }
        }
    }

    /// Attach this branch's metadata to a response.
    pub fn annotate(&self, response: AgentResponse) -> AgentResponse {
        match self {
            RoundTwoBranch::Challenge { target } => response.challenging(*target),
            RoundTwoBranch::Rebuttal { challenger } => response.replying_to(*challenger),
            RoundTwoBranch::BuildOn { sources } => response.building_on(sources.clone()),
        }
    }
}

/// Makes one model call on behalf of one persona.
///
/// Failures propagate untouched; nothing here retries.
#[derive(Clone)]
pub struct AgentInvoker {
    driver: Arc<dyn StoryroomDriver>,
    options: CompletionOptions,
}

impl AgentInvoker {
    /// Invoker using `driver` with fixed sampling `options`.
    pub fn new(driver: Arc<dyn StoryroomDriver>, options: CompletionOptions) -> Self {
        Self { driver, options }
    }

    /// Round-one call: the persona's system prompt plus the assembled
    /// user message.
    #[instrument(skip(self, user_message), fields(persona = %name, round = 1))]
    pub async fn call_agent(
        &self,
        name: PersonaName,
        user_message: &str,
    ) -> StoryroomResult<AgentResponse> {
        let system = persona(name).system_prompt();
        let messages = [Message::user(user_message)];
        debug!(prompt_chars = user_message.chars().count(), "Calling persona");

        let text = self.driver.complete(&system, &messages, &self.options).await?;
        Ok(AgentResponse::new(name, text.trim()))
    }

    /// Round-two call: the brief, every prior contribution labelled by
    /// persona, and the branch instruction.
    #[instrument(
        skip(self, brief, prior, branch),
        fields(persona = %name, round = 2, prior = prior.len())
    )]
    pub async fn call_agent_with_context(
        &self,
        name: PersonaName,
        brief: &str,
        platform: Platform,
        prior: &[AgentResponse],
        branch: &RoundTwoBranch,
    ) -> StoryroomResult<AgentResponse> {
        let system = persona(name).system_prompt();
        let messages = [
            Message::user(format!(
                "CREATIVE BRIEF:\n{}\n\nTARGET PLATFORM: {}",
                brief.trim(),
                platform.summary()
            )),
            Message::user(format!(
                "DISCUSSION SO FAR:\n\n{}\n\nYOUR TASK:\n{}",
                render_transcript(prior),
                branch.instruction(platform)
            )),
        ];
        debug!(?branch, "Calling persona with discussion context");

        let text = self.driver.complete(&system, &messages, &self.options).await?;
        Ok(branch.annotate(AgentResponse::new(name, text.trim())))
    }
}

/// Render contributions as `[Display Name]: text` blocks.
pub(crate) fn render_transcript(entries: &[AgentResponse]) -> String {
    entries
        .iter()
        .map(|entry| {
            let speaker = persona(entry.agent).display_name();
            match entry.responding_to {
                Some(other) if entry.is_challenge => format!(
                    "[{}, challenging the {}]: {}",
                    speaker,
                    persona(other).display_name(),
                    entry.response
                ),
                Some(other) => format!(
                    "[{}, responding to the {}]: {}",
                    speaker,
                    persona(other).display_name(),
                    entry.response
                ),
                None => format!("[{}]: {}", speaker, entry.response),
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
