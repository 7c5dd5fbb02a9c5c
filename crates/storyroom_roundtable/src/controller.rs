//! The two-round roundtable protocol.

use crate::{
    AgentInvoker, ChallengePolicy, RandomChallenge, RoundTwoBranch, StoryroomConfig,
    SynthesisRequest, SynthesisSchema, Synthesizer, augment_brief, build_user_message,
};
use futures::future::try_join_all;
use std::sync::Arc;
use storyroom_core::{
    AdvancedRoundtableInput, AgentDiscussion, AgentResponse, PersonaName, RoundtableInput,
    RoundtableResult, Shot,
};
use storyroom_error::{
    RoundtableError, RoundtableErrorKind, StoryroomError, StoryroomErrorKind, StoryroomResult,
};
use storyroom_interface::StoryroomDriver;
use tracing::{debug, error, info, instrument};

/// Orchestrates a roundtable: concurrent round one, sequential round two,
/// then synthesis.
///
/// A `Roundtable` holds no per-run state and can serve any number of runs,
/// concurrently or not.
///
/// # Example
///
/// ```no_run
/// use storyroom_core::{Platform, RoundtableInput};
/// use storyroom_models::build_driver;
/// use storyroom_roundtable::{Roundtable, StoryroomConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryroomConfig::load()?;
/// let driver = build_driver(&config.provider)?;
/// let roundtable = Roundtable::from_config(driver, &config)?;
///
/// let input = RoundtableInput::builder()
///     .brief("A person unwraps a gift at sunrise")
///     .platform(Platform::Tiktok)
///     .build()?;
/// let result = roundtable.run(&input).await?;
/// println!("{}", result.optimized_prompt);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Roundtable {
    invoker: AgentInvoker,
    synthesizer: Synthesizer,
    roster: Vec<PersonaName>,
    challenge: Arc<dyn ChallengePolicy>,
}

/// Synthesis-only extras carried by the advanced variant.
#[derive(Default)]
struct Extras<'a> {
    user_prompt_edits: Option<&'a str>,
    shot_list: Vec<Shot>,
}

impl Roundtable {
    /// Build a roundtable from validated configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configuration does not validate.
    pub fn from_config(
        driver: Arc<dyn StoryroomDriver>,
        config: &StoryroomConfig,
    ) -> StoryroomResult<Self> {
        let config = config.clone().validated()?;
        let invoker = AgentInvoker::new(driver.clone(), config.agent_options()?);
        let synthesizer = Synthesizer::new(
            driver,
            config.synthesis_options()?,
            config.synthesis.schema.schema(),
        );
        let challenge = RandomChallenge::new(config.roundtable.challenge_probability)?;

        Ok(Self {
            invoker,
            synthesizer,
            roster: config.roundtable.roster,
            challenge: Arc::new(challenge),
        })
    }

    /// Replace the challenge policy.
    pub fn with_challenge_policy(mut self, policy: impl ChallengePolicy + 'static) -> Self {
        self.challenge = Arc::new(policy);
        self
    }

    /// Replace the synthesis schema.
    pub fn with_schema(mut self, schema: Arc<dyn SynthesisSchema>) -> Self {
        self.synthesizer = self.synthesizer.with_schema(schema);
        self
    }

    /// Personas invited to round one.
    pub fn roster(&self) -> &[PersonaName] {
        &self.roster
    }

    /// Active synthesis schema.
    pub fn schema(&self) -> &dyn SynthesisSchema {
        self.synthesizer.schema()
    }

    /// Run the standard roundtable.
    ///
    /// # Errors
    ///
    /// Any persona call failure aborts the run. Unparseable synthesis
    /// output does not; check [`RoundtableResult::is_usable`].
    #[instrument(
        skip(self, input),
        fields(
            run_id = %uuid::Uuid::new_v4(),
            platform = %input.platform(),
            user_id = input.user_id().as_deref().unwrap_or("-")
        )
    )]
    pub async fn run(&self, input: &RoundtableInput) -> StoryroomResult<RoundtableResult> {
        self.execute(input, Extras::default()).await
    }

    /// Run the advanced roundtable: edits, shot list, and guidance are
    /// folded into the brief before round one, and edits and shots are
    /// handed to synthesis as well.
    ///
    /// # Errors
    ///
    /// Same as [`Roundtable::run`].
    #[instrument(
        skip(self, input),
        fields(
            run_id = %uuid::Uuid::new_v4(),
            platform = %input.input().platform(),
            shots = input.shot_list().as_ref().map_or(0, Vec::len)
        )
    )]
    pub async fn run_advanced(
        &self,
        input: &AdvancedRoundtableInput,
    ) -> StoryroomResult<RoundtableResult> {
        let augmented = input.input().with_brief(augment_brief(input));
        debug!(
            brief_chars = augmented.brief().chars().count(),
            "Brief augmented with edits, shots, and guidance"
        );
        let extras = Extras {
            user_prompt_edits: input.user_prompt_edits().as_deref(),
            shot_list: input.normalized_shots(),
        };
        self.execute(&augmented, extras).await
    }

    async fn execute(
        &self,
        input: &RoundtableInput,
        extras: Extras<'_>,
    ) -> StoryroomResult<RoundtableResult> {
        let round1 = self.round_one(input).await?;
        let round2 = self.round_two(input, &round1).await?;
        let discussion = AgentDiscussion { round1, round2 };

        let request = SynthesisRequest {
            brief: input.brief(),
            platform: *input.platform(),
            discussion: &discussion,
            sora_settings: input.context().sora_settings(),
            user_prompt_edits: extras.user_prompt_edits,
            shot_list: &extras.shot_list,
        };
        let result = match self.synthesizer.synthesize(&request).await? {
            Some(output) => output.into_result(discussion),
            None => RoundtableResult::degraded(discussion),
        };

        info!(
            usable = result.is_usable(),
            chars = result.character_count,
            "Roundtable complete"
        );
        Ok(result)
    }

    /// Every roster persona, concurrently. Completes only when all have
    /// answered; the first failure aborts the run.
    #[instrument(skip(self, input), fields(personas = self.roster.len()))]
    async fn round_one(&self, input: &RoundtableInput) -> StoryroomResult<Vec<AgentResponse>> {
        let user_message = build_user_message(input.brief(), *input.platform(), input.context());
        debug!(chars = user_message.chars().count(), "Round one context assembled");

        let calls = self.roster.iter().map(|&persona| {
            let user_message = &user_message;
            async move {
                self.invoker
                    .call_agent(persona, user_message)
                    .await
                    .map_err(|e| agent_failure(persona, 1, e))
            }
        });
        let responses = try_join_all(calls).await?;

        info!(responses = responses.len(), "Round one complete");
        Ok(responses)
    }

    /// Optional challenge and rebuttal, then the marketer's build. Each call
    /// sees every contribution made before it.
    #[instrument(skip(self, input, round1), fields(challenge = tracing::field::Empty))]
    async fn round_two(
        &self,
        input: &RoundtableInput,
        round1: &[AgentResponse],
    ) -> StoryroomResult<Vec<AgentResponse>> {
        let mut transcript = round1.to_vec();
        let mut round2 = Vec::with_capacity(3);
        let challenge = self.challenge.should_challenge();
        tracing::Span::current().record("challenge", challenge);

        let mut steps = Vec::with_capacity(3);
        if challenge {
            steps.push((
                PersonaName::PlatformExpert,
                RoundTwoBranch::Challenge {
                    target: PersonaName::Director,
                },
            ));
            steps.push((
                PersonaName::Director,
                RoundTwoBranch::Rebuttal {
                    challenger: PersonaName::PlatformExpert,
                },
            ));
        }
        steps.push((
            PersonaName::SocialMediaMarketer,
            RoundTwoBranch::BuildOn {
                sources: vec![PersonaName::Director, PersonaName::PlatformExpert],
            },
        ));

        for (persona, branch) in steps {
            let response = self
                .invoker
                .call_agent_with_context(
                    persona,
                    input.brief(),
                    *input.platform(),
                    &transcript,
                    &branch,
                )
                .await
                .map_err(|e| agent_failure(persona, 2, e))?;
            transcript.push(response.clone());
            round2.push(response);
        }

        info!(entries = round2.len(), challenge, "Round two complete");
        Ok(round2)
    }
}

/// Wrap a persona call failure with its persona and round. Configuration
/// failures (a missing credential) pass through unchanged.
fn agent_failure(persona: PersonaName, round: u8, err: StoryroomError) -> StoryroomError {
    error!(%persona, round, error = %err, "Persona call failed, aborting roundtable");
    if matches!(err.kind(), StoryroomErrorKind::Config(_)) {
        return err;
    }
    RoundtableError::new(RoundtableErrorKind::AgentCallFailed {
        persona: persona.to_string(),
        round,
        retryable: err.is_retryable(),
        message: err.to_string(),
    })
    .into()
}
