//! The synthesis step: one structured model call that turns the transcript
//! into the final artifact.

mod parse;
mod prompt;
mod schema;

pub use parse::{SynthesisOutput, normalize_hashtags, normalize_shots, parse_synthesis};
pub use prompt::{SynthesisRequest, build_synthesis_prompt};
pub use schema::{
    CinematicNarrative, PlatformTuned, ProductionDocument, SchemaKind, SynthesisSchema,
};

use std::sync::Arc;
use storyroom_core::{AgentDiscussion, CompletionOptions, Message, RoundtableResult};
use storyroom_error::{RoundtableError, RoundtableErrorKind, StoryroomResult};
use storyroom_interface::StoryroomDriver;
use tracing::{debug, error, info, instrument, warn};

/// Runs the synthesis call.
///
/// A failed call is fatal. A response that cannot be parsed yields `None`,
/// which the caller turns into [`RoundtableResult::degraded`].
#[derive(Clone)]
pub struct Synthesizer {
    driver: Arc<dyn StoryroomDriver>,
    options: CompletionOptions,
    schema: Arc<dyn SynthesisSchema>,
}

impl Synthesizer {
    /// Synthesizer using `driver`, `options`, and `schema`.
    pub fn new(
        driver: Arc<dyn StoryroomDriver>,
        options: CompletionOptions,
        schema: Arc<dyn SynthesisSchema>,
    ) -> Self {
        Self {
            driver,
            options,
            schema,
        }
    }

    /// Same driver and options with a different schema.
    pub fn with_schema(self, schema: Arc<dyn SynthesisSchema>) -> Self {
        Self { schema, ..self }
    }

    /// Active schema.
    pub fn schema(&self) -> &dyn SynthesisSchema {
        self.schema.as_ref()
    }

    /// Synthesize the transcript in `request`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundtableErrorKind::SynthesisCallFailed`] when the model
    /// call itself fails. Parse failures are not errors; they return `None`.
    #[instrument(
        skip(self, request),
        fields(
            schema = self.schema.name(),
            platform = %request.platform,
            round2_len = request.discussion.round2.len()
        )
    )]
    pub async fn synthesize(
        &self,
        request: &SynthesisRequest<'_>,
    ) -> StoryroomResult<Option<SynthesisOutput>> {
        let (system, user) = build_synthesis_prompt(request, self.schema.as_ref());
        debug!(
            system_chars = system.chars().count(),
            user_chars = user.chars().count(),
            "Synthesis prompt built"
        );

        let raw = self
            .driver
            .complete(&system, &[Message::user(user)], &self.options)
            .await
            .map_err(|e| {
                error!(error = %e, "Synthesis call failed");
                RoundtableError::new(RoundtableErrorKind::SynthesisCallFailed(e.to_string()))
            })?;

        match parse_synthesis(&raw) {
            Some(output) => {
                let band = self.schema.character_band();
                if !band.contains(&output.optimized_prompt.chars().count()) {
                    warn!(
                        chars = output.optimized_prompt.chars().count(),
                        min = band.start(),
                        max = band.end(),
                        "Optimized prompt outside the schema's length band"
                    );
                }
                info!(
                    chars = output.character_count,
                    hashtags = output.hashtags.len(),
                    shots = output.suggested_shots.as_ref().map_or(0, Vec::len),
                    "Synthesis complete"
                );
                Ok(Some(output))
            }
            None => {
                warn!(
                    response_chars = raw.chars().count(),
                    "Synthesis output unusable, returning empty result"
                );
                Ok(None)
            }
        }
    }
}

impl SynthesisOutput {
    /// Attach the transcript to produce the caller-facing result.
    pub fn into_result(self, discussion: AgentDiscussion) -> RoundtableResult {
        RoundtableResult {
            discussion,
            detailed_breakdown: self.breakdown,
            optimized_prompt: self.optimized_prompt,
            character_count: self.character_count,
            hashtags: self.hashtags,
            suggested_shots: self.suggested_shots,
        }
    }
}
