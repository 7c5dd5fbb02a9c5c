//! Scripted driver that answers as whichever persona is calling.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyroom_core::{
    GenerateRequest, GenerateResponse, Output, PersonaName, Platform, RoundtableInput,
};
use storyroom_error::{HttpError, StoryroomResult};
use storyroom_interface::StoryroomDriver;
use storyroom_roundtable::persona;
use strum::IntoEnumIterator;
use tokio::sync::Barrier;

/// A well-formed synthesis answer, wrapped in prose and a code fence the way
/// models tend to return it.
pub const SYNTHESIS_REPLY: &str = r##"Here is the breakdown you asked for:

```json
{
  "detailed_breakdown": {
    "scene_structure": "0-3s hook on the ribbon, 3-10s the reveal",
    "visual_specs": "9:16, warm golden hour",
    "audio": "Soft piano swelling at the reveal",
    "platform_optimization": "Hook lands before the first second ends",
    "hashtags": ["#gift", "#sunrise"]
  },
  "optimized_prompt": "A person unwraps a small gift at sunrise, golden light on their hands.",
  "hashtags": ["#gift", 42, "#sunrise", null, {"tag": "x"}],
  "suggested_shots": [
    {"timing": "0-2s", "description": "Close on the ribbon", "camera": "macro", "order": 3},
    {"description": "Hands lift the lid", "camera": "medium", "order": 1},
    {"timing": "6-10s", "description": "Face lights up", "camera": "slow push-in", "order": 1}
  ]
}
```"##;

/// One request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Persona identified from the system prompt, `None` for synthesis
    pub persona: Option<PersonaName>,
    /// The full request
    pub request: GenerateRequest,
}

impl RecordedCall {
    /// Concatenated text of every message in the request.
    pub fn user_text(&self) -> String {
        self.request
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Mock driver for roundtable tests.
///
/// Persona calls are recognised by their system prompt and answered with
/// `"<persona> take"`; structured calls are answered with the synthesis
/// reply.
#[derive(Clone)]
pub struct MockRoundtableDriver {
    synthesis_reply: String,
    failing_persona: Option<PersonaName>,
    round_two_only: bool,
    fail_synthesis: bool,
    round_one_gate: Option<Arc<Barrier>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockRoundtableDriver {
    /// Mock that answers synthesis with [`SYNTHESIS_REPLY`].
    pub fn new() -> Self {
        Self::with_synthesis_reply(SYNTHESIS_REPLY)
    }

    /// Mock with a custom synthesis answer.
    pub fn with_synthesis_reply(reply: impl Into<String>) -> Self {
        Self {
            synthesis_reply: reply.into(),
            failing_persona: None,
            round_two_only: false,
            fail_synthesis: false,
            round_one_gate: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make calls for `persona` fail with a transport error.
    pub fn failing_for(mut self, persona: PersonaName) -> Self {
        self.failing_persona = Some(persona);
        self
    }

    /// Make only the round-two calls for `persona` fail.
    pub fn failing_round_two_for(mut self, persona: PersonaName) -> Self {
        self.failing_persona = Some(persona);
        self.round_two_only = true;
        self
    }

    /// Make the synthesis call fail with a transport error.
    pub fn failing_synthesis(mut self) -> Self {
        self.fail_synthesis = true;
        self
    }

    /// Hold every round-one call until all `parties` round-one calls are in
    /// flight. A driver called one persona at a time never gets past the first.
    pub fn gated_round_one(mut self, parties: usize) -> Self {
        self.round_one_gate = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Every request seen so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Persona calls only, in arrival order.
    pub fn persona_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.persona.is_some())
            .collect()
    }

    /// The synthesis request, if one was made.
    pub fn synthesis_call(&self) -> Option<RecordedCall> {
        self.calls().into_iter().find(|c| c.persona.is_none())
    }

    fn identify(system: Option<&str>) -> Option<PersonaName> {
        let system = system?;
        PersonaName::iter().find(|&name| persona(name).system_prompt() == system)
    }
}

#[async_trait]
impl StoryroomDriver for MockRoundtableDriver {
    async fn generate(&self, req: &GenerateRequest) -> StoryroomResult<GenerateResponse> {
        let speaker = Self::identify(req.system().as_deref());
        self.calls.lock().unwrap().push(RecordedCall {
            persona: speaker,
            request: req.clone(),
        });

        // Round-two calls carry the brief and the discussion as two turns.
        let round_two = req.messages().len() == 2;
        if let (Some(gate), Some(_), false) = (&self.round_one_gate, speaker, round_two) {
            gate.wait().await;
        }
        let text = match speaker {
            Some(name)
                if Some(name) == self.failing_persona && (round_two || !self.round_two_only) =>
            {
                return Err(HttpError::new(format!("{} connection reset", name)).into());
            }
            Some(name) => format!("  {} take  ", name),
            None if self.fail_synthesis => {
                return Err(HttpError::new("synthesis connection reset").into());
            }
            None => self.synthesis_reply.clone(),
        };

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-roundtable"
    }
}

/// The canonical "gift at sunrise" TikTok input.
pub fn gift_input() -> RoundtableInput {
    RoundtableInput::builder()
        .brief("A person unwraps a gift at sunrise")
        .platform(Platform::Tiktok)
        .build()
        .unwrap()
}
