//! Synthesis instruction construction.

use super::SynthesisSchema;
use crate::personas::SAFETY_RULES;
use storyroom_core::{AgentDiscussion, Platform, SeriesSoraSettings, Shot};

/// Everything the synthesis call is built from.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisRequest<'a> {
    /// The (possibly augmented) brief
    pub brief: &'a str,
    /// Target platform
    pub platform: Platform,
    /// Complete two-round transcript
    pub discussion: &'a AgentDiscussion,
    /// Series style anchors
    pub sora_settings: Option<&'a SeriesSoraSettings>,
    /// The user's direct edits to a previous prompt
    pub user_prompt_edits: Option<&'a str>,
    /// Caller-supplied shots, already renumbered
    pub shot_list: &'a [Shot],
}

impl<'a> SynthesisRequest<'a> {
    /// Request with no series settings, edits, or shots.
    pub fn new(brief: &'a str, platform: Platform, discussion: &'a AgentDiscussion) -> Self {
        Self {
            brief,
            platform,
            discussion,
            sora_settings: None,
            user_prompt_edits: None,
            shot_list: &[],
        }
    }
}

/// Build the synthesis `(system, user)` prompt pair.
pub fn build_synthesis_prompt(
    request: &SynthesisRequest<'_>,
    schema: &dyn SynthesisSchema,
) -> (String, String) {
    let system = format!(
        "You are the synthesis engine of a creative roundtable. Several experts have discussed a \
short-form video brief. Merge their best ideas into one production-ready prompt for an AI \
video generation model.\n\n\
COPYRIGHT SAFETY:\nEvery brand, logo, trademark, real person, celebrity, copyrighted character, \
franchise, or song mentioned anywhere in the discussion MUST be replaced with a generic, \
original substitute in your output. Hashtags follow the same rule.\n\n{}\n\n{}",
        SAFETY_RULES,
        schema.output_contract()
    );

    let transcript =
        serde_json::to_string_pretty(request.discussion).unwrap_or_else(|_| "{}".to_string());

    let mut sections = vec![
        format!("CREATIVE BRIEF:\n{}", request.brief.trim()),
        format!("TARGET PLATFORM: {}", request.platform.summary()),
        format!(
            "ROUNDTABLE DISCUSSION (JSON, round1 then round2; round2 length varies):\n{}",
            transcript
        ),
    ];

    if let Some(settings) = request.sora_settings.filter(|s| !s.is_empty()) {
        sections.push(consistency_instructions(settings));
    }

    if let Some(edits) = request
        .user_prompt_edits
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        sections.push(format!(
            "USER'S DIRECT PROMPT EDITS:\nThe user edited a previous version of this prompt. \
Respect these edits and refine around them; do not overwrite them.\n{}",
            edits
        ));
    }

    if !request.shot_list.is_empty() {
        let shots = serde_json::to_string_pretty(request.shot_list).unwrap_or_default();
        sections.push(format!(
            "USER'S SHOT LIST:\nKeep these shots and their order. Refine descriptions and \
camera notes, and return the refined list as suggested_shots.\n{}",
            shots
        ));
    }

    (system, sections.join("\n\n"))
}

fn consistency_instructions(settings: &SeriesSoraSettings) -> String {
    let mut out = String::from(
        "SERIES VISUAL CONSISTENCY:\nWeave these series style anchors into the optimized prompt \
naturally. Do not list them as a separate block.",
    );
    for (label, value) in settings.fields() {
        if let Some(value) = value {
            out.push_str(&format!("\n- {}: {}", label, value));
        }
    }
    if let Some(prefix) = settings.narrative_prefix() {
        out.push_str(&format!(
            "\n\nThe optimized_prompt MUST open with this exact phrase, verbatim: \"{}\"",
            prefix
        ));
    }
    out
}
