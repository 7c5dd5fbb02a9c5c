//! Parsing and normalizing the synthesis response.
//!
//! Whatever the model returns, the output here is well-typed: hashtags are
//! strings, shots are numbered `1..=N` by position, and the character count
//! is always set.

use crate::extract_json;
use serde_json::{Map, Value};
use storyroom_core::{DetailedBreakdown, Shot};

/// Normalized synthesis output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SynthesisOutput {
    /// Breakdown sections (hashtags included)
    pub breakdown: DetailedBreakdown,
    /// The optimized prompt
    pub optimized_prompt: String,
    /// Reported or computed prompt length
    pub character_count: usize,
    /// Hashtags, strings only
    pub hashtags: Vec<String>,
    /// Shots, renumbered by position
    pub suggested_shots: Option<Vec<Shot>>,
}

/// Parse a raw synthesis response.
///
/// Returns `None` when no JSON object can be recovered at all; the caller
/// degrades to an empty result. Individual malformed fields fall back to
/// their defaults without failing the whole parse.
pub fn parse_synthesis(raw: &str) -> Option<SynthesisOutput> {
    let json = extract_json(raw).ok()?;
    let root = match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "Synthesis JSON failed to parse");
            return None;
        }
    };
    Some(normalize(&root))
}

fn normalize(root: &Map<String, Value>) -> SynthesisOutput {
    let optimized_prompt = root
        .get("optimized_prompt")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let breakdown_value = root.get("detailed_breakdown").and_then(Value::as_object);

    let hashtags = root
        .get("hashtags")
        .filter(|v| v.is_array())
        .or_else(|| breakdown_value.and_then(|b| b.get("hashtags")))
        .map(normalize_hashtags)
        .unwrap_or_default();

    let mut breakdown = DetailedBreakdown::default();
    if let Some(sections) = breakdown_value {
        for (key, value) in sections {
            if let Some(text) = section_text(value) {
                breakdown.set_section(key, text);
            }
        }
    }
    breakdown.hashtags = hashtags.clone();

    let character_count = reported_count(root.get("character_count"))
        .unwrap_or_else(|| optimized_prompt.chars().count());

    SynthesisOutput {
        breakdown,
        character_count,
        hashtags,
        suggested_shots: root.get("suggested_shots").and_then(normalize_shots),
        optimized_prompt,
    }
}

/// Keep only string elements of an array. Anything that is not an array
/// yields an empty list.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storyroom_roundtable::normalize_hashtags;
///
/// let tags = normalize_hashtags(&json!(["#dawn", 7, null, {"tag": "x"}, "#gift"]));
/// assert_eq!(tags, vec!["#dawn", "#gift"]);
/// assert!(normalize_hashtags(&json!(null)).is_empty());
/// ```
pub fn normalize_hashtags(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Coerce an array of loosely shaped shots into [`Shot`]s numbered by
/// position. Missing timing becomes a four-second placeholder slot; missing
/// text fields become empty. Returns `None` if `value` is not an array.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use storyroom_roundtable::normalize_shots;
///
/// let shots = normalize_shots(&json!([
///     {"description": "Wide", "order": 3},
///     {"timing": "2-5s", "camera": "macro", "order": 1},
/// ]))
/// .unwrap();
///
/// assert_eq!(shots[0].timing, "0-4s");
/// assert_eq!(shots[0].order, 1);
/// assert_eq!(shots[1].timing, "2-5s");
/// assert_eq!(shots[1].order, 2);
/// assert_eq!(shots[1].description, "");
/// ```
pub fn normalize_shots(value: &Value) -> Option<Vec<Shot>> {
    let items = value.as_array()?;
    let shots = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let field = |key: &str| {
                item.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            Shot {
                timing: field("timing").unwrap_or_else(|| Shot::placeholder_timing(index)),
                description: field("description").unwrap_or_default(),
                camera: field("camera").unwrap_or_default(),
                order: 0,
                lighting: field("lighting"),
                notes: field("notes"),
            }
        })
        .collect();
    Some(Shot::renumber_by_position(shots))
}

/// Section text: strings as-is, other non-null values as compact JSON.
fn section_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
        other => Some(other.to_string()),
    }
}

/// A positive integer count, if the model supplied one.
fn reported_count(value: Option<&Value>) -> Option<usize> {
    value
        .and_then(Value::as_u64)
        .filter(|count| *count > 0)
        .and_then(|count| usize::try_from(count).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hashtags_fall_back_to_breakdown() {
        let raw = json!({
            "detailed_breakdown": {"hashtags": ["#a", 1, "#b"]},
            "optimized_prompt": "x"
        })
        .to_string();
        let output = parse_synthesis(&raw).unwrap();
        assert_eq!(output.hashtags, vec!["#a", "#b"]);
        assert_eq!(output.breakdown.hashtags, output.hashtags);
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let raw = json!({
            "detailed_breakdown": {"scene_structure": "Open wide.", "mystery": "?"},
            "optimized_prompt": "x"
        })
        .to_string();
        let output = parse_synthesis(&raw).unwrap();
        assert_eq!(output.breakdown.scene_structure.as_deref(), Some("Open wide."));
    }

    #[test]
    fn test_non_string_sections_are_serialized() {
        let raw = json!({
            "detailed_breakdown": {"visual_specs": {"aspect": "9:16"}},
            "optimized_prompt": "x"
        })
        .to_string();
        let output = parse_synthesis(&raw).unwrap();
        assert_eq!(output.breakdown.visual_specs.as_deref(), Some(r#"{"aspect":"9:16"}"#));
    }

    #[test]
    fn test_zero_or_negative_count_is_recomputed() {
        for count in [json!(0), json!(-5), json!("12"), json!(null)] {
            let raw = json!({"optimized_prompt": "héllo", "character_count": count}).to_string();
            assert_eq!(parse_synthesis(&raw).unwrap().character_count, 5);
        }
    }

    #[test]
    fn test_array_root_is_rejected() {
        assert!(parse_synthesis("[1, 2, 3]").is_none());
    }

    #[test]
    fn test_non_object_shots_get_defaults() {
        let shots = normalize_shots(&json!(["just text", 4, null])).unwrap();
        assert_eq!(shots.len(), 3);
        assert_eq!(shots[2].timing, "8-12s");
        assert_eq!(shots[2].order, 3);
        assert!(shots.iter().all(|s| s.description.is_empty()));
    }
}
