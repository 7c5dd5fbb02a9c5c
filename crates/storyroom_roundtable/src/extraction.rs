//! Pulling a JSON object out of a model response.
//!
//! Even in JSON mode, models sometimes wrap the object in a markdown fence
//! or lead with a sentence of prose. These helpers recover the object.

use storyroom_error::{JsonError, StoryroomResult};

/// Extract a JSON object from a response that may contain markdown or
/// extra text.
///
/// Strategies, in order:
/// 1. Markdown code blocks: ```json ... ``` (or an unlabelled fence)
/// 2. Balanced braces: { ... }
///
/// # Errors
///
/// Returns an error if no JSON object is found.
///
/// # Examples
///
/// ```
/// use storyroom_roundtable::extract_json;
///
/// let response = "Here is the synthesis:\n```json\n{\"optimized_prompt\": \"Dawn.\"}\n```";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('{'));
/// assert!(json.contains("Dawn."));
/// ```
pub fn extract_json(response: &str) -> StoryroomResult<String> {
    if let Some(json) =
        extract_from_code_block(response).and_then(|block| extract_balanced(&block, '{', '}'))
    {
        return Ok(json);
    }

    if let Some(json) = extract_balanced(response, '{', '}') {
        return Ok(json);
    }

    tracing::warn!(
        response_length = response.len(),
        "No JSON object found in model response"
    );
    Err(JsonError::new(
        "synthesis response",
        format!("no JSON object found (length: {})", response.len()),
    )
    .into())
}

/// Content of the first markdown code fence, with any language tag
/// skipped. An unterminated fence runs to the end of the response.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")? + 3;
    let content_start = response[start..]
        .find('\n')
        .map(|n| start + n + 1)
        .unwrap_or(start);

    let content = match response[content_start..].find("```") {
        Some(end) => &response[content_start..content_start + end],
        None => &response[content_start..],
    };
    Some(content.trim().to_string())
}

/// Content from the first `open` up to its matching `close`, skipping
/// delimiters inside string literals.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + c.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_from_code_block() {
        let response = r##"
Here's the synthesis:

```json
{
  "optimized_prompt": "Golden hour.",
  "hashtags": ["#sunrise"]
}
```

Let me know if you want changes.
"##;
        let json = extract_json(response).unwrap();
        assert!(json.contains("\"optimized_prompt\": \"Golden hour.\""));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_extract_json_balanced_braces_after_prose() {
        let response = r#"Sure! {"a": {"b": "c"}, "d": 1} Hope that helps {not json}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, r#"{"a": {"b": "c"}, "d": 1}"#);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let response = r#"{"optimized_prompt": "A sign reads \"{open}\" at dawn", "n": 1}"#;
        let json = extract_json(response).unwrap();
        assert_eq!(json, response);
    }

    #[test]
    fn test_unterminated_fence_still_yields_object() {
        let response = "```json\n{\"optimized_prompt\": \"Cut.\"}";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "{\"optimized_prompt\": \"Cut.\"}");
    }

    #[test]
    fn test_no_json_found() {
        assert!(extract_json("Plain prose with no object at all").is_err());
    }

    #[test]
    fn test_truncated_object_is_not_returned() {
        assert!(extract_json(r#"{"optimized_prompt": "Cut"#).is_err());
    }
}
