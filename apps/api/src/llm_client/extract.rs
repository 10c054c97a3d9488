//! Response Extractor — pulls a JSON payload out of free-form model output.
//!
//! Models wrap JSON in prose or code fences despite instructions not to.
//! A fenced ```json block is used as a hint for where to look, never as a
//! requirement. Extraction is strict: the first balanced object or array
//! span must parse as-is, or the whole extraction fails. No repair
//! heuristics, no partial recovery.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object or array found in model output")]
    NoJson,

    #[error("unbalanced JSON delimiters in model output")]
    Unbalanced,

    #[error("model output is not valid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Extracts the first structured JSON value (object or array) from raw model
/// output. Fails with `ParseError` when no balanced value can be located or
/// the located span does not parse.
pub fn extract_structured(raw: &str) -> Result<Value, ParseError> {
    if let Some(block) = fenced_candidate(raw) {
        if let Ok(value) = scan_value(block) {
            return Ok(value);
        }
    }
    scan_value(raw)
}

/// Returns the body of the first fenced code block, if the text contains a
/// complete one. The language tag line (```json) is skipped.
fn fenced_candidate(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after = &text[start + 3..];
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

fn scan_value(text: &str) -> Result<Value, ParseError> {
    let start = text.find(['{', '[']).ok_or(ParseError::NoJson)?;
    let span = balanced_span(&text[start..]).ok_or(ParseError::Unbalanced)?;
    serde_json::from_str(span).map_err(ParseError::Invalid)
}

/// Finds the span from the opening delimiter at position 0 to its balanced
/// close, ignoring delimiters inside string literals. Returns `None` when the
/// value never closes.
fn balanced_span(text: &str) -> Option<&str> {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..i + c.len_utf8()]);
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
    use serde_json::json;

    #[test]
    fn test_extract_bare_object() {
        let value = extract_structured(r#"{"score": 4.5, "evaluation": "good"}"#).unwrap();
        assert_eq!(value["score"], json!(4.5));
    }

    #[test]
    fn test_extract_bare_array() {
        let value = extract_structured(r#"["Q1?", "Q2?"]"#).unwrap();
        assert_eq!(value, json!(["Q1?", "Q2?"]));
    }

    #[test]
    fn test_extract_fenced_with_json_tag() {
        let raw = "Here is the result:\n```json\n{\"score\": 3.0, \"evaluation\": \"ok\"}\n```\nHope that helps!";
        let value = extract_structured(raw).unwrap();
        assert_eq!(value["evaluation"], json!("ok"));
    }

    #[test]
    fn test_extract_fenced_without_tag() {
        let raw = "```\n[\"a\", \"b\"]\n```";
        let value = extract_structured(raw).unwrap();
        assert_eq!(value, json!(["a", "b"]));
    }

    #[test]
    fn test_extract_object_wrapped_in_prose() {
        let raw = "After reviewing the dataset, my assessment is {\"score\": 2.5, \"evaluation\": \"weak\"} as explained above.";
        let value = extract_structured(raw).unwrap();
        assert_eq!(value["score"], json!(2.5));
    }

    #[test]
    fn test_extract_ignores_braces_inside_strings() {
        let raw = r#"{"evaluation": "uses {braces} and ] inside", "score": 5}"#;
        let value = extract_structured(raw).unwrap();
        assert_eq!(value["score"], json!(5));
    }

    #[test]
    fn test_extract_handles_escaped_quotes() {
        let raw = r#"{"evaluation": "a \"quoted\" remark", "score": 1}"#;
        let value = extract_structured(raw).unwrap();
        assert_eq!(value["evaluation"], json!("a \"quoted\" remark"));
    }

    #[test]
    fn test_extract_chinese_content() {
        let raw = "评估结果如下：\n```json\n{\"score\": 4.0, \"evaluation\": \"问题表述清晰\"}\n```";
        let value = extract_structured(raw).unwrap();
        assert_eq!(value["evaluation"], json!("问题表述清晰"));
    }

    #[test]
    fn test_extract_falls_back_when_fence_has_no_json() {
        let raw = "```\nplain text block\n```\nbut the answer is [\"x\"]";
        let value = extract_structured(raw).unwrap();
        assert_eq!(value, json!(["x"]));
    }

    #[test]
    fn test_no_json_at_all_fails() {
        let err = extract_structured("I could not produce a result, sorry.").unwrap_err();
        assert!(matches!(err, ParseError::NoJson));
    }

    #[test]
    fn test_unbalanced_fails() {
        let err = extract_structured(r#"{"score": 4.5, "evaluation": "trunca"#).unwrap_err();
        assert!(matches!(err, ParseError::Unbalanced));
    }

    #[test]
    fn test_balanced_but_invalid_fails() {
        let err = extract_structured("{score: 4.5}").unwrap_err();
        assert!(matches!(err, ParseError::Invalid(_)));
    }

    #[test]
    fn test_round_trip_object() {
        let original = json!({"label": "1 领域", "child": [{"label": "1.1 子领域"}]});
        let serialized = serde_json::to_string_pretty(&original).unwrap();
        assert_eq!(extract_structured(&serialized).unwrap(), original);
    }

    #[test]
    fn test_round_trip_fenced_with_prose() {
        let original = json!([{"genre": {"title": "t", "description": "d"}}]);
        let wrapped = format!(
            "Sure, here you go:\n```json\n{}\n```\nLet me know if you need more.",
            serde_json::to_string(&original).unwrap()
        );
        assert_eq!(extract_structured(&wrapped).unwrap(), original);
    }
}
