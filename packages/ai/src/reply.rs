// ABOUTME: Parsing of the generation service's README summary reply
// ABOUTME: Produces a tagged Parsed/Malformed result; only Malformed builds the fallback

use serde::Deserialize;
use tracing::warn;

use folio_core::{ReadmeSummary, NO_SUMMARY_AVAILABLE};

/// Outcome of parsing a generation reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryReply {
    Parsed(ReadmeSummary),
    /// The reply did not match `{text, deployedUrl, techStack}`
    Malformed { raw: String, reason: String },
}

impl SummaryReply {
    /// Resolve to a summary, degrading a malformed reply
    pub fn into_summary(self) -> ReadmeSummary {
        match self {
            SummaryReply::Parsed(summary) => summary,
            SummaryReply::Malformed { raw, reason } => {
                warn!(
                    "Failed to parse AI summary response ({}): {}",
                    reason,
                    folio_core::truncate(&raw, 500)
                );
                ReadmeSummary::degraded()
            }
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, SummaryReply::Malformed { .. })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSummary {
    text: String,
    #[serde(default)]
    deployed_url: Option<String>,
    tech_stack: Vec<String>,
}

/// Parse the raw reply text into a [`SummaryReply`].
///
/// `text` and `techStack` are required. `deployedUrl` may be missing or null,
/// and a blank URL counts as null. Markdown code fences around the JSON are
/// tolerated. Anything other than a JSON object is malformed.
pub fn parse_summary_reply(raw: &str) -> SummaryReply {
    let json_text = strip_code_fences(raw);

    match decode_object(json_text) {
        Ok(parsed) => {
            let text = if parsed.text.trim().is_empty() {
                NO_SUMMARY_AVAILABLE.to_string()
            } else {
                parsed.text
            };
            let deployed_url = parsed
                .deployed_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty());

            SummaryReply::Parsed(ReadmeSummary {
                text,
                deployed_url,
                tech_stack: parsed.tech_stack,
            })
        }
        Err(reason) => SummaryReply::Malformed {
            raw: raw.to_string(),
            reason,
        },
    }
}

// Derived struct visitors also accept positional arrays, so check the shape first
fn decode_object(json_text: &str) -> Result<RawSummary, String> {
    let value: serde_json::Value = serde_json::from_str(json_text).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("reply is not a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Strip ```json ... ``` fences if the whole reply is wrapped in them
fn strip_code_fences(text: &str) -> &str {
    let cleaned = text.trim();
    if !cleaned.starts_with("```") {
        return cleaned;
    }

    // Skip the opening fence line, then cut at the last closing fence
    let start = cleaned.find('\n').map(|i| i + 1).unwrap_or(cleaned.len());
    let end = cleaned[start..]
        .rfind("```")
        .map(|i| i + start)
        .unwrap_or(cleaned.len());
    cleaned[start..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_json_degrades_to_fixed_record() {
        let reply = parse_summary_reply("not valid json");

        assert!(reply.is_malformed());
        assert_eq!(
            serde_json::to_value(reply.into_summary()).unwrap(),
            serde_json::json!({
                "text": "Summary failed.",
                "deployedUrl": null,
                "techStack": []
            })
        );
    }

    #[test]
    fn test_well_formed_reply() {
        let reply = parse_summary_reply(
            r#"{"text": "A CLI.", "deployedUrl": "https://x.dev", "techStack": ["Rust", "Tokio", "Rust"]}"#,
        );

        assert_eq!(
            reply,
            SummaryReply::Parsed(ReadmeSummary {
                text: "A CLI.".to_string(),
                deployed_url: Some("https://x.dev".to_string()),
                tech_stack: vec!["Rust".into(), "Tokio".into(), "Rust".into()],
            })
        );
    }

    #[test]
    fn test_null_or_missing_url_is_none() {
        for raw in [
            r#"{"text": "A", "deployedUrl": null, "techStack": []}"#,
            r#"{"text": "A", "techStack": []}"#,
            r#"{"text": "A", "deployedUrl": "  ", "techStack": []}"#,
        ] {
            match parse_summary_reply(raw) {
                SummaryReply::Parsed(summary) => assert_eq!(summary.deployed_url, None),
                other => panic!("expected parsed reply, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_missing_required_fields_are_malformed() {
        assert!(parse_summary_reply(r#"{"text": "A"}"#).is_malformed());
        assert!(parse_summary_reply(r#"{"techStack": []}"#).is_malformed());
        assert!(parse_summary_reply(r#"{"text": "A", "techStack": "Rust"}"#).is_malformed());
        assert!(parse_summary_reply("").is_malformed());
    }

    #[test]
    fn test_non_object_reply_is_malformed() {
        for raw in [
            r#"["A tool.", null, ["Rust"]]"#,
            r#"["A tool.", ["Rust"]]"#,
            r#""A tool.""#,
            "42",
        ] {
            assert!(parse_summary_reply(raw).is_malformed(), "accepted {}", raw);
        }
    }

    #[test]
    fn test_fenced_reply_is_parsed() {
        let raw = "```json\n{\"text\": \"A\", \"deployedUrl\": null, \"techStack\": [\"Go\"]}\n```";

        match parse_summary_reply(raw) {
            SummaryReply::Parsed(summary) => assert_eq!(summary.tech_stack, vec!["Go"]),
            other => panic!("expected parsed reply, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_text_uses_placeholder() {
        match parse_summary_reply(r#"{"text": "", "techStack": []}"#) {
            SummaryReply::Parsed(summary) => assert_eq!(summary.text, NO_SUMMARY_AVAILABLE),
            other => panic!("expected parsed reply, got {:?}", other),
        }
    }
}
