use serde::Deserialize;

use crate::PayloadError;

/// A consulted source as shown under the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Validated success payload of the investigate endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestigationResult {
    pub verdict: String,
    pub event_summary: String,
    pub key_points: Vec<String>,
    pub sources: Vec<Source>,
    pub is_event_real: Option<bool>,
}

// Wire shape: every field optional so absence is decided here, not by serde.
#[derive(Debug, Deserialize)]
struct RawPayload {
    verdict: Option<String>,
    event_summary: Option<String>,
    key_points: Option<Vec<String>>,
    sources: Option<Vec<RawSource>>,
    is_event_real: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl InvestigationResult {
    /// Parse and normalize a 2xx response body.
    ///
    /// `verdict` is required. A missing summary becomes empty, missing lists
    /// become empty, a source without a title is labelled with its link, and a
    /// source without a link is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, PayloadError> {
        let raw: RawPayload =
            serde_json::from_slice(body).map_err(|err| PayloadError::Malformed(err.to_string()))?;

        let verdict = raw
            .verdict
            .ok_or_else(|| PayloadError::MissingField("verdict".to_string()))?;

        let sources = raw
            .sources
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let link = source
                    .link
                    .ok_or_else(|| PayloadError::MissingField(format!("sources[{index}].link")))?;
                Ok(Source {
                    title: source.title.unwrap_or_else(|| link.clone()),
                    link,
                    snippet: source.snippet.unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, PayloadError>>()?;

        Ok(Self {
            verdict,
            event_summary: raw.event_summary.unwrap_or_default(),
            key_points: raw.key_points.unwrap_or_default(),
            sources,
            is_event_real: raw.is_event_real,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{InvestigationResult, Source};
    use crate::PayloadError;

    #[test]
    fn full_payload_is_kept_in_order() {
        let body = br#"{
            "verdict": "CONFIRMED",
            "event_summary": "A small plane crashed.",
            "key_points": ["a", "b"],
            "is_event_real": true,
            "sources": [
                {"title": "G1", "link": "https://g1.globo.com/x", "snippet": "Plane down"}
            ]
        }"#;

        let result = InvestigationResult::from_json(body).unwrap();
        assert_eq!(result.verdict, "CONFIRMED");
        assert_eq!(result.key_points, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.is_event_real, Some(true));
        assert_eq!(
            result.sources,
            vec![Source {
                title: "G1".into(),
                link: "https://g1.globo.com/x".into(),
                snippet: "Plane down".into(),
            }]
        );
    }

    #[test]
    fn absent_lists_default_to_empty() {
        let result = InvestigationResult::from_json(br#"{"verdict": "FALSO"}"#).unwrap();
        assert!(result.key_points.is_empty());
        assert!(result.sources.is_empty());
        assert_eq!(result.event_summary, "");
        assert_eq!(result.is_event_real, None);
    }

    #[test]
    fn null_lists_default_to_empty() {
        let body = br#"{"verdict": "FALSE", "key_points": null, "sources": null}"#;
        let result = InvestigationResult::from_json(body).unwrap();
        assert!(result.key_points.is_empty());
        assert!(result.sources.is_empty());
    }

    #[test]
    fn missing_verdict_is_rejected() {
        let err = InvestigationResult::from_json(br#"{"key_points": []}"#).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("verdict".into()));
    }

    #[test]
    fn source_without_link_is_rejected() {
        let body = br#"{"verdict": "FALSE", "sources": [{"title": "t"}]}"#;
        let err = InvestigationResult::from_json(body).unwrap_err();
        assert_eq!(err, PayloadError::MissingField("sources[0].link".into()));
    }

    #[test]
    fn source_without_title_uses_link() {
        let body = br#"{"verdict": "FALSE", "sources": [{"link": "https://x.example"}]}"#;
        let result = InvestigationResult::from_json(body).unwrap();
        assert_eq!(result.sources[0].title, "https://x.example");
        assert_eq!(result.sources[0].snippet, "");
    }

    #[test]
    fn non_json_and_wrong_types_are_malformed() {
        assert!(matches!(
            InvestigationResult::from_json(b"<html>502</html>"),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            InvestigationResult::from_json(br#"{"verdict": "FALSE", "key_points": "a"}"#),
            Err(PayloadError::Malformed(_))
        ));
    }
}
