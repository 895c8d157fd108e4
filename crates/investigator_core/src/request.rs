use serde::Serialize;
use url::Url;

/// Body of a POST to the investigate endpoint.
///
/// Serializes as `{"url": "..."}` or `{"text": "..."}`; the two fields are
/// never sent together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestigationRequest {
    Url(String),
    Text(String),
}

impl InvestigationRequest {
    /// The claim as the user typed it.
    pub fn lead(&self) -> &str {
        match self {
            InvestigationRequest::Url(url) => url,
            InvestigationRequest::Text(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InvestigationRequest::Url(_) => "url",
            InvestigationRequest::Text(_) => "text",
        }
    }
}

/// Classify an already trimmed, non-empty lead.
///
/// Anything the WHATWG parser accepts as an absolute URL is sent as `url`;
/// everything else is sent as `text`. There is no scheme allow-list.
pub fn classify_input(lead: &str) -> InvestigationRequest {
    match Url::parse(lead) {
        Ok(_) => InvestigationRequest::Url(lead.to_string()),
        Err(_) => InvestigationRequest::Text(lead.to_string()),
    }
}
