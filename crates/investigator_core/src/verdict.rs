/// Closed verdict vocabulary returned by the investigation service.
///
/// The service answers in either English or Portuguese depending on its
/// deployment, so both spellings map to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Confirmed,
    False,
    Inaccurate,
    Insufficient,
    Unrecognized,
}

impl Verdict {
    pub fn from_token(token: &str) -> Self {
        match token.to_uppercase().as_str() {
            "CONFIRMED" | "CONFIRMADO" => Verdict::Confirmed,
            "FALSE" | "FALSO" => Verdict::False,
            "INACCURATE" | "IMPRECISO" => Verdict::Inaccurate,
            "INSUFFICIENT" | "INSUFICIENTE" => Verdict::Insufficient,
            _ => Verdict::Unrecognized,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Verdict::Confirmed => "✅",
            Verdict::False => "❌",
            Verdict::Inaccurate => "⚠️",
            Verdict::Insufficient => "❓",
            Verdict::Unrecognized => "🔎",
        }
    }
}

/// Icon for a raw verdict token. Total over all inputs.
pub fn verdict_icon(token: &str) -> &'static str {
    Verdict::from_token(token).icon()
}
