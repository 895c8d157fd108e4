use crate::{InvestigationRequest, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the request; the runtime must answer with exactly one
    /// `InvestigationSucceeded` or `InvestigationFailed`.
    SubmitInvestigation { request: InvestigationRequest },
    PersistTheme(Theme),
}
