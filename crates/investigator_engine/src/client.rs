use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use investigator_core::{
    InvestigationError, InvestigationRequest, InvestigationResult, PayloadError, ServerDetail,
};
use reqwest::Url;

use crate::HealthStatus;

pub const DEFAULT_ENDPOINT: &str = "https://projeto-senac-f43t.onrender.com/investigate";

/// Where and how to reach the investigation service.
///
/// Both timeouts are off unless set: a silent server keeps the client in
/// its loading state.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            connect_timeout: None,
            request_timeout: None,
        }
    }

    /// Sibling `health` path of the investigate endpoint.
    pub fn health_url(&self) -> Result<Url, InvestigationError> {
        self.endpoint
            .join("health")
            .map_err(|err| InvestigationError::Network(format!("invalid health url: {err}")))
    }
}

#[async_trait::async_trait]
pub trait Investigator: Send + Sync {
    async fn investigate(
        &self,
        request: &InvestigationRequest,
    ) -> Result<InvestigationResult, InvestigationError>;

    async fn health(&self) -> Result<HealthStatus, InvestigationError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestInvestigator {
    settings: ClientSettings,
}

impl ReqwestInvestigator {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, InvestigationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| InvestigationError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Investigator for ReqwestInvestigator {
    async fn investigate(
        &self,
        request: &InvestigationRequest,
    ) -> Result<InvestigationResult, InvestigationError> {
        let client = self.build_client()?;
        engine_debug!(
            "POST {} kind={}",
            self.settings.endpoint,
            request.kind()
        );

        let response = client
            .post(self.settings.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let detail = ServerDetail::from_body(&body);
            engine_info!("Investigate endpoint answered {} ({:?})", status, detail);
            return Err(InvestigationError::RequestFailed {
                status: status.as_u16(),
                detail,
            });
        }

        engine_debug!("Investigate endpoint answered {} with {} bytes", status, body.len());
        Ok(InvestigationResult::from_json(&body)?)
    }

    async fn health(&self) -> Result<HealthStatus, InvestigationError> {
        let url = self.settings.health_url()?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(InvestigationError::RequestFailed {
                status: status.as_u16(),
                detail: ServerDetail::from_body(&body),
            });
        }

        serde_json::from_slice(&body)
            .map_err(|err| PayloadError::Malformed(err.to_string()).into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> InvestigationError {
    if err.is_timeout() {
        return InvestigationError::Network(format!("request timed out: {err}"));
    }
    if err.is_connect() {
        return InvestigationError::Network(format!("could not connect: {err}"));
    }
    InvestigationError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ClientSettings, DEFAULT_ENDPOINT};
    use reqwest::Url;

    #[test]
    fn health_url_replaces_last_segment() {
        let settings = ClientSettings::new(Url::parse(DEFAULT_ENDPOINT).unwrap());
        assert_eq!(
            settings.health_url().unwrap().as_str(),
            "https://projeto-senac-f43t.onrender.com/health"
        );
    }

    #[test]
    fn timeouts_default_to_none() {
        let settings = ClientSettings::new(Url::parse("http://localhost:8000/investigate").unwrap());
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(settings.request_timeout, None);
    }
}
