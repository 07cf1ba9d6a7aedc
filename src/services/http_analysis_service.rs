use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::config::constants::{timeout_duration, ANALYZE_ENDPOINT, HEALTH_ENDPOINT};
use crate::enums::service_error::ServiceError;
use crate::errors::SecureScanResult;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::service_config::ServiceConfig;
use crate::structs::service_envelope::ServiceEnvelope;
use crate::traits::analysis_service::AnalysisService;

/// Talks to the analysis backend over HTTP.
#[derive(Clone)]
pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAnalysisService {
    pub fn new(config: &ServiceConfig) -> SecureScanResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()?;

        let api_key = config
            .api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|key| !key.trim().is_empty());

        if config.api_key_env.is_some() && api_key.is_none() {
            log::warn!("🔑 API key variable is configured but not set; sending unauthenticated requests");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Probes the backend's health endpoint and returns its body.
    pub async fn health(&self) -> Result<String, ServiceError> {
        let url = self.endpoint(HEALTH_ENDPOINT);
        log::debug!("🩺 Checking backend health at {}", url);

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ServiceError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::status_error(status, body));
        }

        Ok(body)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    pub fn status_error(status: StatusCode, error_text: String) -> ServiceError {
        match status.as_u16() {
            400 => ServiceError::ApiError(format!("Bad request: {error_text}")),
            401 => ServiceError::AuthenticationError(error_text),
            403 => ServiceError::ApiError(format!("Forbidden: {error_text}")),
            429 => ServiceError::RateLimited(error_text),
            _ => ServiceError::ApiError(format!("HTTP {status}: {error_text}")),
        }
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ServiceEnvelope, ServiceError> {
        let url = self.endpoint(ANALYZE_ENDPOINT);

        let response = self
            .authorized(self.client.post(&url))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::debug!("❌ Analysis API error response ({}): {}", status, error_text);
            return Err(Self::status_error(status, error_text));
        }

        response
            .json::<ServiceEnvelope>()
            .await
            .map_err(|e| ServiceError::SerializationError(e.to_string()))
    }
}
