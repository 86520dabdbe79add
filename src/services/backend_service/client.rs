use crate::error::WorkflowError;
use crate::models::{
    AssessmentPayload, AssessmentRequest, ComparisonPayload, HeatmapPayload, SpeedCheckPayload,
    WorkflowKind,
};
use crate::utils::with_scheme;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Thin JSON transport to the analysis backend.
///
/// One POST per workflow. There is no timeout and no retry: a call finishes
/// when the backend answers or the connection fails.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    api_base: String,
}

impl BackendClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn compare(
        &self,
        url_a: &str,
        url_b: &str,
    ) -> Result<ComparisonPayload, WorkflowError> {
        let body = json!({ "url_a": with_scheme(url_a), "url_b": with_scheme(url_b) });
        self.post(WorkflowKind::Comparison, &body).await
    }

    pub async fn check_speed(&self, url: &str) -> Result<SpeedCheckPayload, WorkflowError> {
        self.post(WorkflowKind::SpeedCheck, &json!({ "url": url.trim() }))
            .await
    }

    pub async fn analyze_heatmap(&self, url: &str) -> Result<HeatmapPayload, WorkflowError> {
        self.post(WorkflowKind::Heatmap, &json!({ "url": url.trim() }))
            .await
    }

    pub async fn assess_page(
        &self,
        request: &AssessmentRequest,
    ) -> Result<AssessmentPayload, WorkflowError> {
        let body = AssessmentRequest {
            url: request.url.trim().to_string(),
            ..request.clone()
        };
        self.post(WorkflowKind::Assessment, &body).await
    }

    async fn post<B, P>(&self, kind: WorkflowKind, body: &B) -> Result<P, WorkflowError>
    where
        B: Serialize + ?Sized,
        P: DeserializeOwned,
    {
        let endpoint = format!("{}/{}", self.api_base, kind.endpoint());
        let generic = || WorkflowError::Backend(kind.generic_error().to_string());
        debug!("POST {} for {}", endpoint, kind);

        let response = self
            .http
            .post(&endpoint)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("{} request to {} failed: {}", kind, endpoint, e);
                generic()
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            warn!("{} response body from {} unreadable: {}", kind, endpoint, e);
            generic()
        })?;

        if !status.is_success() {
            warn!("{} backend answered {}", kind, status);
            return Err(match detail(&raw) {
                Some(message) => WorkflowError::Backend(message),
                None => generic(),
            });
        }

        serde_json::from_str(&raw).map_err(|e| {
            warn!("{} response from {} undecodable: {}", kind, endpoint, e);
            generic()
        })
    }
}

/// The backend's own error message, when the body carries a string `detail`.
fn detail(raw: &str) -> Option<String> {
    match serde_json::from_str::<Value>(raw).ok()?.get("detail")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_only_when_string() {
        assert_eq!(
            detail(r#"{"detail": "Site unreachable"}"#).as_deref(),
            Some("Site unreachable")
        );
        assert_eq!(detail(r#"{"detail": [{"loc": ["body"]}]}"#), None);
        assert_eq!(detail(r#"{"detail": ""}"#), None);
        assert_eq!(detail("<html>Bad Gateway</html>"), None);
    }

    #[test]
    fn api_base_is_normalized() {
        let client = BackendClient::new("http://127.0.0.1:8001/api/");
        assert_eq!(client.api_base(), "http://127.0.0.1:8001/api");
    }
}
