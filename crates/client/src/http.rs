//! reqwest-backed [`AnalysisBackend`].

use crate::backend::AnalysisBackend;
use crate::config::ClientConfig;
use crate::error::{Result, TransportError};
use async_trait::async_trait;
use repolens_protocol::{ExplainResult, RawAnalysisPayload};
use reqwest::header::ACCEPT;
use reqwest::{multipart, Client, RequestBuilder, Url};
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;

const ZIP_FIELD: &str = "zipfile";
const ZIP_MIME: &str = "application/zip";

pub struct HttpAnalysisClient {
    client: Client,
    config: ClientConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("repolens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/explain/{repo_id}` with the id percent-encoded as one segment.
    fn explain_url(&self, repo_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.api_url("explain"))
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidUrl(self.config.base_url.clone()))?
            .push(repo_id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, timeout: Duration) -> Result<String> {
        let response = request
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| TransportError::from_reqwest(err, timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::from_reqwest(err, timeout))?;

        if !status.is_success() {
            log::warn!("analysis backend returned {status}");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn analyze_request(&self, request: RequestBuilder) -> Result<RawAnalysisPayload> {
        let body = self.send(request, self.config.analyze_timeout).await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|err| TransportError::Decode(err.to_string()))?;
        if !value.is_object() {
            return Err(TransportError::Decode(
                "analysis response is not a JSON object".to_string(),
            ));
        }
        Ok(RawAnalysisPayload::from_value(value))
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze_repo_url(&self, repo_url: &str) -> Result<RawAnalysisPayload> {
        let url = self.config.api_url("analyze/json");
        log::info!("analyzing {repo_url} via {url}");
        let request = self.client.post(url).json(&json!({ "repoUrl": repo_url }));
        self.analyze_request(request).await
    }

    async fn analyze_zip(&self, path: &Path) -> Result<RawAnalysisPayload> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "repository.zip".to_string());
        log::info!("uploading {} ({} bytes)", path.display(), bytes.len());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(ZIP_MIME)
            .map_err(|err| TransportError::Network(err.to_string()))?;
        let form = multipart::Form::new().part(ZIP_FIELD, part);

        let request = self
            .client
            .post(self.config.api_url("analyze-zip/json"))
            .multipart(form);
        self.analyze_request(request).await
    }

    async fn explain(&self, repo_id: &str) -> Result<ExplainResult> {
        let url = self.explain_url(repo_id)?;
        log::info!("requesting explanation for {repo_id}");
        let request = self.client.post(url).json(&json!({}));
        let body = self.send(request, self.config.explain_timeout).await?;
        serde_json::from_str(&body).map_err(|err| TransportError::Decode(err.to_string()))
    }
}
