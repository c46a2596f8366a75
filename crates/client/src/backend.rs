use crate::error::Result;
use async_trait::async_trait;
use repolens_protocol::{ExplainResult, RawAnalysisPayload};
use std::path::{Path, PathBuf};

/// What to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    RepoUrl(String),
    Zip(PathBuf),
}

impl AnalysisRequest {
    /// Shown when a failure carries nothing presentable.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AnalysisRequest::RepoUrl(_) => "Analysis failed. Please try again.",
            AnalysisRequest::Zip(_) => "ZIP analysis failed. Please try again.",
        }
    }
}

pub const EXPLAIN_FALLBACK_MESSAGE: &str = "Explanation failed. Please try again.";

/// The analysis service as the dashboard sees it.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze_repo_url(&self, repo_url: &str) -> Result<RawAnalysisPayload>;

    async fn analyze_zip(&self, path: &Path) -> Result<RawAnalysisPayload>;

    async fn explain(&self, repo_id: &str) -> Result<ExplainResult>;

    async fn analyze(&self, request: &AnalysisRequest) -> Result<RawAnalysisPayload> {
        match request {
            AnalysisRequest::RepoUrl(url) => self.analyze_repo_url(url.trim()).await,
            AnalysisRequest::Zip(path) => self.analyze_zip(path).await,
        }
    }
}
