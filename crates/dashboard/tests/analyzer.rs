//! Analyzer driving an in-memory backend.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use repolens_client::{AnalysisBackend, AnalysisRequest, Result, TransportError};
use repolens_dashboard::{AnalysisOutcome, Analyzer, NO_REPOSITORY_MESSAGE};
use repolens_protocol::{ExplainResult, ExplainSection, RawAnalysisPayload};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Answers by URL: `slow` waits for `release`, `broken` fails with an HTML page.
#[derive(Default)]
struct FakeBackend {
    release: Notify,
}

#[async_trait]
impl AnalysisBackend for FakeBackend {
    async fn analyze_repo_url(&self, repo_url: &str) -> Result<RawAnalysisPayload> {
        match repo_url {
            "slow" => {
                self.release.notified().await;
                Ok(RawAnalysisPayload::from_value(json!({ "repoUrl": "slow" })))
            }
            "broken" => Err(TransportError::Status {
                status: 500,
                body: "<html><body><pre>Internal Server Error</pre></body></html>".into(),
            }),
            url => Ok(RawAnalysisPayload::from_value(json!({
                "repoUrl": url,
                "controllers": [{ "name": "Home" }],
                "readmeSummary": "- fast"
            }))),
        }
    }

    async fn analyze_zip(&self, _path: &Path) -> Result<RawAnalysisPayload> {
        Ok(RawAnalysisPayload::from_value(json!({ "language": "Python" })))
    }

    async fn explain(&self, repo_id: &str) -> Result<ExplainResult> {
        Ok(ExplainResult {
            repo_id: repo_id.to_string(),
            summary: Some("Refreshed.".into()),
            sections: vec![ExplainSection::new("Execution Flow", "1. Run")],
        })
    }
}

#[tokio::test]
async fn successful_analysis_fills_state() {
    let analyzer = Analyzer::new(FakeBackend::default());
    let outcome = analyzer
        .analyze(AnalysisRequest::RepoUrl("acme/app".into()))
        .await;
    assert_eq!(
        outcome,
        AnalysisOutcome::Applied {
            repo_id: "acme/app".into()
        }
    );

    let state = analyzer.state().await;
    assert!(state.has_data());
    assert!(!state.loading());
    assert_eq!(state.error(), None);
    assert_eq!(state.view().readme_bullets(8), vec!["fast"]);
}

#[tokio::test]
async fn failure_records_a_safe_message_and_clears_loading() {
    let analyzer = Analyzer::new(FakeBackend::default());
    let outcome = analyzer
        .analyze(AnalysisRequest::RepoUrl("broken".into()))
        .await;

    let expected = "Something went wrong on the server. Please try again later.";
    assert_eq!(
        outcome,
        AnalysisOutcome::Failed {
            message: expected.into()
        }
    );
    let state = analyzer.snapshot().await;
    assert_eq!(state.error(), Some(expected));
    assert!(!state.loading());
    assert!(!state.has_data());
}

#[tokio::test]
async fn zip_without_repo_url_is_named_after_the_file() {
    let analyzer = Analyzer::new(FakeBackend::default());
    let outcome = analyzer
        .analyze(AnalysisRequest::Zip("/tmp/upload/project.zip".into()))
        .await;
    assert_eq!(
        outcome,
        AnalysisOutcome::Applied {
            repo_id: "project.zip".into()
        }
    );
    let state = analyzer.into_state();
    assert_eq!(state.repo_id(), Some("project.zip"));
    assert_eq!(
        state.analysis().and_then(|a| a.project_type.as_deref()),
        Some("Python")
    );
}

#[tokio::test]
async fn newer_request_supersedes_an_older_one() {
    let analyzer = Arc::new(Analyzer::new(FakeBackend::default()));

    let slow = {
        let analyzer = Arc::clone(&analyzer);
        tokio::spawn(async move { analyzer.analyze(AnalysisRequest::RepoUrl("slow".into())).await })
    };
    // Let the slow request register before the fast one starts.
    while !analyzer.state().await.loading() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let fast = analyzer
        .analyze(AnalysisRequest::RepoUrl("acme/fast".into()))
        .await;
    assert_eq!(
        fast,
        AnalysisOutcome::Applied {
            repo_id: "acme/fast".into()
        }
    );

    analyzer.backend().release.notify_one();
    assert_eq!(slow.await.unwrap(), AnalysisOutcome::Superseded);
    assert_eq!(analyzer.state().await.repo_id(), Some("acme/fast"));
}

#[tokio::test]
async fn explain_refresh_needs_a_repository() {
    let analyzer = Analyzer::new(FakeBackend::default());
    assert_eq!(
        analyzer.refresh_explain().await,
        AnalysisOutcome::Failed {
            message: NO_REPOSITORY_MESSAGE.into()
        }
    );

    analyzer
        .analyze(AnalysisRequest::RepoUrl("acme/app".into()))
        .await;
    analyzer.refresh_explain().await;
    let state = analyzer.state().await;
    assert_eq!(state.view().summary(), Some("Refreshed."));
    assert_eq!(state.view().execution_steps(), vec!["Run"]);
}
