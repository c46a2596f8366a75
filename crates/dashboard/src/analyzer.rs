use crate::state::DashboardState;
use repolens_client::{AnalysisBackend, AnalysisRequest, EXPLAIN_FALLBACK_MESSAGE};
use repolens_normalizer::normalize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, RwLockReadGuard};

pub const NO_REPOSITORY_MESSAGE: &str = "No repository loaded. Analyze a repository first.";

/// How one request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Applied { repo_id: String },
    Failed { message: String },
    /// A newer request started before this one finished; its result was dropped.
    Superseded,
}

/// Owns the dashboard state and is its only writer.
///
/// Requests may overlap. Each takes a generation number and only the newest one
/// may write its result.
pub struct Analyzer<B> {
    backend: B,
    state: RwLock<DashboardState>,
    generation: AtomicU64,
}

impl<B: AnalysisBackend> Analyzer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: RwLock::new(DashboardState::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn state(&self) -> RwLockReadGuard<'_, DashboardState> {
        self.state.read().await
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub fn into_state(self) -> DashboardState {
        self.state.into_inner()
    }

    pub async fn analyze(&self, request: AnalysisRequest) -> AnalysisOutcome {
        let generation = self.begin().await;
        let result = self.backend.analyze(&request).await;

        let mut state = self.state.write().await;
        if !self.is_current(generation) {
            log::debug!("dropping superseded analysis #{generation}");
            return AnalysisOutcome::Superseded;
        }

        let outcome = match result {
            Ok(raw) => {
                let mut normalized = normalize(&raw);
                if normalized.analysis.repo_id.is_empty() {
                    let label = request_label(&request);
                    normalized.analysis.repo_id = label.clone();
                    normalized.explain.repo_id = label;
                }
                let repo_id = normalized.analysis.repo_id.clone();
                log::info!("analysis #{generation} applied for {repo_id}");
                state.apply(normalized);
                AnalysisOutcome::Applied { repo_id }
            }
            Err(err) => {
                log::warn!("analysis #{generation} failed ({:?}): {err}", err.kind());
                let message = err.user_message(request.fallback_message());
                state.set_error(Some(message.clone()));
                AnalysisOutcome::Failed { message }
            }
        };
        state.set_loading(false);
        outcome
    }

    /// Re-fetch the explanation for the loaded repository.
    pub async fn refresh_explain(&self) -> AnalysisOutcome {
        let Some(repo_id) = self.state.read().await.repo_id().map(str::to_string) else {
            return AnalysisOutcome::Failed {
                message: NO_REPOSITORY_MESSAGE.to_string(),
            };
        };

        let generation = self.begin().await;
        let result = self.backend.explain(&repo_id).await;

        let mut state = self.state.write().await;
        if !self.is_current(generation) {
            log::debug!("dropping superseded explanation #{generation}");
            return AnalysisOutcome::Superseded;
        }

        let outcome = match result {
            Ok(explain) => {
                state.set_explain(Some(explain));
                AnalysisOutcome::Applied { repo_id }
            }
            Err(err) => {
                log::warn!("explanation #{generation} failed ({:?}): {err}", err.kind());
                let message = err.user_message(EXPLAIN_FALLBACK_MESSAGE);
                state.set_error(Some(message.clone()));
                AnalysisOutcome::Failed { message }
            }
        };
        state.set_loading(false);
        outcome
    }

    async fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().await;
        state.set_loading(true);
        state.set_error(None);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

fn request_label(request: &AnalysisRequest) -> String {
    match request {
        AnalysisRequest::RepoUrl(url) => url.trim().to_string(),
        AnalysisRequest::Zip(path) => path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
    }
}
