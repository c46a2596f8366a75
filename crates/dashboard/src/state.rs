use crate::view::DashboardView;
use repolens_protocol::{AnalysisResult, ExplainResult, NormalizedAnalysis};

/// Everything the dashboard shows. Mutated only through these methods; readers
/// go through [`DashboardState::view`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    repo_id: Option<String>,
    analysis: Option<AnalysisResult>,
    explain: Option<ExplainResult>,
    loading: bool,
    error: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unsetting the repository drops both records.
    pub fn set_repo_id(&mut self, repo_id: Option<String>) {
        if repo_id.is_none() {
            self.analysis = None;
            self.explain = None;
        }
        self.repo_id = repo_id;
        self.error = None;
    }

    pub fn set_analysis(&mut self, analysis: Option<AnalysisResult>) {
        self.analysis = analysis;
        self.error = None;
    }

    pub fn set_explain(&mut self, explain: Option<ExplainResult>) {
        self.explain = explain;
        self.error = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_full_state(
        &mut self,
        repo_id: String,
        analysis: Option<AnalysisResult>,
        explain: Option<ExplainResult>,
    ) {
        *self = Self {
            repo_id: Some(repo_id),
            analysis,
            explain,
            loading: false,
            error: None,
        };
    }

    /// Install a freshly normalized analysis for its repository.
    pub fn apply(&mut self, normalized: NormalizedAnalysis) {
        self.set_repo_id(Some(normalized.analysis.repo_id.clone()));
        self.set_analysis(Some(normalized.analysis));
        self.set_explain(Some(normalized.explain));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn repo_id(&self) -> Option<&str> {
        self.repo_id.as_deref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn explain(&self) -> Option<&ExplainResult> {
        self.explain.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A repository is selected and at least one record arrived for it.
    pub fn has_data(&self) -> bool {
        self.repo_id.is_some() && (self.analysis.is_some() || self.explain.is_some())
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView::new(self)
    }
}
