use crate::view::{DashboardView, DistributionItem, OverviewItem, TOP_FILES};
use repolens_protocol::{ImportantFile, RiskItem, TreeNode};
use repolens_text::heuristics::{DEFAULT_FLOW_ENTRIES, FOLDER_ROOTS, README_BULLETS};
use repolens_text::{DatabaseEntry, FlowEntry};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub readme_bullets: usize,
    pub folder_roots: usize,
    pub top_files: usize,
    pub flow_entries: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            readme_bullets: README_BULLETS,
            folder_roots: FOLDER_ROOTS,
            top_files: TOP_FILES,
            flow_entries: DEFAULT_FLOW_ENTRIES,
        }
    }
}

/// Every dashboard card in one serializable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub repo_id: Option<String>,
    pub summary: Option<String>,
    pub overview: Vec<OverviewItem>,
    pub core_components: Vec<String>,
    pub top_files: Vec<ImportantFile>,
    pub distribution: Vec<DistributionItem>,
    pub risks: Vec<RiskItem>,
    pub folder_roots: Vec<String>,
    pub folder_tree: Vec<TreeNode>,
    pub execution_steps: Vec<String>,
    pub execution_flow: Vec<FlowEntry>,
    pub readme_bullets: Vec<String>,
    pub database: Vec<DatabaseEntry>,
    pub workflow_diagram: String,
}

impl DashboardReport {
    pub fn build(view: &DashboardView<'_>, limits: ReportLimits) -> Self {
        Self {
            repo_id: view.repo_id().map(str::to_string),
            summary: view.summary().map(str::to_string),
            overview: view.overview_items(),
            core_components: view
                .analysis()
                .map(|a| a.core_components.clone())
                .unwrap_or_default(),
            top_files: view.top_files(limits.top_files).into_iter().cloned().collect(),
            distribution: view.component_distribution(),
            risks: view.risks().to_vec(),
            folder_roots: view.folder_roots(limits.folder_roots),
            folder_tree: view.folder_tree(),
            execution_steps: view.execution_steps(),
            execution_flow: view.execution_flow_entries(limits.flow_entries),
            readme_bullets: view.readme_bullets(limits.readme_bullets),
            database: view.database_entries(),
            workflow_diagram: view.workflow_diagram(),
        }
    }
}
