//! Read-only projections over [`DashboardState`]. Every value is recomputed from
//! the held records on each call.

use crate::diagram;
use crate::state::DashboardState;
use repolens_normalizer::{
    CONTROLLERS_LAYER, EXECUTION_FLOW_SECTION, FOLDER_SECTIONS, MODELS_LAYER, README_SECTION,
    SERVICES_LAYER,
};
use repolens_protocol::{
    AnalysisResult, ExplainResult, ExplainSection, ImportantFile, RiskItem, TreeNode,
};
use repolens_text::{
    extract_bullets, extract_flow, extract_folder_roots, extract_steps, parse_tree,
    split_database, DatabaseEntry, FlowEntry,
};
use serde::Serialize;

/// Files listed in the heatmap.
pub const TOP_FILES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionItem {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    state: &'a DashboardState,
}

impl<'a> DashboardView<'a> {
    pub(crate) fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }

    pub fn has_data(&self) -> bool {
        self.state.has_data()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&'a str> {
        self.state.error()
    }

    pub fn repo_id(&self) -> Option<&'a str> {
        self.state.repo_id()
    }

    pub fn analysis(&self) -> Option<&'a AnalysisResult> {
        self.state.analysis()
    }

    pub fn explain(&self) -> Option<&'a ExplainResult> {
        self.state.explain()
    }

    pub fn summary(&self) -> Option<&'a str> {
        self.explain().and_then(|e| e.summary.as_deref())
    }

    pub fn overview_items(&self) -> Vec<OverviewItem> {
        let Some(a) = self.analysis() else {
            return Vec::new();
        };
        let mut items = Vec::new();
        let mut push = |label, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                items.push(OverviewItem { label, value });
            }
        };
        push("Project type", a.project_type.clone());
        push("Entry point", a.entry_point.clone());
        push("Architecture", a.architecture_style.clone());
        push("Frameworks", a.frameworks.as_ref().map(|f| f.join(", ")));
        push("Database", a.database.clone());
        items
    }

    pub fn sections(&self) -> &'a [ExplainSection] {
        self.explain()
            .map(|e| e.sections.as_slice())
            .unwrap_or_default()
    }

    pub fn first_section(&self) -> Option<&'a ExplainSection> {
        self.sections().first()
    }

    /// First section titled `title`, else the first section.
    pub fn section(&self, title: &str) -> Option<&'a ExplainSection> {
        self.explain().and_then(|e| e.section_or_first(title))
    }

    pub fn folder_section(&self) -> Option<&'a ExplainSection> {
        self.explain().and_then(|e| e.section_any(&FOLDER_SECTIONS))
    }

    pub fn execution_section(&self) -> Option<&'a ExplainSection> {
        self.explain().and_then(|e| e.section(EXECUTION_FLOW_SECTION))
    }

    pub fn readme_section(&self) -> Option<&'a ExplainSection> {
        self.explain().and_then(|e| e.section(README_SECTION))
    }

    /// Sections not already shown as folder, execution or README cards.
    pub fn other_sections(&self) -> Vec<&'a ExplainSection> {
        let shown = [
            self.folder_section(),
            self.execution_section(),
            self.readme_section(),
        ];
        self.sections()
            .iter()
            .filter(|section| {
                !shown
                    .iter()
                    .flatten()
                    .any(|taken| std::ptr::eq(*taken, *section))
            })
            .collect()
    }

    pub fn risks(&self) -> &'a [RiskItem] {
        self.analysis()
            .and_then(|a| a.risks.as_deref())
            .unwrap_or_default()
    }

    pub fn circular_dependencies(&self) -> &'a [String] {
        self.analysis()
            .and_then(|a| a.circular_dependencies.as_deref())
            .unwrap_or_default()
    }

    /// Highest importance first; ties keep payload order.
    pub fn top_files(&self, limit: usize) -> Vec<&'a ImportantFile> {
        let mut files: Vec<&ImportantFile> = self
            .analysis()
            .map(|a| a.important_files().iter().collect())
            .unwrap_or_default();
        files.sort_by(|a, b| b.importance.cmp(&a.importance));
        files.truncate(limit);
        files
    }

    /// Routes, Controllers, Services and Models, each only when non-zero.
    pub fn component_distribution(&self) -> Vec<DistributionItem> {
        let Some(a) = self.analysis() else {
            return Vec::new();
        };
        let routes = a
            .route_traces
            .as_ref()
            .map_or_else(|| a.workflows().len(), Vec::len);
        let layer_size = |name: &str| a.layer(name).map_or(0, |layer| layer.components.len());

        [
            ("Routes", routes),
            ("Controllers", layer_size(CONTROLLERS_LAYER)),
            ("Services", layer_size(SERVICES_LAYER)),
            ("Models", layer_size(MODELS_LAYER)),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| DistributionItem { label, count })
        .collect()
    }

    /// Folder section lines, right-trimmed, blanks dropped.
    pub fn folder_tree_text(&self) -> String {
        let content = self.folder_section().map_or("", |s| s.content.as_str());
        content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn folder_tree(&self) -> Vec<TreeNode> {
        parse_tree(&self.folder_tree_text())
    }

    pub fn folder_roots(&self, limit: usize) -> Vec<String> {
        extract_folder_roots(&self.folder_tree_text(), limit)
    }

    pub fn execution_steps(&self) -> Vec<String> {
        extract_steps(self.execution_text())
    }

    pub fn execution_flow_entries(&self, limit: usize) -> Vec<FlowEntry> {
        extract_flow(self.execution_text(), limit)
    }

    pub fn readme_bullets(&self, limit: usize) -> Vec<String> {
        let content = self.readme_section().map_or("", |s| s.content.as_str());
        extract_bullets(content, limit)
    }

    pub fn database_entries(&self) -> Vec<DatabaseEntry> {
        self.analysis()
            .and_then(|a| a.database.as_deref())
            .map(split_database)
            .unwrap_or_default()
    }

    pub fn workflow_diagram(&self) -> String {
        let analysis = self.analysis();
        diagram::workflow_diagram(
            analysis.and_then(|a| a.execution_flow.as_deref()),
            analysis.map(AnalysisResult::workflows).unwrap_or_default(),
        )
    }

    pub fn execution_flow_plain_text(&self) -> Option<&'a str> {
        diagram::execution_flow_plain_text(self.analysis().and_then(|a| a.execution_flow.as_deref()))
    }

    fn execution_text(&self) -> &'a str {
        self.execution_section().map_or("", |s| s.content.as_str())
    }
}
