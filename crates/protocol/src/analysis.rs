use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable architecture view of an analyzed repository, independent of project type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub repo_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<Vec<String>>,
    /// Display string (`"User: id, email; Order: id"`), not structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<ArchitectureLayer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<WorkflowSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<RiskItem>>,
    /// Deduplicated, first occurrence wins.
    #[serde(default)]
    pub core_components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_flow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important_files: Option<Vec<ImportantFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circular_dependencies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_traces: Option<Vec<RouteTrace>>,
}

impl AnalysisResult {
    pub fn layers(&self) -> &[ArchitectureLayer] {
        self.layers.as_deref().unwrap_or_default()
    }

    pub fn workflows(&self) -> &[WorkflowSummary] {
        self.workflows.as_deref().unwrap_or_default()
    }

    pub fn important_files(&self) -> &[ImportantFile] {
        self.important_files.as_deref().unwrap_or_default()
    }

    pub fn route_traces(&self) -> &[RouteTrace] {
        self.route_traces.as_deref().unwrap_or_default()
    }

    pub fn layer(&self, name: &str) -> Option<&ArchitectureLayer> {
        self.layers().iter().find(|layer| layer.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureLayer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub components: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A file ranked for the importance heatmap. Higher `importance` ranks first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportantFile {
    pub path: String,
    /// 0-100 by convention.
    pub importance: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteTrace {
    pub route: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
