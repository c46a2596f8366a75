use repolens_protocol::{ExplainSection, FrontendModule, MlModule, RawAnalysisPayload};
use std::fmt::Write as _;

pub const FOLDER_STRUCTURE_SECTION: &str = "Folder Structure";
pub const FOLDER_TREE_SECTION: &str = "Folder Tree";
pub const EXECUTION_FLOW_SECTION: &str = "Execution Flow";
pub const APPLICATION_CONFIG_SECTION: &str = "Application Config (Spring Boot)";
pub const FRONTEND_SECTION: &str = "Frontend Analysis";
pub const ML_SECTION: &str = "ML Pipeline";
pub const README_SECTION: &str = "README Summary";

/// Both titles a folder tree may be published under.
pub const FOLDER_SECTIONS: [&str; 2] = [FOLDER_STRUCTURE_SECTION, FOLDER_TREE_SECTION];

const MAX_FRONTEND_SECTION_ROUTES: usize = 20;
const NO_STATE_MANAGEMENT: &str = "None detected";

pub(crate) fn build_sections(raw: &RawAnalysisPayload) -> Vec<ExplainSection> {
    let explanation = raw.explanation.as_ref();
    let mut sections = Vec::new();

    if let Some(tree) = explanation.and_then(|e| e.folder_tree_text.as_ref()) {
        sections.push(ExplainSection::new(FOLDER_STRUCTURE_SECTION, tree.as_str()));
    } else if let Some(tree) = raw.folder_tree_text.as_ref() {
        sections.push(ExplainSection::new(FOLDER_TREE_SECTION, tree.as_str()));
    }

    if let Some(flow) = explanation.and_then(|e| e.execution_flow.as_ref()) {
        sections.push(ExplainSection::new(EXECUTION_FLOW_SECTION, flow.as_str()));
    }

    if let Some(config) = raw.application_config.as_ref() {
        sections.push(ExplainSection::new(APPLICATION_CONFIG_SECTION, config.as_str()));
    }

    if let Some(fe) = raw.primary_frontend() {
        sections.push(ExplainSection::new(FRONTEND_SECTION, frontend_content(fe)));
    }

    if let Some(ml) = raw.primary_ml().filter(|ml| !ml.libs.is_empty()) {
        sections.push(ExplainSection::new(ML_SECTION, ml_content(ml)));
    }

    if let Some(readme) = raw.readme_summary.as_ref() {
        sections.push(ExplainSection::new(README_SECTION, readme.as_str()));
    }

    sections
}

fn frontend_content(fe: &FrontendModule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Framework: {}", fe.framework.as_deref().unwrap_or("—"));
    let _ = writeln!(out, "Render: {}", fe.render_mode.as_deref().unwrap_or("SPA"));

    let detected_state = fe
        .state_management
        .first()
        .is_some_and(|first| first != NO_STATE_MANAGEMENT);
    if detected_state {
        let _ = writeln!(out, "State: {}", fe.state_management.join(", "));
    }

    if !fe.routes.is_empty() {
        let _ = write!(out, "\nRoutes ({}):\n", fe.routes.len());
        let lines: Vec<String> = fe
            .routes
            .iter()
            .take(MAX_FRONTEND_SECTION_ROUTES)
            .map(|route| {
                let target = route
                    .component
                    .as_deref()
                    .or(route.file.as_deref())
                    .unwrap_or_default();
                format!("  {} → {}", route.path, target)
            })
            .collect();
        out.push_str(&lines.join("\n"));
    }

    out
}

fn ml_content(ml: &MlModule) -> String {
    let mut out = format!("Libs: {}\n", ml.libs.join(", "));
    if let Some(explanation) = ml.pipeline_explanation.as_deref() {
        out.push('\n');
        out.push_str(explanation);
    }
    out
}
