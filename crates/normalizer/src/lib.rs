//! # Repolens Normalizer
//!
//! Folds a raw analysis payload into the two stable records the dashboard reads.
//!
//! Backend, frontend and ML payload shapes are independent, optional
//! contributors to the same accumulator, so a monorepo payload carrying all three
//! yields one merged view:
//!
//! ```text
//! RawAnalysisPayload
//!     │
//!     ├──> controllers / services / models ─┐
//!     ├──> frontendModules[0]               ├─> layers, workflows, important files
//!     ├──> mlModules[0]                     ┘
//!     │
//!     └──> explanation / README / config ──> explain sections
//! ```
//!
//! ## Example
//!
//! ```
//! use repolens_protocol::RawAnalysisPayload;
//!
//! let raw = RawAnalysisPayload::from_json_str(r#"{"repoUrl": "acme/api"}"#).unwrap();
//! let normalized = repolens_normalizer::normalize(&raw);
//! assert_eq!(normalized.analysis.repo_id, "acme/api");
//! assert!(normalized.analysis.layers.is_none());
//! ```

mod components;
mod files;
mod layers;
mod sections;

use repolens_protocol::{
    AnalysisResult, ExplainResult, NormalizedAnalysis, RawAnalysisPayload, RiskItem, RouteTrace,
    Severity,
};

pub use components::{basename, MAX_CORE_FRONTEND_COMPONENTS, MAX_CORE_FRONTEND_PAGES};
pub use files::{
    CONTROLLER_FILE_IMPORTANCE, FRONTEND_COMPONENT_IMPORTANCE, FRONTEND_PAGE_IMPORTANCE,
    MODEL_FILE_IMPORTANCE, NOTEBOOK_IMPORTANCE, ROUTE_FILE_IMPORTANCE, SERVICE_FILE_IMPORTANCE,
    TRAINING_SCRIPT_IMPORTANCE,
};
pub use layers::{CONTROLLERS_LAYER, ML_LAYER, MODELS_LAYER, SERVICES_LAYER, UI_LAYER};
pub use sections::{
    APPLICATION_CONFIG_SECTION, EXECUTION_FLOW_SECTION, FOLDER_SECTIONS,
    FOLDER_STRUCTURE_SECTION, FOLDER_TREE_SECTION, FRONTEND_SECTION, ML_SECTION, README_SECTION,
};

/// Normalize one payload. Total: absent inputs only ever produce absent outputs.
#[must_use]
pub fn normalize(raw: &RawAnalysisPayload) -> NormalizedAnalysis {
    let repo_id = raw.repo_id().to_string();
    let explanation = raw.explanation.as_ref();

    let layers = layers::build_layers(raw);
    let workflows = layers::build_workflows(raw);
    let important_files = files::rank_files(raw);

    log::debug!(
        "normalize {repo_id:?}: {} routes, {} controllers, {} services, {} models, {} frontend, {} ml",
        raw.routes.len(),
        raw.controllers.len(),
        raw.services.len(),
        raw.models.len(),
        raw.frontend_modules.len(),
        raw.ml_modules.len(),
    );

    let analysis = AnalysisResult {
        repo_id: repo_id.clone(),
        project_type: raw.project_type.clone().or_else(|| raw.language.clone()),
        entry_point: raw.entry_point.clone(),
        architecture_style: raw.architecture.clone(),
        frameworks: raw.framework.clone().map(|framework| vec![framework]),
        database: database_description(raw),
        layers: non_empty(layers),
        workflows: non_empty(workflows),
        risks: non_empty(risks(raw)),
        core_components: components::core_components(raw),
        execution_flow: explanation.and_then(|e| e.execution_flow.clone()),
        important_files: non_empty(important_files),
        circular_dependencies: non_empty(raw.circular_dependencies.clone()),
        route_traces: non_empty(route_traces(raw)),
    };

    let explain = ExplainResult {
        repo_id,
        summary: explanation
            .and_then(|e| e.summary.clone())
            .or_else(|| raw.readme_summary.clone()),
        sections: sections::build_sections(raw),
    };

    NormalizedAnalysis { analysis, explain }
}

/// `"{name}: {schemaSummary}"` per model joined with `"; "`.
fn database_description(raw: &RawAnalysisPayload) -> Option<String> {
    if raw.models.is_empty() {
        return None;
    }
    let parts: Vec<String> = raw
        .models
        .iter()
        .map(|model| match model.schema_summary.as_deref() {
            Some(summary) => format!("{}: {summary}", model.name),
            None => model.name.clone(),
        })
        .collect();
    Some(parts.join("; "))
}

fn route_traces(raw: &RawAnalysisPayload) -> Vec<RouteTrace> {
    raw.routes
        .iter()
        .map(|route| RouteTrace {
            route: route.label(),
            controller: route.handler.clone(),
            service: None,
            model: None,
        })
        .collect()
}

fn risks(raw: &RawAnalysisPayload) -> Vec<RiskItem> {
    raw.risks
        .iter()
        .filter(|risk| !risk.title.trim().is_empty())
        .map(|risk| RiskItem {
            title: risk.title.clone(),
            severity: risk.severity.as_deref().and_then(Severity::parse),
            description: risk.description.clone(),
        })
        .collect()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolens_protocol::{Explanation, RawModel, RawRisk};

    #[test]
    fn database_description_joins_models() {
        let raw = RawAnalysisPayload {
            models: vec![
                RawModel {
                    name: "User".into(),
                    schema_summary: Some("id, email".into()),
                    ..Default::default()
                },
                RawModel {
                    name: "Tag".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            database_description(&raw).as_deref(),
            Some("User: id, email; Tag")
        );
    }

    #[test]
    fn summary_falls_back_to_readme() {
        let raw = RawAnalysisPayload {
            readme_summary: Some("From README".into()),
            explanation: Some(Explanation::default()),
            ..Default::default()
        };
        assert_eq!(
            normalize(&raw).explain.summary.as_deref(),
            Some("From README")
        );
    }

    #[test]
    fn unknown_risk_severity_is_dropped_not_the_risk() {
        let raw = RawAnalysisPayload {
            risks: vec![RawRisk {
                title: "Tight coupling".into(),
                severity: Some("critical".into()),
                description: None,
            }],
            ..Default::default()
        };
        let risks = normalize(&raw).analysis.risks.expect("risks");
        assert_eq!(risks[0].severity, None);
    }
}
