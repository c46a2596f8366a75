use crate::components::basename;
use repolens_protocol::{ArchitectureLayer, RawAnalysisPayload, WorkflowSummary};

pub const CONTROLLERS_LAYER: &str = "Controllers";
pub const SERVICES_LAYER: &str = "Services";
pub const MODELS_LAYER: &str = "Models";
pub const UI_LAYER: &str = "UI Components";
pub const ML_LAYER: &str = "ML Pipeline";

const UI_LAYER_COMPONENTS: usize = 20;
const UI_LAYER_PAGES: usize = 15;
const ML_LAYER_TRAINING: usize = 5;
const ML_LAYER_INFERENCE: usize = 3;

const MAX_FRONTEND_WORKFLOWS: usize = 25;
const TRAINING_WORKFLOW_SCRIPTS: usize = 3;
const INFERENCE_WORKFLOW_SCRIPTS: usize = 2;

pub(crate) fn build_layers(raw: &RawAnalysisPayload) -> Vec<ArchitectureLayer> {
    let mut layers = Vec::new();

    if !raw.controllers.is_empty() {
        layers.push(layer(
            CONTROLLERS_LAYER,
            "Request handlers",
            raw.controllers.iter().map(|c| c.name.clone()),
        ));
    }
    if !raw.services.is_empty() {
        layers.push(layer(
            SERVICES_LAYER,
            "Business logic",
            raw.services.iter().map(|s| s.name.clone()),
        ));
    }
    if !raw.models.is_empty() {
        layers.push(layer(
            MODELS_LAYER,
            "Data models / Entities",
            raw.models.iter().map(|m| m.name.clone()),
        ));
    }

    if let Some(fe) = raw.primary_frontend() {
        if !fe.components.is_empty() || !fe.pages.is_empty() {
            let components = fe
                .components
                .iter()
                .take(UI_LAYER_COMPONENTS)
                .chain(fe.pages.iter().take(UI_LAYER_PAGES))
                .map(|path| basename(path).to_string());
            let description = format!(
                "{} – render: {}",
                fe.framework.as_deref().unwrap_or("Frontend"),
                fe.render_mode.as_deref().unwrap_or("SPA")
            );
            layers.push(layer(UI_LAYER, &description, components));
        }
    }

    if let Some(ml) = raw.primary_ml().filter(|ml| !ml.libs.is_empty()) {
        let components = ml
            .training_scripts
            .iter()
            .take(ML_LAYER_TRAINING)
            .chain(ml.inference_scripts.iter().take(ML_LAYER_INFERENCE))
            .chain(ml.libs.iter())
            .cloned();
        let description = format!("Libs: {}", ml.libs.join(", "));
        layers.push(layer(ML_LAYER, &description, components));
    }

    layers
}

fn layer(
    name: &str,
    description: &str,
    components: impl Iterator<Item = String>,
) -> ArchitectureLayer {
    ArchitectureLayer {
        name: name.to_string(),
        description: Some(description.to_string()),
        components: components.filter(|c| !c.trim().is_empty()).collect(),
    }
}

pub(crate) fn build_workflows(raw: &RawAnalysisPayload) -> Vec<WorkflowSummary> {
    let mut workflows: Vec<WorkflowSummary> = raw
        .routes
        .iter()
        .map(|route| WorkflowSummary {
            name: route.label(),
            description: route
                .handler
                .as_ref()
                .map(|handler| format!("Handler: {handler}")),
        })
        .collect();

    if let Some(fe) = raw.primary_frontend() {
        for route in fe.routes.iter().take(MAX_FRONTEND_WORKFLOWS) {
            let name = if route.path.is_empty() {
                "/".to_string()
            } else {
                route.path.clone()
            };
            let description = route
                .component
                .as_ref()
                .map(|component| format!("→ {component}"))
                .or_else(|| route.kind.clone());
            workflows.push(WorkflowSummary { name, description });
        }
    }

    if let Some(ml) = raw.primary_ml() {
        if !ml.training_scripts.is_empty() {
            workflows.push(WorkflowSummary {
                name: "Training".to_string(),
                description: Some(join_first(&ml.training_scripts, TRAINING_WORKFLOW_SCRIPTS)),
            });
        }
        if !ml.inference_scripts.is_empty() {
            workflows.push(WorkflowSummary {
                name: "Inference".to_string(),
                description: Some(join_first(
                    &ml.inference_scripts,
                    INFERENCE_WORKFLOW_SCRIPTS,
                )),
            });
        }
    }

    workflows
}

fn join_first(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}
