//! Important-file ranking.
//!
//! Importance is a provenance label: each source of a path maps to a fixed tier.
//! Nothing here looks at the dependency graph.

use crate::components::basename;
use repolens_protocol::{ImportantFile, RawAnalysisPayload};

pub const ROUTE_FILE_IMPORTANCE: u8 = 85;
pub const CONTROLLER_FILE_IMPORTANCE: u8 = 80;
pub const SERVICE_FILE_IMPORTANCE: u8 = 75;
pub const MODEL_FILE_IMPORTANCE: u8 = 70;
pub const FRONTEND_PAGE_IMPORTANCE: u8 = 65;
pub const FRONTEND_COMPONENT_IMPORTANCE: u8 = 60;
pub const TRAINING_SCRIPT_IMPORTANCE: u8 = 75;
pub const NOTEBOOK_IMPORTANCE: u8 = 70;

const MAX_RANKED_PAGES: usize = 15;
const MAX_RANKED_COMPONENTS: usize = 10;
const MAX_RANKED_TRAINING_SCRIPTS: usize = 5;
const MAX_RANKED_NOTEBOOKS: usize = 5;

pub(crate) fn rank_files(raw: &RawAnalysisPayload) -> Vec<ImportantFile> {
    let mut files = Vec::new();

    for route in &raw.routes {
        push(
            &mut files,
            route.source_file.as_deref(),
            ROUTE_FILE_IMPORTANCE,
            route.label(),
        );
    }
    for controller in &raw.controllers {
        push(
            &mut files,
            controller.file.as_deref(),
            CONTROLLER_FILE_IMPORTANCE,
            controller.name.clone(),
        );
    }
    for service in &raw.services {
        push(
            &mut files,
            service.file.as_deref(),
            SERVICE_FILE_IMPORTANCE,
            service.name.clone(),
        );
    }
    for model in &raw.models {
        push(
            &mut files,
            model.file.as_deref(),
            MODEL_FILE_IMPORTANCE,
            model.name.clone(),
        );
    }

    if let Some(fe) = raw.primary_frontend() {
        for page in fe.pages.iter().take(MAX_RANKED_PAGES) {
            push(
                &mut files,
                Some(page),
                FRONTEND_PAGE_IMPORTANCE,
                basename(page).to_string(),
            );
        }
        for component in fe.components.iter().take(MAX_RANKED_COMPONENTS) {
            push(
                &mut files,
                Some(component),
                FRONTEND_COMPONENT_IMPORTANCE,
                basename(component).to_string(),
            );
        }
    }

    if let Some(ml) = raw.primary_ml() {
        for script in ml.training_scripts.iter().take(MAX_RANKED_TRAINING_SCRIPTS) {
            push(
                &mut files,
                Some(script),
                TRAINING_SCRIPT_IMPORTANCE,
                "train".to_string(),
            );
        }
        for notebook in ml.notebooks.iter().take(MAX_RANKED_NOTEBOOKS) {
            push(
                &mut files,
                Some(notebook),
                NOTEBOOK_IMPORTANCE,
                "notebook".to_string(),
            );
        }
    }

    files
}

// Entries without a path cannot be ranked.
fn push(files: &mut Vec<ImportantFile>, path: Option<&str>, importance: u8, label: String) {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return;
    };
    files.push(ImportantFile {
        path: path.to_string(),
        importance,
        label: Some(label).filter(|l| !l.is_empty()),
    });
}
