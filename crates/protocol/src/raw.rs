use serde::Deserialize;
use serde_json::Value;

use crate::lenient;

/// Analysis payload as returned by the analysis backend.
///
/// The shape depends on the detected project type: backend services carry
/// routes/controllers/models, SPAs carry `frontendModules`, ML repositories carry
/// `mlModules`, and monorepos any combination. Every field is optional and decoding
/// is lenient (see [`RawAnalysisPayload::from_value`]).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalysisPayload {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub repo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub project_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub framework: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub architecture: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub entry_point: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub folder_tree_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub routes: Vec<RawRoute>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub controllers: Vec<RawController>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub models: Vec<RawModel>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub services: Vec<RawService>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub application_config: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub frontend_modules: Vec<FrontendModule>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ml_modules: Vec<MlModule>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub readme_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub explanation: Option<Explanation>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub risks: Vec<RawRisk>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub circular_dependencies: Vec<String>,
}

impl RawAnalysisPayload {
    /// Decode any JSON value. Non-objects yield an empty payload; object fields
    /// with unexpected types are treated as absent.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Parse JSON text. Only malformed JSON is an error.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// Repository identifier; empty when the backend did not echo one.
    pub fn repo_id(&self) -> &str {
        self.repo_url.as_deref().unwrap_or_default()
    }

    pub fn primary_frontend(&self) -> Option<&FrontendModule> {
        self.frontend_modules.first()
    }

    pub fn primary_ml(&self) -> Option<&MlModule> {
        self.ml_modules.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
    #[serde(default, deserialize_with = "lenient::string")]
    pub method: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub path: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub handler: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub source_file: Option<String>,
}

impl RawRoute {
    /// `"{METHOD} {PATH}"`, trimmed when either half is missing.
    pub fn label(&self) -> String {
        format!("{} {}", self.method, self.path).trim().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawController {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModel {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub schema_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawService {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendModule {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub root: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub framework: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub entry_point: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub components: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub pages: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub routes: Vec<FrontendRoute>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub state_management: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub render_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub execution_flow: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendRoute {
    #[serde(default, deserialize_with = "lenient::string")]
    pub path: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub component: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::opt_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlModule {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub root: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub libs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub training_scripts: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub inference_scripts: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub preprocessing_scripts: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub evaluation_scripts: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub notebooks: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub dataset_folders: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub pipeline_explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub execution_flow: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub folder_tree_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRisk {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}
