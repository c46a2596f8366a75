//! # Repolens Protocol
//!
//! Types exchanged between the analysis backend, the normalizer and the views.
//!
//! ```text
//! RawAnalysisPayload (shape varies by project type, lenient decode)
//!     │
//!     └──> normalize
//!            ├─ AnalysisResult   (architecture view model)
//!            └─ ExplainResult    (summary + titled text sections)
//!                   │
//!                   └──> TreeNode[] / heuristic lists (recomputed per call)
//! ```

mod analysis;
mod explain;
mod lenient;
mod raw;
mod tree;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use analysis::{
    AnalysisResult, ArchitectureLayer, ImportantFile, RiskItem, RouteTrace, Severity,
    WorkflowSummary,
};
pub use explain::{ExplainResult, ExplainSection};
pub use raw::{
    Explanation, FrontendModule, FrontendRoute, MlModule, RawAnalysisPayload, RawController,
    RawModel, RawRisk, RawRoute, RawService,
};
pub use tree::TreeNode;

/// Both records produced from one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedAnalysis {
    pub analysis: AnalysisResult,
    pub explain: ExplainResult,
}
