//! # Repolens Client
//!
//! Transport to the analysis backend:
//!
//! - `POST {base}/analyze/json` with `{"repoUrl": ...}`
//! - `POST {base}/analyze-zip/json` with a multipart `zipfile` field
//! - `POST {base}/explain/{repoId}`
//!
//! Responses are decoded leniently into [`RawAnalysisPayload`](repolens_protocol::RawAnalysisPayload).
//! Failures are [`TransportError`]s; [`TransportError::user_message`] turns any of
//! them into a short sentence without HTML or stack traces.

mod backend;
mod config;
mod error;
mod http;
pub mod sanitize;

pub use backend::{AnalysisBackend, AnalysisRequest, EXPLAIN_FALLBACK_MESSAGE};
pub use config::{ClientConfig, DEFAULT_ANALYZE_TIMEOUT, DEFAULT_BASE_URL, DEFAULT_EXPLAIN_TIMEOUT};
pub use error::{ErrorKind, Result, TransportError};
pub use http::HttpAnalysisClient;
pub use sanitize::sanitize_message;
