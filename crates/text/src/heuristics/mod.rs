//! Best-effort classifiers over free-form analysis prose.
//!
//! Every function here is total: unparseable input degrades to an empty list or to
//! the whole blob as a single entry.

mod bullets;
mod database;
mod flow;
mod roots;
mod steps;

use once_cell::sync::Lazy;
use regex::Regex;

pub use bullets::{extract_bullets, EXPANDED_README_BULLETS, README_BULLETS};
pub use database::{split_database, DatabaseEntry, MAX_DATABASE_FIELDS};
pub use flow::{extract_flow, FlowEntry, DEFAULT_FLOW_ENTRIES};
pub use roots::{extract_folder_roots, EXPANDED_FOLDER_ROOTS, FOLDER_ROOTS};
pub use steps::{extract_steps, MAX_STEPS};

/// Leading `"<digits>."` list marker.
static RE_NUMBER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("number marker regex"));

/// Start of an inline `"<digits>. "` marker inside a single-line blob.
static RE_INLINE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\.\s").expect("inline marker regex"));

fn strip_number_marker(line: &str) -> &str {
    match RE_NUMBER_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Candidate step lines: the non-blank lines when there are several, otherwise the
/// blob cut in front of every inline number marker.
fn step_candidates(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() > 1 {
        return lines;
    }

    let mut cuts: Vec<usize> = RE_INLINE_MARKER
        .find_iter(trimmed)
        .map(|m| m.start())
        .filter(|&start| start > 0)
        .collect();
    cuts.push(trimmed.len());

    let mut candidates = Vec::with_capacity(cuts.len());
    let mut start = 0;
    for cut in cuts {
        let piece = trimmed[start..cut].trim();
        if !piece.is_empty() {
            candidates.push(piece);
        }
        start = cut;
    }
    if candidates.is_empty() {
        candidates.push(trimmed);
    }
    candidates
}
