use super::{step_candidates, strip_number_marker};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Entries shown for an execution flow unless the caller asks otherwise.
pub const DEFAULT_FLOW_ENTRIES: usize = 8;

static RE_HTTP_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(GET|POST|PUT|PATCH|DELETE)\s+\S+").expect("http route regex")
});

/// `lhs -> rhs`, `lhs → rhs`, `lhs => rhs`, dashes included.
static RE_ARROW_MAPPING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\S.*?(?:->|→|=>|—|–|\s-\s)\s*\S").expect("arrow mapping regex")
});

const ROUTES_HEADER: &str = "routes:";

/// One rendered item of an execution flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FlowEntry {
    Step(String),
    Routes(Vec<String>),
}

/// Execution-flow prose as steps, with `routes:` blocks gathered into
/// [`FlowEntry::Routes`] in the position they appear.
#[must_use]
pub fn extract_flow(text: &str, limit: usize) -> Vec<FlowEntry> {
    let mut entries = Vec::new();
    let mut block: Option<Vec<String>> = None;

    for candidate in step_candidates(text) {
        let content = strip_number_marker(candidate).trim();

        if let Some(seed) = routes_header(content) {
            close_block(&mut block, &mut entries);
            block = Some(split_inline_routes(seed));
            continue;
        }

        if let Some(routes) = block.as_mut() {
            let route = strip_bullet(content);
            if is_route_line(route) {
                routes.push(route.to_string());
                continue;
            }
            close_block(&mut block, &mut entries);
        }

        if !content.is_empty() {
            entries.push(FlowEntry::Step(content.to_string()));
        }
    }
    close_block(&mut block, &mut entries);

    entries.truncate(limit);
    entries
}

/// Text after the header when `content` opens a routes block.
fn routes_header(content: &str) -> Option<&str> {
    let head = content.get(..ROUTES_HEADER.len())?;
    if head.eq_ignore_ascii_case(ROUTES_HEADER) {
        Some(&content[ROUTES_HEADER.len()..])
    } else {
        None
    }
}

fn split_inline_routes(seed: &str) -> Vec<String> {
    seed.split([',', ';'])
        .map(str::trim)
        .filter(|route| !route.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['-', '*', '•']).map_or(line, str::trim_start)
}

fn is_route_line(line: &str) -> bool {
    RE_HTTP_ROUTE.is_match(line) || RE_ARROW_MAPPING.is_match(line)
}

fn close_block(block: &mut Option<Vec<String>>, entries: &mut Vec<FlowEntry>) {
    if let Some(routes) = block.take() {
        if !routes.is_empty() {
            entries.push(FlowEntry::Routes(routes));
        }
    }
}
