use crate::tree::is_prefix_char;

/// Root chips shown beside the folder tree.
pub const FOLDER_ROOTS: usize = 8;
/// Root chips in the expanded tree view.
pub const EXPANDED_FOLDER_ROOTS: usize = 12;

/// First path segment of every tree line, in order of first appearance.
#[must_use]
pub fn extract_folder_roots(text: &str, limit: usize) -> Vec<String> {
    let mut roots: Vec<String> = Vec::new();
    if limit == 0 {
        return roots;
    }

    for line in text.lines() {
        let cleaned = line.trim_start_matches(is_prefix_char).trim();
        let cleaned = cleaned.strip_prefix("./").unwrap_or(cleaned);
        let Some(first) = cleaned.split(['/', '\\']).next().map(str::trim) else {
            continue;
        };
        if first.is_empty() || first == "." || roots.iter().any(|root| root == first) {
            continue;
        }
        roots.push(first.to_string());
        if roots.len() >= limit {
            break;
        }
    }
    roots
}
