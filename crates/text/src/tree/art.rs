//! Tree-art dialect: `├──`/`└──` drawings or plain indentation.

use repolens_protocol::TreeNode;

const BOX_CHARS: [char; 5] = ['│', '├', '└', '─', '|'];
const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Entry {
    pub name: String,
    pub depth: usize,
    /// Written with a trailing `/`.
    pub explicit_folder: bool,
}

pub(crate) fn is_prefix_char(c: char) -> bool {
    c.is_whitespace() || BOX_CHARS.contains(&c) || c == '-' || c == '*'
}

pub(super) fn parse_entry(line: &str) -> Option<Entry> {
    let split = line
        .char_indices()
        .find(|(_, c)| !is_prefix_char(*c))
        .map_or(line.len(), |(idx, _)| idx);
    let (prefix, rest) = line.split_at(split);

    let rest = rest.trim();
    let rest = rest.strip_prefix("./").unwrap_or(rest);
    if rest.is_empty() || rest == "." {
        return None;
    }

    let explicit_folder = rest.ends_with('/');
    let name = rest.trim_end_matches('/');
    if name.is_empty() {
        return None;
    }

    Some(Entry {
        name: name.to_string(),
        depth: prefix_depth(prefix),
        explicit_folder,
    })
}

/// Box-drawing prefixes step in units of 4 (`│   `, `├── `); plain indentation in
/// units of 2.
fn prefix_depth(prefix: &str) -> usize {
    let width: usize = prefix
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum();
    if prefix.chars().any(|c| BOX_CHARS.contains(&c)) {
        width / 4
    } else {
        width / 2
    }
}

/// Entries that all share one depth while naming nested paths are a path list
/// misread as tree art, bulleted or box-prefixed ones included; tree-art parsing
/// yields nothing for them.
pub(super) fn is_flat_path_list(entries: &[Entry]) -> bool {
    let Some(first) = entries.first() else {
        return false;
    };
    entries.iter().all(|entry| entry.depth == first.depth)
        && entries
            .iter()
            .any(|entry| entry.name.contains(['/', '\\']))
}

pub(super) fn build(entries: &[Entry]) -> Vec<TreeNode> {
    if is_flat_path_list(entries) {
        return Vec::new();
    }
    let (nodes, _) = build_level(entries, 0, 0, "", 0);
    nodes
}

/// Consume entries from `start` while their depth stays at or above `min_depth`.
fn build_level(
    entries: &[Entry],
    start: usize,
    min_depth: usize,
    parent_path: &str,
    level: usize,
) -> (Vec<TreeNode>, usize) {
    let mut nodes = Vec::new();
    let mut idx = start;

    while idx < entries.len() {
        let entry = &entries[idx];
        if entry.depth < min_depth {
            break;
        }

        let full_path = if parent_path.is_empty() {
            entry.name.clone()
        } else {
            format!("{parent_path}/{}", entry.name)
        };
        let has_children = entries
            .get(idx + 1)
            .is_some_and(|next| next.depth > entry.depth);

        let mut node = TreeNode {
            name: entry.name.clone(),
            full_path,
            is_folder: has_children || entry.explicit_folder,
            depth: level,
            children: Vec::new(),
            expanded: None,
        };

        if has_children {
            let (children, next) =
                build_level(entries, idx + 1, entry.depth + 1, &node.full_path, level + 1);
            node.children = children;
            idx = next;
        } else {
            idx += 1;
        }
        nodes.push(node);
    }

    (nodes, idx)
}
