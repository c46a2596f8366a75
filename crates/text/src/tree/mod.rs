//! Folder-tree text → [`TreeNode`] forest.
//!
//! Two dialects, tried in a fixed order:
//!
//! 1. **Tree art**: lines prefixed by `│ ├ └ ─`, dashes, bullets or indentation.
//! 2. **Path list**: only when tree art produced no top-level node and some line
//!    carries a `/` or `\`. Every line is split into segments and merged into a trie.
//!
//! The order is fixed on purpose: ambiguous text (box drawing *and* slashes) always
//! resolves the same way.

mod art;
mod paths;
mod render;

use repolens_protocol::TreeNode;

pub(crate) use art::is_prefix_char;
pub use render::render_tree;

/// Parse tree text. Blank input yields an empty forest; the result is a pure
/// function of `text`.
#[must_use]
pub fn parse_tree(text: &str) -> Vec<TreeNode> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let entries: Vec<art::Entry> = lines.iter().filter_map(|l| art::parse_entry(l)).collect();
    let nodes = art::build(&entries);
    if !nodes.is_empty() {
        return nodes;
    }

    if lines.iter().any(|line| line.contains(['/', '\\'])) {
        log::debug!(
            "tree text has no tree-art structure, reading {} lines as a path list",
            lines.len()
        );
        return paths::build(lines.iter().copied());
    }

    Vec::new()
}

/// Visit every node depth-first, parents before children.
pub fn walk<'a>(nodes: &'a [TreeNode], visit: &mut impl FnMut(&'a TreeNode)) {
    for node in nodes {
        visit(node);
        walk(&node.children, visit);
    }
}
