use repolens_protocol::TreeNode;
use std::collections::HashSet;

/// Folders opened on first display: the top two levels.
pub const DEFAULT_EXPANDED_DEPTH: usize = 2;

/// Which folders of a tree are open, keyed by full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedPaths {
    paths: HashSet<String>,
}

impl ExpandedPaths {
    /// Opens every folder above `max_depth`.
    pub fn with_depth(nodes: &[TreeNode], max_depth: usize) -> Self {
        let mut expanded = Self::default();
        expanded.open_to_depth(nodes, max_depth, 0);
        expanded
    }

    pub fn initial(nodes: &[TreeNode]) -> Self {
        Self::with_depth(nodes, DEFAULT_EXPANDED_DEPTH)
    }

    fn open_to_depth(&mut self, nodes: &[TreeNode], max_depth: usize, depth: usize) {
        for node in nodes {
            if node.is_folder && depth < max_depth {
                self.paths.insert(node.full_path.clone());
                self.open_to_depth(&node.children, max_depth, depth + 1);
            }
        }
    }

    /// Flip a folder; files are ignored. Returns the new state.
    pub fn toggle(&mut self, node: &TreeNode) -> bool {
        if !node.is_folder {
            return false;
        }
        if self.paths.remove(&node.full_path) {
            false
        } else {
            self.paths.insert(node.full_path.clone());
            true
        }
    }

    pub fn is_expanded(&self, node: &TreeNode) -> bool {
        self.paths.contains(&node.full_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Copy of `nodes` with `expanded` filled in on every folder.
    pub fn project(&self, nodes: &[TreeNode]) -> Vec<TreeNode> {
        nodes
            .iter()
            .map(|node| TreeNode {
                expanded: node.is_folder.then(|| self.is_expanded(node)),
                children: self.project(&node.children),
                ..node.clone()
            })
            .collect()
    }

    /// Nodes a reader currently sees: roots plus the children of open folders.
    pub fn visible<'a>(&self, nodes: &'a [TreeNode]) -> Vec<&'a TreeNode> {
        let mut out = Vec::new();
        self.collect_visible(nodes, &mut out);
        out
    }

    fn collect_visible<'a>(&self, nodes: &'a [TreeNode], out: &mut Vec<&'a TreeNode>) {
        for node in nodes {
            out.push(node);
            if self.is_expanded(node) {
                self.collect_visible(&node.children, out);
            }
        }
    }
}
