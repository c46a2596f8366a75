use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of a parsed folder tree.
///
/// Built fresh on every parse. `expanded` is only filled by a projection from an
/// externally tracked set of expanded paths; parsers leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub name: String,
    /// Slash-joined from the root.
    pub full_path: String,
    pub is_folder: bool,
    /// 0 at the root.
    pub depth: usize,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>, full_path: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            is_folder: false,
            depth,
            children: Vec::new(),
            expanded: None,
        }
    }

    pub fn folder(
        name: impl Into<String>,
        full_path: impl Into<String>,
        depth: usize,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            is_folder: true,
            depth,
            children,
            expanded: None,
        }
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}
