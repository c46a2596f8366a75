use repolens_protocol::TreeNode;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// Box-drawing rendering of a forest; folders carry a trailing `/`.
///
/// The output parses back into the same forest.
#[must_use]
pub fn render_tree(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        push_line(&mut out, "", node);
        render_children(&mut out, &node.children, "");
    }
    out
}

fn render_children(out: &mut String, children: &[TreeNode], indent: &str) {
    for (idx, child) in children.iter().enumerate() {
        let last = idx + 1 == children.len();
        let branch = if last { LAST_BRANCH } else { BRANCH };
        push_line(out, &format!("{indent}{branch}"), child);

        let nested = format!("{indent}{}", if last { GAP } else { PIPE });
        render_children(out, &child.children, &nested);
    }
}

fn push_line(out: &mut String, prefix: &str, node: &TreeNode) {
    out.push_str(prefix);
    out.push_str(&node.name);
    if node.is_folder {
        out.push('/');
    }
    out.push('\n');
}
