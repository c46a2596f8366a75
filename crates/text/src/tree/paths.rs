//! Path-list dialect: one slash-delimited path per line, merged into a trie.

use super::art::is_prefix_char;
use repolens_protocol::TreeNode;

#[derive(Debug, Default)]
struct Trie {
    children: Vec<TrieNode>,
}

#[derive(Debug)]
struct TrieNode {
    name: String,
    full_path: String,
    depth: usize,
    children: Trie,
}

impl Trie {
    fn child_mut(&mut self, name: &str, full_path: &str, depth: usize) -> &mut TrieNode {
        let idx = match self.children.iter().position(|child| child.name == name) {
            Some(idx) => idx,
            None => {
                self.children.push(TrieNode {
                    name: name.to_string(),
                    full_path: full_path.to_string(),
                    depth,
                    children: Trie::default(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn into_nodes(self) -> Vec<TreeNode> {
        self.children
            .into_iter()
            .map(|node| {
                let children = node.children.into_nodes();
                TreeNode {
                    is_folder: !children.is_empty() || !node.name.contains('.'),
                    name: node.name,
                    full_path: node.full_path,
                    depth: node.depth,
                    children,
                    expanded: None,
                }
            })
            .collect()
    }
}

fn segments(line: &str) -> Vec<&str> {
    let cleaned = line.trim_start_matches(is_prefix_char).trim();
    let cleaned = cleaned.strip_prefix("./").unwrap_or(cleaned);
    cleaned
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

pub(super) fn build<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<TreeNode> {
    let mut root = Trie::default();

    for line in lines {
        let parts = segments(line);
        let mut level = &mut root;
        let mut full_path = String::new();
        for (depth, name) in parts.iter().enumerate() {
            if !full_path.is_empty() {
                full_path.push('/');
            }
            full_path.push_str(name);
            level = &mut level.child_mut(name, &full_path, depth).children;
        }
    }

    root.into_nodes()
}
