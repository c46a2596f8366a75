//! Folder-tree parsing across both dialects.

use pretty_assertions::assert_eq;
use repolens_protocol::TreeNode;
use repolens_text::{parse_tree, render_tree, walk};

fn shape(nodes: &[TreeNode]) -> Vec<(String, bool, usize)> {
    let mut out = Vec::new();
    walk(nodes, &mut |node| {
        out.push((node.full_path.clone(), node.is_folder, node.depth));
    });
    out
}

fn row(path: &str, is_folder: bool, depth: usize) -> (String, bool, usize) {
    (path.to_string(), is_folder, depth)
}

#[test]
fn blank_input_is_an_empty_forest() {
    assert!(parse_tree("").is_empty());
    assert!(parse_tree("   \n  ").is_empty());
}

#[test]
fn box_drawing_tree_with_known_depths() {
    let nodes = parse_tree("a/\n├── b.ts\n└── c/\n    └── d.ts");

    assert_eq!(nodes.len(), 1);
    let a = &nodes[0];
    assert_eq!(a.name, "a");
    assert!(a.is_folder);
    assert_eq!(a.children.len(), 2);

    let b = a.child("b.ts").expect("b.ts");
    assert!(!b.is_folder);
    assert_eq!(b.depth, 1);

    let c = a.child("c").expect("c");
    assert!(c.is_folder);
    assert_eq!(c.depth, 1);
    assert_eq!(c.children.len(), 1);
    assert_eq!(c.children[0].name, "d.ts");
    assert!(!c.children[0].is_folder);
    assert_eq!(c.children[0].depth, 2);
    assert_eq!(c.children[0].full_path, "a/c/d.ts");
}

#[test]
fn path_list_merges_into_a_trie() {
    let nodes = parse_tree(&["src/app/main.ts", "src/app/app.ts", "README.md"].join("\n"));

    assert_eq!(
        shape(&nodes),
        vec![
            row("src", true, 0),
            row("src/app", true, 1),
            row("src/app/main.ts", false, 2),
            row("src/app/app.ts", false, 2),
            row("README.md", false, 0),
        ]
    );
}

#[test]
fn path_list_tolerates_order_and_duplicates() {
    let nodes = parse_tree("src/b.rs\n./src/\nlib\\util.rs\nsrc/a.rs");
    assert_eq!(
        shape(&nodes),
        vec![
            row("src", true, 0),
            row("src/b.rs", false, 1),
            row("src/a.rs", false, 1),
            row("lib", true, 0),
            row("lib/util.rs", false, 1),
        ]
    );
}

#[test]
fn bulleted_and_box_prefixed_path_lists_merge_into_a_trie() {
    let expected = vec![
        row("src", true, 0),
        row("src/app", true, 1),
        row("src/app/main.ts", false, 2),
        row("src/app/app.ts", false, 2),
        row("README.md", false, 0),
    ];
    for text in [
        "- src/app/main.ts\n- src/app/app.ts\n- README.md",
        "├── src/app/main.ts\n├── src/app/app.ts\n└── README.md",
        "  * src/app/main.ts\n  * src/app/app.ts\n  * README.md",
    ] {
        let nodes = parse_tree(text);
        assert_eq!(nodes.len(), 2, "{text:?}");
        assert_eq!(shape(&nodes), expected, "{text:?}");
    }
}

#[test]
fn nested_tree_art_never_falls_back_to_paths() {
    let nodes = parse_tree("src/\n  app/main.ts\n  lib.ts");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].children[0].name, "app/main.ts");
}

#[test]
fn indented_tree_with_trailing_whitespace_and_dots() {
    let text = ".\nbackend/   \n  controllers/\n    UserController.java  \n  pom.xml\n\nfrontend/\n";
    assert_eq!(
        shape(&parse_tree(text)),
        vec![
            row("backend", true, 0),
            row("backend/controllers", true, 1),
            row("backend/controllers/UserController.java", false, 2),
            row("backend/pom.xml", false, 1),
            row("frontend", true, 0),
        ]
    );
}

#[test]
fn parsing_is_deterministic_and_survives_rendering() {
    let text = "project/\n├── src/\n│   ├── main.rs\n│   └── cli/\n│       └── args.rs\n├── tests/\n└── Cargo.toml";
    let first = parse_tree(text);
    assert_eq!(first, parse_tree(text));
    assert_eq!(parse_tree(&render_tree(&first)), first);
    assert_eq!(first[0].count(), 7);
}
