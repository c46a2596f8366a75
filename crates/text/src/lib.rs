//! # Repolens Text
//!
//! Structure recovered from the loosely formatted text an analysis carries:
//!
//! - [`parse_tree`]: ASCII / box-drawing folder trees and plain path lists
//! - [`heuristics`]: bullets, numbered steps, `routes:` blocks, folder roots and the
//!   flattened database description
//!
//! Nothing here fails. Malformed text yields the smallest well-formed result.
//!
//! ```
//! let nodes = repolens_text::parse_tree("src/\n├── main.rs\n└── lib.rs");
//! assert_eq!(nodes[0].children.len(), 2);
//!
//! let steps = repolens_text::extract_steps("1. Clone 2. Analyze");
//! assert_eq!(steps, vec!["Clone", "Analyze"]);
//! ```

pub mod heuristics;
pub mod tree;

pub use heuristics::{
    extract_bullets, extract_flow, extract_folder_roots, extract_steps, split_database,
    DatabaseEntry, FlowEntry,
};
pub use tree::{parse_tree, render_tree, walk};
