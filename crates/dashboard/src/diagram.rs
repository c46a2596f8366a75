//! Mermaid source for the workflow page.

use repolens_protocol::WorkflowSummary;

pub const MERMAID_KEYWORDS: [&str; 9] = [
    "flowchart",
    "graph",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "erDiagram",
    "journey",
    "gantt",
    "pie",
];

const MAX_LABEL_CHARS: usize = 50;

const PLACEHOLDER_DIAGRAM: &str = "flowchart LR\n  A[Start] --> B[No workflows]\n  B --> C[Upload repo to analyze]";

/// Text that opens with a Mermaid diagram keyword.
pub fn is_mermaid(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && MERMAID_KEYWORDS.iter().any(|kw| text.starts_with(kw))
}

/// Backend Mermaid when the execution flow is one; otherwise a left-to-right chain
/// through the workflows.
pub fn workflow_diagram(execution_flow: Option<&str>, workflows: &[WorkflowSummary]) -> String {
    if let Some(flow) = execution_flow.filter(|flow| is_mermaid(flow)) {
        return flow.trim().to_string();
    }
    if workflows.is_empty() {
        return PLACEHOLDER_DIAGRAM.to_string();
    }

    let ids: Vec<String> = (0..workflows.len()).map(node_id).collect();
    let mut lines = vec!["flowchart LR".to_string(), format!("  Start --> {}", ids[0])];
    for (idx, workflow) in workflows.iter().enumerate() {
        let label: String = workflow
            .name
            .replace('"', "'")
            .chars()
            .take(MAX_LABEL_CHARS)
            .collect();
        lines.push(format!("  {}[\"{label}\"]", ids[idx]));
        if let Some(next) = ids.get(idx + 1) {
            lines.push(format!("  {} --> {next}", ids[idx]));
        }
    }
    lines.push(format!("  {} --> End", ids[ids.len() - 1]));
    lines.join("\n")
}

/// Execution flow written as prose rather than Mermaid.
pub fn execution_flow_plain_text(execution_flow: Option<&str>) -> Option<&str> {
    execution_flow
        .map(str::trim)
        .filter(|flow| !flow.is_empty() && !is_mermaid(flow))
}

/// `A`..`Z`, then `AA`, `AB`, ...
fn node_id(mut idx: usize) -> String {
    let mut id = Vec::new();
    loop {
        id.push(b'A' + (idx % 26) as u8);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    id.reverse();
    String::from_utf8_lossy(&id).into_owned()
}
