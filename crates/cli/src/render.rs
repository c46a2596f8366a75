use repolens_dashboard::DashboardReport;
use repolens_protocol::Severity;
use repolens_text::{render_tree, FlowEntry};
use std::fmt::Write as _;

/// Plain-text rendering of a dashboard report, one block per card.
pub fn render_report(report: &DashboardReport) -> String {
    let mut out = String::new();
    let title = report.repo_id.as_deref().unwrap_or("(unnamed repository)");
    let _ = writeln!(out, "# {title}");
    if let Some(summary) = &report.summary {
        let _ = writeln!(out, "\n{summary}");
    }

    if !report.overview.is_empty() {
        out.push_str("\n## Overview\n");
        for item in &report.overview {
            let _ = writeln!(out, "- {}: {}", item.label, item.value);
        }
    }

    if !report.core_components.is_empty() {
        out.push_str("\n## Core components\n");
        for component in &report.core_components {
            let _ = writeln!(out, "- {component}");
        }
    }

    if !report.top_files.is_empty() {
        out.push_str("\n## Top files\n");
        for file in &report.top_files {
            let _ = write!(out, "{:>4}  {}", file.importance, file.path);
            if let Some(label) = &file.label {
                let _ = write!(out, " ({label})");
            }
            out.push('\n');
        }
    }

    if !report.distribution.is_empty() {
        out.push_str("\n## Components\n");
        for item in &report.distribution {
            let _ = writeln!(out, "- {}: {}", item.label, item.count);
        }
    }

    if !report.risks.is_empty() {
        out.push_str("\n## Risks\n");
        for risk in &report.risks {
            let severity = risk.severity.map_or("unrated", severity_label);
            let _ = write!(out, "- [{severity}] {}", risk.title);
            if let Some(description) = &risk.description {
                let _ = write!(out, ": {description}");
            }
            out.push('\n');
        }
    }

    if !report.folder_roots.is_empty() {
        let _ = writeln!(out, "\n## Folder roots\n{}", report.folder_roots.join("  "));
    }
    if !report.folder_tree.is_empty() {
        out.push_str("\n## Folder tree\n");
        out.push_str(&render_tree(&report.folder_tree));
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    if !report.execution_flow.is_empty() {
        out.push_str("\n## Execution flow\n");
        let mut step = 0;
        for entry in &report.execution_flow {
            match entry {
                FlowEntry::Step(text) => {
                    step += 1;
                    let _ = writeln!(out, "{step}. {text}");
                }
                FlowEntry::Routes(routes) => {
                    for route in routes {
                        let _ = writeln!(out, "   {route}");
                    }
                }
            }
        }
    }

    if !report.readme_bullets.is_empty() {
        out.push_str("\n## README\n");
        for bullet in &report.readme_bullets {
            let _ = writeln!(out, "- {bullet}");
        }
    }

    if !report.database.is_empty() {
        out.push_str("\n## Database\n");
        for entry in &report.database {
            let more = if entry.truncated { ", …" } else { "" };
            if entry.fields.is_empty() {
                let _ = writeln!(out, "- {}", entry.name);
            } else {
                let _ = writeln!(out, "- {}: {}{more}", entry.name, entry.fields.join(", "));
            }
        }
    }

    let _ = writeln!(out, "\n## Workflow diagram\n{}", report.workflow_diagram);
    out
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Medium => "medium",
        Severity::High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolens_dashboard::{DashboardState, ReportLimits};
    use repolens_normalizer::normalize;
    use repolens_protocol::RawAnalysisPayload;
    use serde_json::json;

    #[test]
    fn empty_report_still_has_a_diagram() {
        let state = DashboardState::new();
        let text = render_report(&DashboardReport::build(&state.view(), ReportLimits::default()));
        assert!(text.starts_with("# (unnamed repository)\n"));
        assert!(!text.contains("## Overview"));
        assert!(text.contains("## Workflow diagram\nflowchart"));
    }

    #[test]
    fn routes_are_indented_under_steps() {
        let raw = RawAnalysisPayload::from_value(json!({
            "repoUrl": "acme/api",
            "risks": [{ "title": "No tests", "severity": "HIGH" }],
            "explanation": {
                "executionFlow": "1. Boot\n2. routes:\nGET /a -> A\n3. Serve"
            }
        }));
        let mut state = DashboardState::new();
        state.apply(normalize(&raw));
        let text = render_report(&DashboardReport::build(&state.view(), ReportLimits::default()));

        assert!(text.contains("- [high] No tests\n"));
        assert!(text.contains("1. Boot\n   GET /a -> A\n2. Serve\n"));
    }
}
