//! Derived views over a normalized payload.

use pretty_assertions::assert_eq;
use repolens_dashboard::{
    DashboardReport, DashboardState, DistributionItem, OverviewItem, ReportLimits,
};
use repolens_normalizer::normalize;
use repolens_protocol::{ExplainResult, ExplainSection, RawAnalysisPayload};
use repolens_text::FlowEntry;
use serde_json::json;

fn loaded_state() -> DashboardState {
    let raw = RawAnalysisPayload::from_value(json!({
        "repoUrl": "https://github.com/acme/shop",
        "language": "TypeScript",
        "framework": "Express",
        "architecture": "Layered",
        "entryPoint": "src/server.ts",
        "routes": [
            { "method": "GET", "path": "/products", "handler": "ProductController.list", "sourceFile": "src/routes/products.ts" },
            { "method": "POST", "path": "/orders", "handler": "OrderController.create", "sourceFile": "src/routes/orders.ts" }
        ],
        "controllers": [
            { "name": "ProductController", "file": "src/controllers/product.ts" },
            { "name": "OrderController", "file": "src/controllers/order.ts" }
        ],
        "services": [{ "name": "PaymentService", "file": "src/services/payment.ts" }],
        "models": [
            { "name": "Product", "file": "src/models/product.ts", "schemaSummary": "id, title, price" },
            { "name": "Order" }
        ],
        "readmeSummary": "- Product catalogue\n- Checkout flow",
        "explanation": {
            "summary": "An Express shop API.",
            "folderTreeText": "src/\n├── controllers/\n│   └── product.ts\n└── server.ts\n",
            "executionFlow": "1. server.ts starts Express\n2. routes:\nGET /products -> ProductController\nPOST /orders -> OrderController\n3. Controllers call services"
        }
    }));
    let mut state = DashboardState::new();
    state.apply(normalize(&raw));
    state
}

#[test]
fn overview_lists_present_fields_in_order() {
    let state = loaded_state();
    let labels: Vec<&str> = state
        .view()
        .overview_items()
        .iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(
        labels,
        vec!["Project type", "Entry point", "Architecture", "Frameworks", "Database"]
    );
    assert_eq!(
        state.view().overview_items()[4],
        OverviewItem {
            label: "Database",
            value: "Product: id, title, price; Order".into()
        }
    );
}

#[test]
fn top_files_rank_by_importance() {
    let state = loaded_state();
    let view = state.view();
    let ranked: Vec<(&str, u8)> = view
        .top_files(4)
        .iter()
        .map(|f| (f.path.as_str(), f.importance))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("src/routes/products.ts", 85),
            ("src/routes/orders.ts", 85),
            ("src/controllers/product.ts", 80),
            ("src/controllers/order.ts", 80),
        ]
    );
    let all = view.top_files(usize::MAX);
    assert!(all.windows(2).all(|w| w[0].importance >= w[1].importance));
}

#[test]
fn distribution_counts_non_empty_groups() {
    let state = loaded_state();
    assert_eq!(
        state.view().component_distribution(),
        vec![
            DistributionItem { label: "Routes", count: 2 },
            DistributionItem { label: "Controllers", count: 2 },
            DistributionItem { label: "Services", count: 1 },
            DistributionItem { label: "Models", count: 2 },
        ]
    );
}

#[test]
fn sections_feed_the_text_heuristics() {
    let state = loaded_state();
    let view = state.view();

    assert_eq!(view.folder_roots(8), vec!["src", "controllers", "product.ts", "server.ts"]);
    let tree = view.folder_tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].children.len(), 2);

    assert_eq!(
        view.execution_steps(),
        vec![
            "server.ts starts Express",
            "routes:",
            "GET /products -> ProductController",
            "POST /orders -> OrderController",
            "Controllers call services",
        ]
    );
    assert_eq!(
        view.execution_flow_entries(8)[1],
        FlowEntry::Routes(vec![
            "GET /products -> ProductController".into(),
            "POST /orders -> OrderController".into(),
        ])
    );
    assert_eq!(view.readme_bullets(8), vec!["Product catalogue", "Checkout flow"]);
    assert_eq!(view.database_entries()[0].fields, vec!["id", "title", "price"]);
}

#[test]
fn section_lookup_falls_back_to_first() {
    let state = loaded_state();
    let view = state.view();
    assert_eq!(view.section("Nope").map(|s| s.title.as_str()), Some("Folder Structure"));
    assert!(view.other_sections().is_empty());
}

#[test]
fn prose_flow_gets_a_generated_diagram() {
    let state = loaded_state();
    let view = state.view();
    let diagram = view.workflow_diagram();
    assert!(diagram.starts_with("flowchart LR\n  Start --> A\n  A[\"GET /products\"]"));
    assert!(diagram.ends_with("B --> End"));
    assert!(view
        .execution_flow_plain_text()
        .is_some_and(|text| text.starts_with("1. server.ts")));
}

#[test]
fn empty_state_views_are_empty() {
    let state = DashboardState::new();
    let report = DashboardReport::build(&state.view(), ReportLimits::default());
    assert_eq!(report.repo_id, None);
    assert!(report.overview.is_empty());
    assert!(report.folder_tree.is_empty());
    assert!(report.workflow_diagram.contains("No workflows"));
}

fn explain_state(sections: Vec<ExplainSection>) -> DashboardState {
    let mut state = DashboardState::new();
    state.set_repo_id(Some("acme/mono".into()));
    state.set_explain(Some(ExplainResult {
        repo_id: "acme/mono".into(),
        summary: None,
        sections,
    }));
    state
}

#[test]
fn other_sections_skip_the_dedicated_cards() {
    let state = explain_state(vec![
        ExplainSection::new("Folder Tree", "src/\n  main.rs"),
        ExplainSection::new("Execution Flow", "1. Start"),
        ExplainSection::new("Application Config (Spring Boot)", "server.port=8080"),
        ExplainSection::new("Execution Flow", "1. Second copy"),
        ExplainSection::new("Frontend Analysis", "Framework: React"),
        ExplainSection::new("ML Pipeline", "Libs: torch"),
        ExplainSection::new("README Summary", "- Docs"),
        ExplainSection::new("README Summary", "- More docs"),
    ]);
    let view = state.view();

    let others: Vec<(&str, &str)> = view
        .other_sections()
        .iter()
        .map(|s| (s.title.as_str(), s.content.as_str()))
        .collect();
    assert_eq!(
        others,
        vec![
            ("Application Config (Spring Boot)", "server.port=8080"),
            ("Execution Flow", "1. Second copy"),
            ("Frontend Analysis", "Framework: React"),
            ("ML Pipeline", "Libs: torch"),
            ("README Summary", "- More docs"),
        ]
    );
    assert_eq!(view.execution_steps(), vec!["Start"]);
    assert_eq!(view.first_section().map(|s| s.title.as_str()), Some("Folder Tree"));
}

#[test]
fn first_section_is_none_without_sections() {
    let state = explain_state(Vec::new());
    let view = state.view();
    assert_eq!(view.first_section(), None);
    assert_eq!(view.section("Execution Flow"), None);
    assert!(view.other_sections().is_empty());

    let empty = DashboardState::new();
    assert_eq!(empty.view().first_section(), None);
}

#[test]
fn circular_dependencies_pass_through() {
    let raw = RawAnalysisPayload::from_value(json!({
        "repoUrl": "acme/cycle",
        "circularDependencies": ["a.ts -> b.ts -> a.ts", "x.ts -> y.ts -> x.ts"]
    }));
    let mut state = DashboardState::new();
    state.apply(normalize(&raw));
    assert_eq!(
        state.view().circular_dependencies(),
        ["a.ts -> b.ts -> a.ts", "x.ts -> y.ts -> x.ts"]
    );
    assert!(DashboardState::new().view().circular_dependencies().is_empty());
}

#[test]
fn mermaid_flow_is_not_plain_text() {
    let raw = RawAnalysisPayload::from_value(json!({
        "repoUrl": "acme/diagram",
        "explanation": { "executionFlow": "flowchart TD\n  A --> B" }
    }));
    let mut state = DashboardState::new();
    state.apply(normalize(&raw));
    let view = state.view();
    assert_eq!(view.execution_flow_plain_text(), None);
    assert_eq!(view.workflow_diagram(), "flowchart TD\n  A --> B");
}
