use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

const PAYLOAD: &str = r#"{
    "repoUrl": "https://github.com/acme/shop",
    "language": "TypeScript",
    "framework": "Express",
    "routes": [{ "method": "GET", "path": "/products", "sourceFile": "src/routes/products.ts" }],
    "controllers": [{ "name": "ProductController", "file": "src/controllers/product.ts" }],
    "models": [{ "name": "Product", "schemaSummary": "id, title" }],
    "readmeSummary": "- Catalogue\n- Checkout",
    "explanation": {
        "summary": "A small shop API.",
        "executionFlow": "1. Boot Express\n2. Serve products"
    }
}"#;

/// Runs in an empty directory with no repolens settings in the environment.
#[allow(deprecated)]
fn repolens(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repolens").expect("binary");
    cmd.current_dir(workdir.path())
        .env_remove("REPOLENS_CONFIG")
        .env_remove("REPOLENS_API_URL")
        .env_remove("REPOLENS_ANALYZE_TIMEOUT_SECS")
        .env_remove("REPOLENS_EXPLAIN_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn tree_renders_a_path_list_from_stdin() {
    let dir = tempdir().unwrap();
    repolens(&dir)
        .arg("tree")
        .write_stdin("src/main.rs\nsrc/lib.rs\n")
        .assert()
        .success()
        .stdout("src/\n├── main.rs\n└── lib.rs\n");
}

#[test]
fn tree_json_carries_full_paths() {
    let dir = tempdir().unwrap();
    let output = repolens(&dir)
        .args(["--json", "tree", "-"])
        .write_stdin("app/\n└── models/\n    └── user.py\n")
        .output()
        .unwrap();
    let nodes = json_stdout(&output);
    assert_eq!(
        nodes[0]["children"][0]["children"][0]["fullPath"],
        "app/models/user.py"
    );
    assert_eq!(nodes[0]["children"][0]["isFolder"], true);
}

#[test]
fn steps_are_numbered() {
    let dir = tempdir().unwrap();
    repolens(&dir)
        .arg("steps")
        .write_stdin("1. Clone 2. Analyze 3. Explain")
        .assert()
        .success()
        .stdout("1. Clone\n2. Analyze\n3. Explain\n");
}

#[test]
fn bullets_honor_the_limit() {
    let dir = tempdir().unwrap();
    repolens(&dir)
        .args(["bullets", "--limit", "2"])
        .write_stdin("- one\n- two\n- three\n")
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn normalize_prints_both_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payload.json");
    fs::write(&path, PAYLOAD).unwrap();

    let output = repolens(&dir).arg("normalize").arg(&path).output().unwrap();
    let normalized = json_stdout(&output);
    assert_eq!(normalized["analysis"]["repoId"], "https://github.com/acme/shop");
    assert_eq!(normalized["analysis"]["projectType"], "TypeScript");
    assert_eq!(normalized["explain"]["summary"], "A small shop API.");
}

#[test]
fn report_text_lists_the_cards() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payload.json");
    fs::write(&path, PAYLOAD).unwrap();

    repolens(&dir)
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("# https://github.com/acme/shop\n")
                .and(predicate::str::contains("- Frameworks: Express"))
                .and(predicate::str::contains("  85  src/routes/products.ts"))
                .and(predicate::str::contains("1. Boot Express\n2. Serve products\n"))
                .and(predicate::str::contains("- Product: id, title")),
        );
}

#[test]
fn report_limits_come_from_the_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("repolens.toml"),
        "[limits]\nreadme_bullets = 1\n",
    )
    .unwrap();

    let output = repolens(&dir)
        .args(["--json", "report"])
        .write_stdin(PAYLOAD)
        .output()
        .unwrap();
    let report = json_stdout(&output);
    assert_eq!(report["readmeBullets"], serde_json::json!(["Catalogue"]));
    assert_eq!(report["repoId"], "https://github.com/acme/shop");
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "api_ulr = \"typo\"\n").unwrap();

    repolens(&dir)
        .arg("--config")
        .arg(&config)
        .arg("steps")
        .write_stdin("1. a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn non_object_payload_is_rejected() {
    let dir = tempdir().unwrap();
    repolens(&dir)
        .arg("report")
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn schema_describes_tree_nodes() {
    let dir = tempdir().unwrap();
    repolens(&dir)
        .args(["schema", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fullPath").and(predicate::str::contains("isFolder")));
}

#[test]
fn analyze_needs_a_source() {
    let dir = tempdir().unwrap();
    repolens(&dir).arg("analyze").assert().failure();
}

#[test]
fn unreachable_backend_gives_a_friendly_error() {
    let dir = tempdir().unwrap();
    repolens(&dir)
        .args([
            "--api-url",
            "http://127.0.0.1:9/api",
            "analyze",
            "--repo-url",
            "https://github.com/acme/shop",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Connection failed. Check your network and try again.")
                .and(predicate::str::contains("<html").not()),
        );
}
