//! End-to-end tests for the `sailkit` binary.

mod common;

use std::io::Read;
use std::process::Stdio;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    TestContext::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("check-update"))
        .stdout(predicate::str::contains("predev"))
        .stdout(predicate::str::contains("lint-colors"));
}

#[test]
fn test_sync_writes_once() {
    let ctx = TestContext::new().with_package();

    ctx.command()
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated .kiro/steering/sail-components.md with 2 components from package.",
        ))
        .stdout(predicate::str::contains(
            "Updated .kiro/steering/sail-types.md with 1 types from package.",
        ));

    let components = ctx.read(".kiro/steering/sail-components.md");
    assert!(components.contains("**Input:** `TextField`"));
    assert!(components.contains("**Actions:** `ButtonWidget`"));

    ctx.command().arg("sync").assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_sync_json_report() {
    let ctx = TestContext::new().with_package();
    let output = ctx.command().args(["sync", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["components"]["status"], "written");
    assert_eq!(report["components"]["entries"], 2);
    assert_eq!(report["types"]["status"], "written");
}

#[test]
fn test_sync_without_package_leaves_project_alone() {
    let ctx = TestContext::new();
    ctx.command().arg("sync").assert().success();
    assert!(!ctx.path().join(".kiro").exists());
}

#[test]
fn test_sync_write_failure_exits_non_zero() {
    let ctx = TestContext::new().with_package();
    ctx.write(".kiro", "a file where the steering directory should be");

    ctx.command()
        .arg("sync")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to write steering document"));
}

#[test]
fn test_predev_tolerates_write_failure_unless_strict() {
    let ctx = TestContext::new().with_package().with_offline_registry();
    ctx.write(".kiro", "blocker");

    ctx.command().arg("predev").assert().success();
    ctx.command().args(["predev", "--strict"]).assert().code(4);
}

#[test]
fn test_predev_syncs_after_gate() {
    let ctx = TestContext::new().with_package().with_offline_registry();
    ctx.command()
        .arg("predev")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated .kiro/steering/sail-components.md"));
    assert!(ctx.path().join(".kiro/steering/sail-types.md").exists());
}

#[test]
fn test_check_update_never_fails() {
    let ctx = TestContext::new().with_offline_registry();
    ctx.command()
        .arg("check-update")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = ctx.command().args(["check-update", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let check: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(check["package"], "@pglevy/sailwind");
    assert_eq!(check["status"], "unknown");
}

#[test]
fn test_lint_colors_reports_findings() {
    let ctx = TestContext::new();
    ctx.write(
        "src/pages/home.tsx",
        "export const Home = () => (\n  <div className=\"bg-blue-300 text-gray-900\" />\n);\n",
    );
    ctx.write("src/components/Ok.tsx", "<p className=\"text-red-500\" />\n");

    ctx.command()
        .arg("lint-colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("src/pages/home.tsx:\n"))
        .stdout(predicate::str::contains(
            "  Line 2, col 19: \"bg-blue-300\" uses step 300 (try 200 instead)",
        ))
        .stdout(predicate::str::contains("Found 1 color class(es) using non-standard steps."))
        .stdout(predicate::str::contains("Ok.tsx").not());
}

#[test]
fn test_lint_colors_clean_tree() {
    let ctx = TestContext::new();
    ctx.write("src/App.tsx", "<main className=\"bg-slate-50 text-slate-900\" />\n");

    ctx.command()
        .arg("lint-colors")
        .assert()
        .success()
        .stdout("✓ All color classes use approved palette steps (50, 100, 200, 500, 700, 900)\n");
}

#[test]
fn test_lint_colors_explicit_paths_and_json() {
    let ctx = TestContext::new();
    ctx.write("styles/theme.css", ".a { @apply bg-rose-400; }\n");
    ctx.write("src/App.tsx", "<div className=\"bg-blue-300\" />\n");

    let output = ctx
        .command()
        .args(["lint-colors", "styles/theme.css", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files_scanned"], 1);
    let findings = report["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["raw_class"], "bg-rose-400");
    assert_eq!(findings[0]["suggested_step"], 500);
}

#[test]
fn test_lint_colors_missing_source_root_is_not_an_error() {
    TestContext::new()
        .command()
        .arg("lint-colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("All color classes use approved palette steps"));
}

#[test]
fn test_configured_source_root() {
    let ctx = TestContext::new().with_config("lint:\n  source_root: app\n");
    ctx.write("app/page.tsx", "<b className=\"text-amber-600\" />\n");
    ctx.write("src/ignored.tsx", "<b className=\"text-amber-300\" />\n");

    ctx.command()
        .arg("lint-colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("app/page.tsx:"))
        .stdout(predicate::str::contains("text-amber-300").not());
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    TestContext::new()
        .command()
        .args(["--config", "nope.yaml", "sync"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_config_fails_sync_only() {
    let ctx = TestContext::new()
        .with_package()
        .with_config("package:\n  name: \"\"\n");
    ctx.write("src/App.tsx", "<div className=\"bg-blue-300\" />\n");

    ctx.command()
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("package.name"));

    ctx.command()
        .arg("lint-colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bg-blue-300\" uses step 300"))
        .stderr(predicate::str::contains("using defaults"));

    // Defaults name `npm`; an empty PATH keeps the gate offline
    ctx.command()
        .arg("check-update")
        .env("PATH", ctx.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    ctx.command()
        .arg("predev")
        .env("PATH", ctx.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated .kiro/steering/sail-components.md"));
}

#[test]
fn test_output_to_closed_reader_is_not_an_error() {
    let ctx = TestContext::new();
    ctx.write("src/App.tsx", &"<div className=\"bg-blue-300\" />\n".repeat(5000));

    let mut child = ctx
        .std_command()
        .arg("lint-colors")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut head = [0u8; 16];
    child.stdout.take().unwrap().read_exact(&mut head).unwrap();

    let status = child.wait().unwrap();
    assert!(status.success(), "exited with {status}");
}
