use serde_json::{Value, json};
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn routescan(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_routescan"))
        .args(args)
        .env_remove("ROUTESCAN_LOG")
        .output()
        .unwrap()
}

fn write_go(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn prints_resolved_routes_as_json() {
    let dir = TempDir::new().unwrap();
    let file = write_go(
        &dir,
        "main.go",
        r#"package main

import "github.com/gin-gonic/gin"

func main() {
	r := gin.New()
	api := r.Group("/v1")
	user := api.Group("/user")

	user.GET("/register", nil)
	r.POST("/login", nil)
}
"#,
    );
    let output = routescan(&[file.as_str()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        json!([
            {"method": "GET", "path": "/v1/user/register", "groups": ["v1", "user"], "line": 10},
            {"method": "POST", "path": "/login", "groups": [], "line": 11}
        ])
    );
}

#[test]
fn prints_empty_array_without_routes() {
    let dir = TempDir::new().unwrap();
    let file = write_go(&dir, "util.go", "package util\n\nfunc Add(a, b int) int { return a + b }\n");
    let output = routescan(&[file.as_str()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "[]");
}

#[test]
fn missing_argument_fails_without_output() {
    let output = routescan(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn syntax_error_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let file = write_go(&dir, "bad.go", "package main\n\nfunc main( {\n");
    let output = routescan(&[file.as_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.go");
    let missing = missing.to_string_lossy().to_string();
    let output = routescan(&[missing.as_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn deep_nesting_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let source = format!(
        "package main\n\nfunc main() {{\n{}\tr.GET(\"/deep\", h)\n{}}}\n",
        "{\n".repeat(20_000),
        "}\n".repeat(20_000)
    );
    let file = write_go(&dir, "deep.go", &source);
    let output = routescan(&[file.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn workspace_mode_lists_projects() {
    let dir = TempDir::new().unwrap();
    write_go(
        &dir,
        "main.go",
        "package main\n\nfunc main() {\n\tr := gin.New()\n\tr.GET(\"/ping\", h)\n}\n",
    );
    let root = dir.path().to_string_lossy().to_string();
    let output = routescan(&["--workspace", root.as_str()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        json!([{
            "root": ".",
            "routes": [
                {"file": "main.go", "method": "GET", "path": "/ping", "groups": [], "line": 5}
            ]
        }])
    );
}
