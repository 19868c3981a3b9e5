use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("images.yml");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_builds_every_image() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("joy-cli");
    Command::new(exe)
        .args([
            "build",
            "--out-dir",
            tmp.path().to_string_lossy().as_ref(),
            "--id-suffix",
            "test",
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    for name in [
        "circle",
        "donut",
        "circle-spiral",
        "flower",
        "square-spiral",
        "triangle",
    ] {
        let path = tmp.path().join(format!("{name}.svg"));
        let svg = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        roxmltree::Document::parse(&svg)
            .unwrap_or_else(|e| panic!("{name}.svg is not valid XML: {e}"));
    }

    let spiral = fs::read_to_string(tmp.path().join("circle-spiral.svg")).expect("spiral");
    assert_eq!(spiral.matches("<use ").count(), 144);
    assert!(spiral.contains(r##"xlink:href="#s-0-test""##));
}

#[test]
fn cli_build_only_writes_the_selected_image() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("joy-cli");
    Command::new(exe)
        .args([
            "build",
            "--only",
            "donut",
            "--out-dir",
            tmp.path().to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    assert!(tmp.path().join("donut.svg").exists());
    assert!(!tmp.path().join("flower.svg").exists());
}

#[test]
fn cli_renders_one_image_to_stdout() {
    let exe = assert_cmd::cargo_bin!("joy-cli");
    let output = Command::new(exe)
        .args(["render", "--name", "circle"])
        .arg(fixture())
        .output()
        .expect("run joy-cli");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8");
    assert!(svg.contains(r#"viewBox="-150 -150 300 300""#));
    assert!(svg.contains(r#"<circle cx="0" cy="0" r="50" transform="translate(100 50)" />"#));
}

#[test]
fn cli_dumps_shape_tree_as_json() {
    let exe = assert_cmd::cargo_bin!("joy-cli");
    let output = Command::new(exe)
        .args(["json", "--name", "triangle"])
        .arg(fixture())
        .output()
        .expect("run joy-cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value[0]["tag"], "polygon");
    assert_eq!(value[0]["points"], "0,0 100,0 0,100");
    assert_eq!(value[0]["fill"], "#fc0");
}

#[test]
fn cli_rejects_unknown_image_and_bad_flags() {
    let exe = assert_cmd::cargo_bin!("joy-cli");
    Command::new(exe)
        .args(["render", "--name", "missing"])
        .arg(fixture())
        .assert()
        .failure()
        .code(1);

    let exe = assert_cmd::cargo_bin!("joy-cli");
    Command::new(exe)
        .args(["render", "--bogus"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn cli_reports_invalid_scene() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let scene = tmp.path().join("bad.yml");
    fs::write(
        &scene,
        "bad:\n  shapes:\n    - shape: { line: { x1: 0 } }\n",
    )
    .expect("write scene");

    let exe = assert_cmd::cargo_bin!("joy-cli");
    let output = Command::new(exe)
        .args(["build", "--out-dir"])
        .arg(tmp.path())
        .arg(&scene)
        .output()
        .expect("run joy-cli");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing arguments for line: y1, x2, y2"));
}
