use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_eldoc")))
}

const WIDGET_SOURCE: &str = r#"// @element x-switch
// @event ^toggle - Fired when the switch is toggled.
// @part thumb - The movable thumb.
export default class XSwitchElement extends HTMLElement {
  // @property
  // @attribute
  // @type boolean
  // @default false
  // Whether the switch is on.
  get toggled() {
    return this.hasAttribute("toggled");
  }

  // @method
  // Moves focus to the switch.
  focus() {
    this._thumb.focus();
  }
}
"#;

const CHANGELOG: &str = "\
# Changelog

## 2.0.0 (PENDING)
- [Breaking] New theming engine

## 1.2.0 (2024-01-15)
- [Fixed] Long item text that
  wraps onto the next line.
";

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd().write_stdin(WIDGET_SOURCE).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("# x-switch\n"));
    assert!(output.contains("Class: `XSwitchElement`"));
    assert!(output.contains("* **toggle** (bubbles): Fired when the switch is toggled."));
    assert!(output.contains("### toggled"));
    assert!(output.contains("* Type: `boolean`"));
    assert!(output.contains("### focus()"));
}

#[test]
fn stdin_html_format() {
    let assert = cmd()
        .args(["-f", "html"])
        .write_stdin(WIDGET_SOURCE)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<h1><code>&lt;x-switch&gt;</code></h1>"));
    assert!(output.contains("<h2>Properties</h2>"));
}

#[test]
fn stdin_json_format() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(WIDGET_SOURCE)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"elementName\": \"x-switch\""));
    assert!(output.contains("\"bubbles\": true"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let source = input_dir.path().join("x-switch.js");
    fs::write(&source, WIDGET_SOURCE).unwrap();

    cmd()
        .args(["-o", output_dir.path().to_str().unwrap()])
        .arg(source.to_str().unwrap())
        .assert()
        .success();

    let output = fs::read_to_string(output_dir.path().join("x-switch.md")).unwrap();
    assert!(output.starts_with("# x-switch\n"));
}

#[test]
fn file_mode_renders_changelog() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let changelog = input_dir.path().join("CHANGELOG.md");
    fs::write(&changelog, CHANGELOG).unwrap();

    cmd()
        .args(["-o", output_dir.path().to_str().unwrap()])
        .arg(changelog.to_str().unwrap())
        .assert()
        .success();

    let output = fs::read_to_string(output_dir.path().join("CHANGELOG.md")).unwrap();
    assert!(output.contains("## 2.0.0 (PENDING)"));
    assert!(output.contains("* **[Fixed]** Long item text that wraps onto the next line."));
}

#[test]
fn file_mode_json_union_type() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let source = input_dir.path().join("x-input.js");
    fs::write(
        &source,
        "// @element x-input\nexport default class XInputElement extends HTMLElement {\n  // @property\n  // @type string || number\n  get value() {\n    return this._value;\n  }\n}\n",
    )
    .unwrap();

    cmd()
        .args(["-o", output_dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(source.to_str().unwrap())
        .assert()
        .success();

    let output = fs::read_to_string(output_dir.path().join("x-input.json")).unwrap();
    assert!(output.contains("\"type\": [\"string\", \"number\"]"));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg("x-switch.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_skips_unsupported_files() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let source = input_dir.path().join("widget.py");
    fs::write(&source, "pass\n").unwrap();

    cmd()
        .args(["-o", output_dir.path().to_str().unwrap()])
        .arg(source.to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));
}

#[test]
fn invalid_format_fails() {
    let output_dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", output_dir.path().to_str().unwrap()])
        .args(["-f", "xml"])
        .arg("x-switch.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- release checks --

#[test]
fn latest_prints_newest_release() {
    let input_dir = TempDir::new().unwrap();
    let changelog = input_dir.path().join("CHANGELOG.md");
    fs::write(&changelog, CHANGELOG).unwrap();

    cmd()
        .arg("--latest")
        .arg(changelog.to_str().unwrap())
        .assert()
        .success()
        .stdout("2.0.0 PENDING\n");
}

#[test]
fn deny_pending_blocks_pending_release() {
    let input_dir = TempDir::new().unwrap();
    let changelog = input_dir.path().join("CHANGELOG.md");
    fs::write(&changelog, CHANGELOG).unwrap();

    cmd()
        .arg("--deny-pending")
        .arg(changelog.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("still pending"));
}

#[test]
fn deny_pending_passes_dated_release() {
    let input_dir = TempDir::new().unwrap();
    let changelog = input_dir.path().join("CHANGELOG.md");
    fs::write(
        &changelog,
        "# Changelog\n\n## 1.2.0 (2024-01-15)\n- [Fixed] Menu positioning\n",
    )
    .unwrap();

    cmd()
        .arg("--deny-pending")
        .arg(changelog.to_str().unwrap())
        .assert()
        .success();
}

#[test]
fn latest_fails_on_malformed_changelog() {
    let input_dir = TempDir::new().unwrap();
    let changelog = input_dir.path().join("CHANGELOG.md");
    fs::write(&changelog, "- [Fixed] Orphaned item\n## 1.0.0 (2023-10-01)\n").unwrap();

    cmd()
        .arg("--latest")
        .arg(changelog.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("before any version subtitle"));
}
