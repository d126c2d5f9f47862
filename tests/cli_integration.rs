use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Isolated HOME with a preference file pointing the base path inside it
fn setup(extra_config: &str) -> (TempDir, PathBuf, PathBuf) {
    let root = TempDir::new().expect("temp dir");
    let base = root.path().join("projects");
    let config = root.path().join("config.toml");
    write_file(
        &config,
        &format!(
            "basePath = \"{}\"\nprogramName = \"true\"\n{extra_config}",
            base.display()
        ),
    );
    (root, base, config)
}

fn run_cif(args: &[&str], home: &Path) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_code-in-folder").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("code-in-folder.exe");
        } else {
            path.push("code-in-folder");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run code-in-folder");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[cfg(unix)]
#[test]
fn new_creates_sanitized_dated_folder() {
    let (root, base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");

    let (ok, stdout, stderr) = run_cif(
        &["new", "My Cool Project!!", "--date", "2025-03-07", "--config", config],
        root.path(),
    );
    assert!(ok, "stderr: {stderr}");

    let expected = base.join("2025").join("03-07").join("my_cool_project");
    assert_eq!(stdout.trim(), expected.to_string_lossy());
    assert!(expected.is_dir());
    assert!(stderr.contains("Created as: my_cool_project"));
}

#[cfg(unix)]
#[test]
fn new_json_reports_segments() {
    let (root, base, config) = setup("addMonthDayToPath = false\n");
    let config = config.to_str().expect("utf-8 path");

    let (ok, stdout, stderr) = run_cif(
        &[
            "new", "Data", "Cleaning", "v2", "-j", "-d", "20240115", "--config", config,
        ],
        root.path(),
    );
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json["title"].as_str(), Some("Data Cleaning v2"));
    assert_eq!(json["processedTitle"].as_str(), Some("data_cleaning_v2"));
    assert_eq!(json["program"].as_str(), Some("true"));
    let segments: Vec<&str> = json["segments"]
        .as_array()
        .expect("segments")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(segments, ["2024", "data_cleaning_v2"]);
    assert!(base.join("2024").join("data_cleaning_v2").is_dir());
}

#[test]
fn new_rejects_title_without_valid_characters() {
    let (root, base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");

    let (ok, _stdout, stderr) = run_cif(&["new", "###", "--config", config], root.path());
    assert!(!ok);
    assert!(stderr.contains("Invalid Title"), "stderr: {stderr}");
    assert!(!base.exists());
}

#[test]
fn new_rejects_injected_program_before_touching_disk() {
    let (root, base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");

    let (ok, _stdout, stderr) = run_cif(
        &["new", "demo", "--program", "code; rm -rf /", "--config", config],
        root.path(),
    );
    assert!(!ok);
    assert!(
        stderr.contains("Invalid Editor Configuration"),
        "stderr: {stderr}"
    );
    assert!(!base.exists());
}

#[test]
fn new_reports_missing_editor_and_keeps_folder() {
    let (root, base, config) = setup("addYearToPath = false\naddMonthDayToPath = false\n");
    let config = config.to_str().expect("utf-8 path");

    let (ok, _stdout, stderr) = run_cif(
        &[
            "new",
            "kept",
            "--program",
            "definitely-not-an-editor-7f3a",
            "--config",
            config,
        ],
        root.path(),
    );
    assert!(!ok);
    assert!(stderr.contains("Error Opening Editor"), "stderr: {stderr}");
    assert!(stderr.contains("'definitely-not-an-editor-7f3a' not found"));
    assert!(base.join("kept").is_dir());
}

#[test]
fn new_reports_unwritable_base() {
    let (root, _base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");
    let missing_dir = root.path().join("nope").join("deeper");
    let missing = missing_dir.to_str().expect("utf-8 path");

    let (ok, _stdout, stderr) = run_cif(
        &["new", "demo", "--base-path", missing, "--config", config],
        root.path(),
    );
    assert!(!ok);
    assert!(stderr.contains("Cannot write to base directory"), "stderr: {stderr}");
    assert!(!root.path().join("nope").exists());
}

#[test]
fn preview_shows_placeholder_with_raw_base() {
    let root = TempDir::new().expect("temp dir");
    let (ok, stdout, stderr) = run_cif(
        &["preview", "--base-path", "~/playground", "--date", "2025-03-07"],
        root.path(),
    );
    assert!(ok, "stderr: {stderr}");
    assert_eq!(stdout.trim(), "~/playground/2025/03-07/[TITLE]");
}

#[test]
fn preview_respects_layout_flags_and_does_not_create() {
    let (root, base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");

    let (ok, stdout, stderr) = run_cif(
        &[
            "preview",
            "Hello World",
            "--no-year",
            "--no-month-day",
            "--config",
            config,
        ],
        root.path(),
    );
    assert!(ok, "stderr: {stderr}");
    assert_eq!(stdout.trim(), base.join("hello_world").to_string_lossy());
    assert!(!base.exists());
}

#[test]
fn preview_json_expands_home() {
    let root = TempDir::new().expect("temp dir");
    let (ok, stdout, stderr) = run_cif(
        &[
            "preview",
            "x",
            "--base-path",
            "~/code",
            "--no-year",
            "--no-month-day",
            "--json",
        ],
        root.path(),
    );
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json["display"].as_str(), Some("~/code/x"));
    let expected = root.path().join("code").join("x");
    assert_eq!(json["path"].as_str(), Some(&*expected.to_string_lossy()));
}

#[test]
fn default_config_location_is_used() {
    let root = TempDir::new().expect("temp dir");
    write_file(
        &root
            .path()
            .join(".config")
            .join("code-in-folder")
            .join("config.toml"),
        "basePath = \"/srv/work\"\naddYearToPath = false\naddMonthDayToPath = false\n",
    );

    let (ok, stdout, stderr) = run_cif(&["preview", "demo"], root.path());
    assert!(ok, "stderr: {stderr}");
    assert_eq!(stdout.trim(), "/srv/work/demo");
}

#[test]
fn check_lists_configuration_problems() {
    let (root, _base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");

    let (ok, _stdout, stderr) = run_cif(
        &["check", "--program", "code --new-window", "--config", config],
        root.path(),
    );
    assert!(!ok);
    assert!(stderr.contains("should be a single command"), "stderr: {stderr}");
}

#[test]
fn check_rejects_terminal_template_without_placeholder() {
    let (root, _base, config) = setup("terminalPreset = \"custom\"\ncustomTerminalCommand = \"ghostty\"\n");
    let config = config.to_str().expect("utf-8 path");

    let (ok, _stdout, stderr) = run_cif(&["check", "--config", config], root.path());
    assert!(!ok);
    assert!(stderr.contains("{path} placeholder"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn check_passes_for_valid_configuration() {
    let (root, _base, config) = setup("");
    let config = config.to_str().expect("utf-8 path");

    let (ok, stdout, stderr) = run_cif(&["check", "--config", config], root.path());
    assert!(ok, "stderr: {stderr}");
    assert_eq!(stdout.trim(), "Configuration OK");
}

#[test]
fn invalid_date_is_rejected() {
    let root = TempDir::new().expect("temp dir");
    let (ok, _stdout, stderr) = run_cif(&["preview", "--date", "someday"], root.path());
    assert!(!ok);
    assert!(stderr.contains(r#"Invalid date "someday""#), "stderr: {stderr}");
}
