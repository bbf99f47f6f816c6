//! CLI contract tests
//!
//! Runs the `postcraft` binary against temp files and stdin and checks the
//! JSON it prints.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn postcraft_bin() -> String {
    env!("CARGO_BIN_EXE_postcraft").to_string()
}

fn run(dir: &Path, args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let mut child = Command::new(postcraft_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("POSTCRAFT_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut handle = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            handle.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn long_text() -> String {
    (1..=20)
        .map(|i| format!("Point {} explains one more detail about the topic at hand.", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn split_reads_file_and_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), long_text()).unwrap();

    let (code, stdout, stderr) = run(
        dir.path(),
        &["split", "notes.txt", "--max-parts", "3", "--seed", "1", "-f", "json"],
        None,
    );
    assert_eq!(code, 0, "stderr: {}", stderr);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let fragments = value["fragments"].as_array().unwrap();
    assert_eq!(fragments.len(), 3);
    assert!(fragments[0]["content"]
        .as_str()
        .unwrap()
        .starts_with("Thread: Point 1"));
    assert_eq!(value["analysis"]["partScores"].as_array().unwrap().len(), 3);
}

#[test]
fn split_reads_stdin_and_exports() {
    let dir = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run(
        dir.path(),
        &["split", "--no-hook", "--no-cta", "-f", "export"],
        Some(&long_text()),
    );
    assert_eq!(code, 0);
    assert!(stdout.starts_with("1/"));
    assert!(stdout.contains("\n\n---\n\n"));
    assert!(!stdout.contains("Thread: "));
}

#[test]
fn split_save_updates_settings_file() {
    let dir = tempfile::tempdir().unwrap();

    let (code, _, _) = run(
        dir.path(),
        &["split", "--max-parts", "7", "--no-cta", "--save", "-f", "json"],
        Some("One sentence."),
    );
    assert_eq!(code, 0);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("postcraft.json")).unwrap())
            .unwrap();
    assert_eq!(saved["segmentation"]["maxParts"], 7);
    assert_eq!(saved["segmentation"]["addCta"], false);
    assert_eq!(saved["segmentation"]["addHook"], true);
}

#[test]
fn thread_command_scores_separated_posts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("draft.txt"),
        "Thread: Did you know this?\n---\nFollow for more.\n",
    )
    .unwrap();

    let (code, stdout, _) = run(dir.path(), &["thread", "draft.txt", "-f", "json"], None);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["hookStrength"], 80);
    assert_eq!(value["ctaEffectiveness"], 80);
    assert_eq!(value["totalScore"], 66);
}

#[test]
fn thread_command_accepts_json_arrays() {
    let dir = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run(
        dir.path(),
        &["thread", "--json", "-f", "json"],
        Some(r#"["one", "two", "three"]"#),
    );
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["partScores"].as_array().unwrap().len(), 3);
}

#[test]
fn thread_command_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();

    let (code, _, stderr) = run(dir.path(), &["thread", "--json"], Some("{not json"));
    assert_ne!(code, 0);
    assert!(stderr.contains("not a JSON array of strings"));
}

#[test]
fn post_command_uses_media_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("post.txt"), "Would you try this? #rust\n").unwrap();

    let (code, stdout, _) = run(
        dir.path(),
        &["post", "post.txt", "--media", "https://example.com/a.png", "-f", "json"],
        None,
    );
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["contentMetrics"]["hasMedia"], true);
    assert_eq!(value["contentMetrics"]["hashtagCount"], 1);
    assert_eq!(value["contentMetrics"]["wordCount"], 5);
    let overall = value["overallScore"].as_u64().unwrap();
    assert!(overall <= 100);
}

#[test]
fn init_writes_defaults_and_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run(dir.path(), &["init"], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("postcraft.json"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("postcraft.json")).unwrap())
            .unwrap();
    assert_eq!(written["limits"]["maxChars"], 280);
    assert_eq!(written["segmentation"]["maxParts"], 5);

    let (code, _, stderr) = run(dir.path(), &["init"], None);
    assert_ne!(code, 0);
    assert!(stderr.contains("already exists"));

    let (code, _, _) = run(dir.path(), &["init", "--force"], None);
    assert_eq!(code, 0);
}

#[test]
fn config_flag_changes_limits() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("custom.json"),
        r#"{ "limits": { "maxChars": 100 } }"#,
    )
    .unwrap();

    let (code, stdout, _) = run(
        dir.path(),
        &["--config", "custom.json", "split", "--no-hook", "--no-cta", "-f", "json"],
        Some(&long_text()),
    );
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    for fragment in value["fragments"].as_array().unwrap() {
        assert!(fragment["content"].as_str().unwrap().chars().count() <= 97);
    }
}

#[test]
fn split_blank_stdin_yields_one_empty_fragment() {
    let dir = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run(dir.path(), &["split", "-f", "json"], Some(" \n\t \n"));
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let fragments = value["fragments"].as_array().unwrap();
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0]["content"], "");
}
