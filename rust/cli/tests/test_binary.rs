//! Process-level tests: the built `cardtree` binary with a controlled environment.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const CONFIG_VARS: &[&str] = &[
    "CARDTREE_CONFIG",
    "CARDTREE_RENDERER",
    "CARDTREE_FORMAT",
    "CARDTREE_SEED",
    "CARDTREE_HAND_SIZE",
    "RUST_LOG",
];

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cardtree"))
}

fn command(args: &[&str], env: &[(&str, &str)]) -> Command {
    let mut cmd = Command::new(binary());
    cmd.args(args);
    for key in CONFIG_VARS {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd
}

fn run_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
    command(args, env).output().expect("failed to run cardtree")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn cfg_reports_sources() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("cardtree.toml");
    std::fs::write(&file, "renderer = \"neato\"\nhand_size = 4\n").unwrap();
    let path = file.to_string_lossy().into_owned();

    let output = run_with_env(
        &["cfg"],
        &[("CARDTREE_CONFIG", path.as_str()), ("CARDTREE_FORMAT", "png")],
    );
    assert!(output.status.success(), "{}", stderr_of(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["renderer"]["value"], "neato");
    assert_eq!(json["renderer"]["source"], "file");
    assert_eq!(json["image_format"]["value"], "png");
    assert_eq!(json["image_format"]["source"], "env");
    assert_eq!(json["seed"]["source"], "default");
    assert_eq!(json["hand_size"]["value"], 4);
}

#[test]
fn invalid_configuration_exits_with_error() {
    let output = run_with_env(&["cfg"], &[("CARDTREE_HAND_SIZE", "0")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).starts_with("Error: Configuration error"));
}

#[test]
fn configured_seed_and_hand_size_drive_deal() {
    let env = [("CARDTREE_SEED", "21"), ("CARDTREE_HAND_SIZE", "5")];
    let first = run_with_env(&["deal"], &env);
    let second = run_with_env(&["deal"], &env);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_of(&first).trim_end().split(',').count(), 5);
}

#[test]
fn session_reads_piped_stdin() {
    let mut child = command(&["session"], &[])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn cardtree");
    child
        .stdin
        .take()
        .unwrap()
        .write_all("start A♣ 2♣ 3♣\ntraverse pre\nremove Q♦\n".as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("preOrder: 2♣ A♣ 3♣"));
    assert!(stderr_of(&output).contains("Error: Card Q♦ is not in the tree"));
}

#[test]
fn rust_log_enables_engine_events_on_stderr() {
    let output = run_with_env(
        &["tree", "--cards", "A♣,2♣,A♣"],
        &[("RUST_LOG", "cardtree_engine=warn")],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("rejected start with duplicated card"), "{}", stderr);
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn render_uses_configured_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("fake-dot.sh");
    std::fs::write(&script, "cat > \"$3\"\n").unwrap();
    let renderer = format!("sh {}", script.display());
    let image = dir.path().join("tree.svg");
    let image_arg = image.to_string_lossy().into_owned();

    let output = run_with_env(
        &["render", "--cards", "K♠,Q♥", "--output", &image_arg],
        &[("CARDTREE_RENDERER", renderer.as_str()), ("CARDTREE_FORMAT", "svg")],
    );
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert!(stdout_of(&output).starts_with("rendered "));
    assert!(std::fs::read_to_string(&image).unwrap().contains("K♠"));
}

#[test]
fn missing_renderer_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("tree.png");
    let image_arg = image.to_string_lossy().into_owned();
    let output = run_with_env(
        &["render", "--cards", "K♠", "--output", &image_arg],
        &[("CARDTREE_RENDERER", "cardtree-missing-renderer")],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("not found"));
}
