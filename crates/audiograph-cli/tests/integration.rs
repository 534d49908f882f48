//! Integration tests for audiograph-cli.
//!
//! Tests cover the CLI binary invocation, the catalog listings, and the
//! encode/check/convert workflows on factory patches and patch files.

use std::process::Command;

/// Helper to get the path to the `audiograph` binary built by cargo.
fn audiograph_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_audiograph"))
}

// ---------------------------------------------------------------------------
// CLI binary tests -- `audiograph params`
// ---------------------------------------------------------------------------

#[test]
fn cli_params_lists_labels() {
    let output = audiograph_bin()
        .arg("params")
        .output()
        .expect("failed to run audiograph params");

    assert!(output.status.success(), "audiograph params failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Parameters"), "should show header");

    for label in ["frequency", "detune", "delayTime", "Q", "loop", "curve", "pan"] {
        assert!(
            stdout.contains(label),
            "params listing should contain '{label}'"
        );
    }
}

#[test]
fn cli_params_filters_by_class() {
    let output = audiograph_bin()
        .args(["params", "--node-properties"])
        .output()
        .expect("failed to run audiograph params --node-properties");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fftSize"));
    assert!(
        !stdout.contains("AudioParam"),
        "node property listing should not contain audio params"
    );
}

#[test]
fn cli_params_detail_shows_class() {
    let output = audiograph_bin()
        .args(["params", "frequency"])
        .output()
        .expect("failed to run audiograph params frequency");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AudioParam"), "frequency is an audio param");
    assert!(stdout.contains("<key>.frequency"), "should show reference form");
}

#[test]
fn cli_params_unknown_label_fails() {
    let output = audiograph_bin()
        .args(["params", "nonexistent_param"])
        .output()
        .expect("failed to run audiograph params");

    assert!(!output.status.success(), "unknown label should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown parameter"),
        "should print error about unknown parameter"
    );
}

// ---------------------------------------------------------------------------
// CLI binary tests -- `audiograph nodes` / `audiograph patches`
// ---------------------------------------------------------------------------

#[test]
fn cli_nodes_lists_type_tags() {
    let output = audiograph_bin()
        .arg("nodes")
        .output()
        .expect("failed to run audiograph nodes");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for tag in [
        "OscillatorNode",
        "AudioDestinationNode",
        "ConstantSource",
        "WaveShaperNode",
    ] {
        assert!(stdout.contains(tag), "nodes listing should contain '{tag}'");
    }
}

#[test]
fn cli_patches_lists_factory_patches() {
    let output = audiograph_bin()
        .arg("patches")
        .output()
        .expect("failed to run audiograph patches");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["Sine", "Tremolo", "Feedback Delay", "Filter Sweep"] {
        assert!(stdout.contains(name), "patches listing should contain '{name}'");
    }
}

#[test]
fn cli_help_works() {
    let output = audiograph_bin()
        .arg("--help")
        .output()
        .expect("failed to run audiograph --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Audiograph patch tool"));
    assert!(stdout.contains("encode"));
    assert!(stdout.contains("convert"));
}

#[test]
fn cli_version_works() {
    let output = audiograph_bin()
        .arg("--version")
        .output()
        .expect("failed to run audiograph --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("audiograph"),
        "version output should contain binary name"
    );
}

// ---------------------------------------------------------------------------
// End-to-end patch workflows
// ---------------------------------------------------------------------------

#[test]
fn cli_encode_factory_patch() {
    let output = audiograph_bin()
        .args(["encode", "sine"])
        .output()
        .expect("failed to run audiograph encode");

    assert!(
        output.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let roots = json.as_array().expect("encoded graph should be an array");
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["key"], "master");
    assert_eq!(roots[0]["type"], "GainNode");
    assert_eq!(roots[1]["connections"][0]["type"], "RefNode");
}

#[test]
fn cli_encode_to_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = dir.path().join("tremolo.json");

    let output = audiograph_bin()
        .args(["encode", "tremolo", "--pretty", "-o"])
        .arg(&out)
        .output()
        .expect("failed to run audiograph encode");

    assert!(
        output.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "JSON should go to the file only");

    let text = std::fs::read_to_string(&out).expect("output file should exist");
    assert!(text.contains('\n'), "pretty output should span lines");
    let json: serde_json::Value = serde_json::from_str(&text).expect("file should be JSON");
    assert_eq!(
        json[2]["connections"][0]["connections"][0]["key"],
        "amp.gain"
    );
}

#[test]
fn cli_encode_unknown_patch_fails() {
    let output = audiograph_bin()
        .args(["encode", "no_such_patch"])
        .output()
        .expect("failed to run audiograph encode");

    assert!(!output.status.success(), "unknown patch should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "got: {stderr}");
}

#[test]
fn cli_check_prints_stats() {
    let output = audiograph_bin()
        .args(["check", "feedback_delay"])
        .output()
        .expect("failed to run audiograph check");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Feedback Delay"));
    assert!(stdout.contains("Roots:"));
    assert!(stdout.contains("DelayNode"));
}

#[test]
fn cli_check_reports_malformed_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"type": "GainNode", "properties": []}]"#)
        .expect("failed to write patch");

    let output = audiograph_bin()
        .arg("check")
        .arg(&path)
        .output()
        .expect("failed to run audiograph check");

    assert!(!output.status.success(), "malformed graph should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("$[0]"), "should point at the node: {stderr}");
    assert!(stderr.contains("connections"), "got: {stderr}");
}

#[test]
fn cli_convert_round_trip() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let json_path = dir.path().join("sweep.json");
    let toml_path = dir.path().join("nested").join("sweep.toml");

    let output = audiograph_bin()
        .args(["convert", "filter_sweep"])
        .arg(&json_path)
        .output()
        .expect("failed to run audiograph convert");
    assert!(
        output.status.success(),
        "convert failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("as JSON"));

    let output = audiograph_bin()
        .arg("convert")
        .arg(&json_path)
        .arg(&toml_path)
        .output()
        .expect("failed to run audiograph convert");
    assert!(output.status.success());
    assert!(toml_path.exists(), "TOML file should be written");

    let output = audiograph_bin()
        .arg("check")
        .arg(&toml_path)
        .output()
        .expect("failed to run audiograph check");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Filter Sweep"));
    assert!(stdout.contains("1 scheduled updates"));
}
