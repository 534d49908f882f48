//! Integration tests for audiograph-config.
//!
//! These tests verify patch files end to end: building, saving, loading and
//! encoding across both formats.

use audiograph_config::{ConfigError, Patch, factory_patches, get_factory_patch};
use audiograph_core::kinds::{dac, delay, gain, oscillator};
use audiograph_core::params::{delay_time, fft_size, frequency, loop_, type_};
use audiograph_core::{key, param, reference};
use tempfile::TempDir;

fn echo_patch() -> Patch {
    Patch::new("Echo")
        .with_description("Integration test patch")
        .with_root(key(
            "echo",
            delay(
                vec![delay_time(0.25), loop_(false), fft_size(1024)],
                vec![dac(), gain(vec![], vec![reference("echo")])],
            ),
        ))
        .with_root(oscillator(
            vec![type_("sine"), frequency(330.0).linear_ramp_to_value_at_time(2.0)],
            vec![reference("echo"), param("echo", "delayTime")],
        ))
}

/// Save and reload in both formats.
#[test]
fn test_save_load_both_formats() {
    let dir = TempDir::new().unwrap();
    let original = echo_patch();

    for file in ["echo.toml", "echo.json"] {
        let path = dir.path().join(file);
        original.save(&path).unwrap();
        assert!(path.exists());

        let loaded = Patch::load(&path).unwrap();
        assert_eq!(loaded, original, "round trip through {file}");
    }
}

/// Saving creates missing parent directories.
#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/patch.toml");

    echo_patch().save(&path).unwrap();
    assert!(path.exists());
}

/// A bare graph array (what the host receives) loads as a patch named after the file.
#[test]
fn test_load_encoded_graph_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host_dump.json");
    let patch = echo_patch();
    std::fs::write(&path, serde_json::to_string_pretty(&patch.encode()).unwrap()).unwrap();

    let loaded = Patch::load(&path).unwrap();
    assert_eq!(loaded.name, "host_dump");
    assert!(loaded.description.is_none());
    assert_eq!(loaded.graph, patch.graph);
}

/// Convert a factory patch from TOML to JSON and back.
#[test]
fn test_factory_patch_conversion() {
    let dir = TempDir::new().unwrap();

    for patch in factory_patches() {
        let json_path = dir.path().join(format!("{}.json", patch.name));
        patch.save(&json_path).unwrap();
        let from_json = Patch::load(&json_path).unwrap();

        let toml_path = dir.path().join(format!("{}.toml", patch.name));
        from_json.save(&toml_path).unwrap();
        let from_toml = Patch::load(&toml_path).unwrap();

        assert_eq!(from_toml, patch, "factory patch '{}' should convert cleanly", patch.name);
    }
}

/// The host encoding of a loaded patch matches the encoding of the built one.
#[test]
fn test_factory_patch_encoding_shape() {
    let tremolo = get_factory_patch("tremolo").unwrap();
    let encoded = tremolo.encode();

    let roots = encoded.as_array().unwrap();
    assert_eq!(roots.len(), 3);
    assert_eq!(roots[0]["key"], "amp");
    assert_eq!(
        roots[2]["connections"][0]["connections"][0],
        serde_json::json!({"key": "amp.gain", "type": "RefNode"})
    );
}

/// Loading a missing file reports the path.
#[test]
fn test_missing_file_error() {
    let err = Patch::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

/// A malformed graph in a JSON file is reported with its location.
#[test]
fn test_malformed_graph_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"type": "GainNode", "properties": [], "connections": [{"type": 4}]}]"#)
        .unwrap();

    let err = Patch::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Decode(_)));
    assert!(err.to_string().contains("$[0].connections[0]"), "got: {err}");
}
