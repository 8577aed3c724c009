use margin_core::{ConfigError, PresetStore, DEFAULT_P_MAN};
use std::io::Write;

const PRESETS_JSON: &str = r#"{
    "Zeta screening": {"P_ab_pred": 0.9, "P_prev_ab": 0.1, "P_fn": 0.2},
    "Alpha triage": {"P_ab_pred": 0.5, "P_prev_ab": 0.3, "P_fn": 0.1, "P_man": 0.12},
    "Middle": {"P_ab_pred": 1, "P_prev_ab": 0, "P_fn": 0.4, "P_man": 0.3}
}"#;

#[test]
fn load_keeps_declaration_order() {
    let store = PresetStore::from_json_str(PRESETS_JSON).expect("parse presets");
    let names: Vec<&str> = store.names().collect();
    assert_eq!(names, vec!["Zeta screening", "Alpha triage", "Middle"]);
    assert_eq!(store.default_preset().name, "Zeta screening");
    assert_eq!(store.len(), 3);
}

#[test]
fn missing_p_man_defaults() {
    let store = PresetStore::from_json_str(PRESETS_JSON).expect("parse presets");
    let first = store.get("Zeta screening").expect("first preset");
    assert_eq!(first.parameters.p_man, DEFAULT_P_MAN);
    let second = store.get("Alpha triage").expect("second preset");
    assert_eq!(second.parameters.p_man, 0.12);
}

#[test]
fn integer_values_are_accepted() {
    let store = PresetStore::from_json_str(PRESETS_JSON).expect("parse presets");
    let middle = store.get("Middle").expect("middle preset");
    assert_eq!(middle.parameters.p_ab_pred, 1.0);
    assert_eq!(middle.parameters.p_prev_ab, 0.0);
}

#[test]
fn unknown_preset_is_reported() {
    let store = PresetStore::from_json_str(PRESETS_JSON).expect("parse presets");
    let err = store.get("Nope").expect_err("unknown preset");
    assert_eq!(err.0, "Nope");
}

#[test]
fn missing_required_field_is_rejected() {
    let result = PresetStore::from_json_str(r#"{"a": {"P_ab_pred": 0.5, "P_fn": 0.1}}"#);
    match result {
        Err(ConfigError::MissingField { preset, field }) => {
            assert_eq!(preset, "a");
            assert_eq!(field, "P_prev_ab");
        }
        other => panic!("expected missing field, got {other:?}"),
    }
}

#[test]
fn out_of_range_value_is_rejected() {
    let result = PresetStore::from_json_str(
        r#"{"a": {"P_ab_pred": 0.5, "P_prev_ab": 0.5, "P_fn": 0.1, "P_man": 1.5}}"#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::OutOfRange { field: "P_man", .. })
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let result = PresetStore::from_json_str(
        r#"{
            "a": {"P_ab_pred": 0.5, "P_prev_ab": 0.5, "P_fn": 0.1},
            "a": {"P_ab_pred": 0.2, "P_prev_ab": 0.5, "P_fn": 0.1}
        }"#,
    );
    assert!(matches!(result, Err(ConfigError::DuplicatePreset(name)) if name == "a"));
}

#[test]
fn empty_and_malformed_sources_are_rejected() {
    assert!(matches!(
        PresetStore::from_json_str("{}"),
        Err(ConfigError::Empty)
    ));
    assert!(matches!(
        PresetStore::from_json_str("[1, 2, 3]"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        PresetStore::from_json_str(r#"{"a": {"P_ab_pred": "high"}}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn toml_source_matches_json_source() {
    let toml_src = r#"
["Zeta screening"]
P_ab_pred = 0.9
P_prev_ab = 0.1
P_fn = 0.2

["Alpha triage"]
P_ab_pred = 0.5
P_prev_ab = 0.3
P_fn = 0.1
P_man = 0.12

[Middle]
P_ab_pred = 1
P_prev_ab = 0
P_fn = 0.4
P_man = 0.3
"#;
    let from_toml = PresetStore::from_toml_str(toml_src).expect("parse toml");
    let from_json = PresetStore::from_json_str(PRESETS_JSON).expect("parse json");
    let toml_presets: Vec<_> = from_toml.iter().cloned().collect();
    let json_presets: Vec<_> = from_json.iter().cloned().collect();
    assert_eq!(toml_presets, json_presets);
}

#[test]
fn load_reads_file_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("presets_config.json");
    let mut file = std::fs::File::create(&path).expect("create preset file");
    file.write_all(PRESETS_JSON.as_bytes())
        .expect("write preset file");

    let store = PresetStore::load(&path).expect("load presets");
    assert_eq!(store.default_preset().name, "Zeta screening");
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = PresetStore::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn load_parse_error_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write broken file");
    match PresetStore::load(&path) {
        Err(ConfigError::Parse(msg)) => assert!(msg.contains("broken.json")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
