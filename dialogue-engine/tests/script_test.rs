//! Integration tests for [`dialogue_engine::Script`] loading and validation.
//!
//! Covers: JSON file loading, parse failures, unknown topic labels, the closure
//! check (dangling references from entries and from the greeting), and engine
//! construction refusing a broken script.

use std::io::Write;
use std::sync::Arc;

use dialogue_engine::{DialogueEngine, Script};
use kiro_core::{KiroError, ScriptError, Topic};

fn write_script_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// **Test: The built-in script round-trips through a JSON file.**
///
/// **Setup:** Serialize `Script::builtin()` to a temp file.
/// **Action:** `Script::from_json_file`.
/// **Expected:** The loaded script equals the built-in one and passes validation.
#[test]
fn test_builtin_round_trips_through_a_file() {
    let builtin = Script::builtin();
    let file = write_script_file(&serde_json::to_string_pretty(&builtin).unwrap());

    let loaded = Script::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, builtin);
    assert!(loaded.validate().is_ok());
}

/// **Test: A malformed script file fails with a Parse error, not a panic.**
#[test]
fn test_malformed_file_is_a_parse_error() {
    let file = write_script_file("{ not json");
    let err = Script::from_json_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        KiroError::Script(ScriptError::Parse(_))
    ));
}

/// **Test: An unknown topic label in a script file fails deserialization.**
///
/// **Setup:** A script offering "Careers", which is not in the topic set.
/// **Expected:** `ScriptError::Parse` naming the bad label path.
#[test]
fn test_unknown_topic_label_fails_deserialization() {
    let raw = r#"{
        "bot_name": "Kiro",
        "tagline": "Your Fubotics Assistant",
        "greeting": { "text": "Hi!", "root_topics": ["Careers"] },
        "entries": {}
    }"#;
    let file = write_script_file(raw);
    let err = Script::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, KiroError::Script(ScriptError::Parse(_))));
}

/// **Test: A missing script file surfaces as an IO error.**
#[test]
fn test_missing_file_is_an_io_error() {
    let err = Script::from_json_file("no/such/script.json").unwrap_err();
    assert!(matches!(err, KiroError::Io(_)));
}

/// **Test: An entry offering a topic without a table entry fails validation.**
///
/// **Setup:** Services offers Menu, but Menu has no entry.
/// **Expected:** `DanglingTopic { offered_by: "Services", topic: Menu }`.
#[test]
fn test_dangling_next_topic_fails_validation() {
    let raw = r#"{
        "bot_name": "Kiro",
        "tagline": "Your Fubotics Assistant",
        "greeting": { "text": "Hi!", "root_topics": ["Services"] },
        "entries": {
            "Services": { "text": "We offer things.", "next_topics": ["Menu"] }
        }
    }"#;
    let script: Script = serde_json::from_str(raw).unwrap();

    let err = script.validate().unwrap_err();
    match err {
        ScriptError::DanglingTopic { offered_by, topic } => {
            assert_eq!(offered_by, "Services");
            assert_eq!(topic, Topic::Menu);
        }
        other => panic!("expected DanglingTopic, got {other}"),
    }
}

/// **Test: A greeting offering an uncovered topic fails validation as "greeting".**
#[test]
fn test_dangling_root_topic_fails_validation() {
    let raw = r#"{
        "bot_name": "Kiro",
        "tagline": "Your Fubotics Assistant",
        "greeting": { "text": "Hi!", "root_topics": ["Pricing"] },
        "entries": {
            "Menu": { "text": "What else?", "next_topics": ["Menu"] }
        }
    }"#;
    let script: Script = serde_json::from_str(raw).unwrap();

    let err = script.validate().unwrap_err();
    match err {
        ScriptError::DanglingTopic { offered_by, topic } => {
            assert_eq!(offered_by, "greeting");
            assert_eq!(topic, Topic::Pricing);
        }
        other => panic!("expected DanglingTopic, got {other}"),
    }
}

/// **Test: An empty table and an empty root set are each rejected.**
#[test]
fn test_empty_script_and_empty_roots_are_rejected() {
    let empty = r#"{
        "bot_name": "Kiro",
        "tagline": "Your Fubotics Assistant",
        "greeting": { "text": "Hi!", "root_topics": ["Menu"] },
        "entries": {}
    }"#;
    let script: Script = serde_json::from_str(empty).unwrap();
    assert!(matches!(script.validate(), Err(ScriptError::EmptyScript)));

    let no_roots = r#"{
        "bot_name": "Kiro",
        "tagline": "Your Fubotics Assistant",
        "greeting": { "text": "Hi!", "root_topics": [] },
        "entries": {
            "Menu": { "text": "What else?", "next_topics": ["Menu"] }
        }
    }"#;
    let script: Script = serde_json::from_str(no_roots).unwrap();
    assert!(matches!(script.validate(), Err(ScriptError::NoRootTopics)));
}

/// **Test: Engine construction runs the closure check; a broken script never
/// produces an engine.**
#[test]
fn test_engine_refuses_a_broken_script() {
    let raw = r#"{
        "bot_name": "Kiro",
        "tagline": "Your Fubotics Assistant",
        "greeting": { "text": "Hi!", "root_topics": ["Services"] },
        "entries": {
            "Services": { "text": "We offer things.", "next_topics": ["Menu"] }
        }
    }"#;
    let script: Script = serde_json::from_str(raw).unwrap();

    let err = DialogueEngine::new(Arc::new(script)).unwrap_err();
    assert!(matches!(err, ScriptError::DanglingTopic { .. }));
}
