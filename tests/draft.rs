//! Tests for the file-backed draft store.
mod common;
use common::*;
use quote_form::prelude::*;
use tempfile::tempdir;

#[test]
fn test_file_store_survives_reopening() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("drafts.bin");

    let mut engine = quote_engine(FileDraftStore::open(&path).unwrap());
    engine.input("email", "jane@x.com").unwrap();
    engine.input("phone", "27821234567").unwrap();
    drop(engine);

    let engine = quote_engine(FileDraftStore::open(&path).unwrap());
    assert_eq!(engine.value("email"), Some("jane@x.com"));
    assert_eq!(engine.value("phone"), Some("27 821 234 567"));
}

#[test]
fn test_file_store_is_emptied_by_a_completed_submission() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("drafts.bin");

    let mut engine = quote_engine(FileDraftStore::open(&path).unwrap());
    fill(&mut engine, &JANE);
    engine.submit().unwrap();
    engine.complete_submission();
    drop(engine);

    let store = FileDraftStore::open(&path).unwrap();
    for id in ["name", "phone", "email", "service", "message"] {
        assert_eq!(store.get(&format!("ubuntu_form_{}", id)).unwrap(), None);
    }
}

#[test]
fn test_failed_removal_keeps_the_entry_for_a_retry() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("drafts.bin");
    let mut store = FileDraftStore::open(&path).unwrap();
    store.set("ubuntu_form_name", "Jane").unwrap();

    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    assert!(matches!(
        store.remove("ubuntu_form_name"),
        Err(StoreError::Io(_))
    ));
    assert_eq!(
        store.get("ubuntu_form_name").unwrap().as_deref(),
        Some("Jane")
    );

    std::fs::remove_dir(&path).unwrap();
    store.remove("ubuntu_form_name").unwrap();
    let reopened = FileDraftStore::open(&path).unwrap();
    assert_eq!(reopened.get("ubuntu_form_name").unwrap(), None);
}

#[test]
fn test_corrupt_file_is_a_codec_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("drafts.bin");
    std::fs::write(&path, [5u8]).unwrap();

    let err = FileDraftStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Codec(_)));
}

#[test]
fn test_config_round_trips_through_toml() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("form.toml");
    assert_eq!(FormConfig::load(&path).unwrap(), FormConfig::default());

    let config = FormConfig {
        recipient: "office@example.org".to_string(),
        redirect_delay_ms: 2000,
        ..FormConfig::default()
    };
    config.save(&path).unwrap();
    assert_eq!(FormConfig::load(&path).unwrap(), config);
}

#[test]
fn test_form_definition_from_json() {
    let json = r#"{"fields": [
        {"id": "name", "kind": "text", "required": true},
        {"id": "phone", "kind": "tel"}
    ]}"#;
    let form = FormDefinition::from_json(json).unwrap();
    assert_eq!(form.fields().len(), 2);
    assert!(!form.field("phone").unwrap().required);
    assert!(form.field("phone").unwrap().is_checked_on_submit());

    let duplicate = r#"{"fields": [
        {"id": "name", "kind": "text"},
        {"id": "name", "kind": "email"}
    ]}"#;
    assert_eq!(
        FormDefinition::from_json(duplicate).unwrap_err(),
        FormError::DuplicateField("name".to_string())
    );

    let unnamed = r#"{"fields": [{"id": " ", "kind": "text"}]}"#;
    assert_eq!(
        FormDefinition::from_json(unnamed).unwrap_err(),
        FormError::EmptyFieldId { position: 0 }
    );
}
