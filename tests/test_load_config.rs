use std::fs::write;
use tempfile::NamedTempFile;

use s3_sync::config::Item;
use s3_sync::load_config::load_config;

/// This test ensures that a full config produces a valid SyncConfig with
/// both bare and structured items.
#[test]
fn test_load_config_success_with_mixed_items() {
    let config_yaml = r#"
sync:
  bucket: my-deploy-bucket
  items:
    - assets
    - name: ./logs
      s3Config:
        ContentType: text/plain
        CacheControl: max-age=300
  cleanBucket: false
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let config = load_config(config_file.path())
        .expect("Config should load")
        .into_validated()
        .expect("Config should validate");

    assert_eq!(config.bucket, "my-deploy-bucket");
    assert!(!config.clean_bucket);
    assert!(!config.wipe_entire_bucket);
    assert!(!config.ignore_hooks);

    let items = config.items.expect("items should be present");
    assert_eq!(items.len(), 2);
    match &items[0] {
        Item::Name(name) => assert_eq!(name, "assets"),
        other => panic!("expected bare item, got {other:?}"),
    }
    let spec = items[1].to_spec().expect("structured item should normalise");
    assert_eq!(spec.name, "./logs");
    let overrides = spec.s3_config.expect("overrides present");
    assert_eq!(overrides.content_type.as_deref(), Some("text/plain"));
    assert_eq!(overrides.cache_control.as_deref(), Some("max-age=300"));
}

/// Items are optional: a bucket-only config validates and simply uploads
/// nothing.
#[test]
fn test_load_config_allows_absent_items() {
    let config_yaml = "sync:\n  bucket: my-deploy-bucket\n";
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let config = load_config(config_file.path())
        .expect("Config should load")
        .into_validated()
        .expect("Config should validate");
    assert!(config.items.is_none(), "items should be absent");
}

/// A file without a sync section parses, but validation rejects it.
#[test]
fn test_load_config_errors_on_missing_sync_section() {
    let config_yaml = "other: {}\n";
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let err = load_config(config_file.path())
        .expect("Config should parse")
        .into_validated()
        .expect_err("validation should reject a missing sync section");
    assert!(err.to_string().contains("sync"), "got: {err}");
}

/// Missing bucket name is rejected at validation, before any network use.
#[test]
fn test_load_config_errors_on_missing_bucket() {
    let config_yaml = "sync:\n  items:\n    - assets\n";
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let err = load_config(config_file.path())
        .expect("Config should parse")
        .into_validated()
        .expect_err("validation should reject a missing bucket");
    assert!(err.to_string().contains("bucket"), "got: {err}");
}

/// This test ensures that if the config file is not valid YAML, load_config
/// errors and reports as such.
#[test]
fn test_load_config_errors_for_invalid_file() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), b"not-yaml: [:::").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}

/// Missing file errors with the path in the message.
#[test]
fn test_load_config_errors_for_missing_file() {
    let err = load_config("definitely-not-here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
