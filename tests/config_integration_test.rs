//! Integration tests for configuration loading and validation
//!
//! Every test here reads or writes process environment variables through
//! `load_config`, so they all serialize on a shared mutex.

use curator::config::{load_config, StorageBackend};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that touch environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("CURATOR_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CURATOR_APPLICATION_DRY_RUN");
    std::env::remove_var("CURATOR_STORAGE_BACKEND");
    std::env::remove_var("CURATOR_STORAGE_ROOT");
    std::env::remove_var("CURATOR_RECONCILIATION_MANIFEST_NAME");
    std::env::remove_var("CURATOR_RECONCILIATION_INLINE_THRESHOLD_BYTES");
    std::env::remove_var("CURATOR_SINK_OUTPUT_DIR");
    std::env::remove_var("TEST_SUBMISSION_ROOT");
    std::env::remove_var("TEST_CASE_OUTPUT_DIR");
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"
dry_run = true

[storage]
backend = "local"
root = "/data/submissions"

[reconciliation]
manifest_name = "MD5SUMS.txt"
inline_threshold_bytes = 65536

[sink]
output_dir = "/tmp/curator-cases"

[logging]
local_enabled = false
local_path = "/tmp/curator"
local_rotation = "size"
local_max_size_mb = 50
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify application config
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);

    // Verify storage config
    assert_eq!(config.storage.backend, StorageBackend::Local);
    assert_eq!(config.storage.root, "/data/submissions");

    // Verify reconciliation config
    assert_eq!(config.reconciliation.manifest_name, "MD5SUMS.txt");
    assert_eq!(config.reconciliation.inline_threshold_bytes, 65536);

    // Verify sink config
    assert_eq!(config.sink.output_dir, "/tmp/curator-cases");

    // Verify logging config
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/curator");
    assert_eq!(config.logging.local_rotation, "size");
    assert_eq!(config.logging.local_max_size_mb, 50);
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]

[storage]
backend = "memory"
root = "submissions"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.reconciliation.manifest_name, "manifest.txt");
    assert_eq!(config.reconciliation.inline_threshold_bytes, 131072);
    assert_eq!(config.sink.output_dir, "./cases");
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/var/log/curator");
    assert_eq!(config.logging.local_rotation, "daily");
    assert_eq!(config.logging.local_max_size_mb, 100);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_SUBMISSION_ROOT", "/mnt/submissions");
    std::env::set_var("TEST_CASE_OUTPUT_DIR", "/mnt/cases");

    let toml_content = r#"
[application]

[storage]
backend = "local"
root = "${TEST_SUBMISSION_ROOT}"

[sink]
output_dir = "${TEST_CASE_OUTPUT_DIR}"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.storage.root, "/mnt/submissions");
    assert_eq!(config.sink.output_dir, "/mnt/cases");

    std::env::remove_var("TEST_SUBMISSION_ROOT");
    std::env::remove_var("TEST_CASE_OUTPUT_DIR");
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CURATOR_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("CURATOR_STORAGE_ROOT", "/override/submissions");
    std::env::set_var("CURATOR_RECONCILIATION_INLINE_THRESHOLD_BYTES", "4096");

    let toml_content = r#"
[application]
log_level = "info"

[storage]
backend = "local"
root = "/data/submissions"

[reconciliation]
inline_threshold_bytes = 65536
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.storage.root, "/override/submissions");
    assert_eq!(config.reconciliation.inline_threshold_bytes, 4096);

    std::env::remove_var("CURATOR_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CURATOR_STORAGE_ROOT");
    std::env::remove_var("CURATOR_RECONCILIATION_INLINE_THRESHOLD_BYTES");
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "invalid_level"

[storage]
backend = "local"
root = "/data/submissions"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_missing_env_var_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::remove_var("CURATOR_UNSET_SUBMISSION_ROOT");

    let toml_content = r#"
[application]

[storage]
backend = "local"
root = "${CURATOR_UNSET_SUBMISSION_ROOT}"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("CURATOR_UNSET_SUBMISSION_ROOT"));
}
