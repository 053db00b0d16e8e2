//! Environment lookups seen from outside the crate

use serial_test::serial;
use std::env;
use vet_core::{ConfigSource, EnvReader};

#[test]
#[serial]
fn test_overlay_shadows_process_environment() {
    env::set_var("VET_IT_LEVEL", "debug");
    env::set_var("VET_IT_WIDTH", "120");

    let mut reader = EnvReader::new();
    assert_eq!(reader.get("VET_IT_LEVEL", "warn".to_string()), "debug");
    assert_eq!(reader.get("VET_IT_WIDTH", 80usize), 120);

    reader.set("VET_IT_LEVEL", "trace");
    assert_eq!(reader.get("VET_IT_LEVEL", "warn".to_string()), "trace");
    assert_eq!(reader.source("VET_IT_LEVEL"), ConfigSource::Overlay("VET_IT_LEVEL".to_string()));
    assert_eq!(
        reader.source("VET_IT_WIDTH").to_string(),
        "Environment variable: VET_IT_WIDTH"
    );

    env::remove_var("VET_IT_LEVEL");
    env::remove_var("VET_IT_WIDTH");
}

#[test]
#[serial]
fn test_unset_keys_fall_back() {
    env::remove_var("VET_IT_UNSET");
    let reader = EnvReader::new();

    assert!(!reader.get("VET_IT_UNSET", false));
    assert!(reader.get("VET_IT_UNSET", true));
    assert_eq!(reader.get("VET_IT_UNSET", 9u32), 9);
    assert_eq!(reader.source("VET_IT_UNSET").to_string(), "Default value");
}
