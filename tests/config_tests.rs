use contact_core::config::{
    ConfigError, ConfigManager, DeliveryConfig, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID,
};

fn file_config() -> DeliveryConfig {
    DeliveryConfig {
        service_id: "file-service".into(),
        template_id: "file-template".into(),
        public_key: "file-key".into(),
    }
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
    manager.save(&file_config()).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.service_id, "file-service");
    assert_eq!(loaded.template_id, "file-template");
    assert_eq!(loaded.public_key, "file-key");
    assert!(manager.path().exists());
}

#[test]
fn load_without_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
    let loaded = manager.load().unwrap();
    assert!(loaded.service_id.is_empty());
    assert!(loaded.validate().is_err());
}

#[test]
fn environment_overrides_file_values() {
    let merged = DeliveryConfig::from_sources(file_config(), |name| match name {
        ENV_SERVICE_ID => Some("env-service".into()),
        _ => None,
    });
    assert_eq!(merged.service_id, "env-service");
    assert_eq!(merged.template_id, "file-template");
    assert_eq!(merged.public_key, "file-key");
}

#[test]
fn blank_environment_values_fall_back_to_file() {
    let merged = DeliveryConfig::from_sources(file_config(), |name| match name {
        ENV_TEMPLATE_ID => Some("   ".into()),
        _ => None,
    });
    assert_eq!(merged.template_id, "file-template");
}

#[test]
fn validate_reports_first_missing_credential() {
    let config = DeliveryConfig::from_sources(DeliveryConfig::default(), |name| match name {
        ENV_PUBLIC_KEY => Some("pk".into()),
        _ => None,
    });
    match config.validate() {
        Err(ConfigError::MissingCredential(name)) => assert_eq!(name, ENV_SERVICE_ID),
        other => panic!("Unexpected validation result: {:?}", other),
    }
}

#[test]
fn complete_config_validates() {
    assert!(file_config().validate().is_ok());
}
