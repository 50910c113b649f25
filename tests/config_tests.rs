use interest_core::config::EngineConfig;

#[test]
fn default_threshold_is_one_penny() {
    assert_eq!(EngineConfig::default().minimum_payout_pennies, 1);
}

#[test]
fn load_falls_back_to_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let config = EngineConfig {
        minimum_payout_pennies: 25,
    };
    config.save(&path).unwrap();
    assert_eq!(EngineConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_fields_use_defaults() {
    let config: EngineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.minimum_payout_pennies, 1);
}
