use ledger_core::config::{Config, ConfigManager};
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let base = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf()).unwrap();
    let config = manager.load().unwrap();
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.currency, "USD");
    assert!(config.advisor_model.is_none());
}

#[test]
fn save_then_reload_round_trips() {
    let base = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf()).unwrap();

    let config = Config {
        locale: "pt-BR".into(),
        currency: "BRL".into(),
        advisor_model: Some("gemini-2.5-flash".into()),
    };
    manager.save(&config).unwrap();
    assert!(manager.path().exists());

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded.locale, "pt-BR");
    assert_eq!(reloaded.currency, "BRL");
    assert_eq!(reloaded.advisor_model.as_deref(), Some("gemini-2.5-flash"));
}

#[test]
fn save_replaces_previous_contents() {
    let base = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(base.path().to_path_buf()).unwrap();

    manager.save(&Config::default()).unwrap();
    let updated = Config {
        currency: "EUR".into(),
        ..Config::default()
    };
    manager.save(&updated).unwrap();

    assert_eq!(manager.load().unwrap().currency, "EUR");
}
