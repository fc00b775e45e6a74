use schoolboard_core::config::{BackupFrequency, GradingScale};
use schoolboard_core::{Settings, SettingsError};

#[test]
fn save_then_load_preserves_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.general.school_name = "SJCSI Senior High School".to_string();
    settings.grading.grading_scale = GradingScale::Letter;
    settings.grading.passing_grade = 70;
    settings.backup.backup_frequency = BackupFrequency::Weekly;
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["grading"]["grading_scale"], "letter");
    assert_eq!(raw["backup"]["backup_frequency"], "weekly");
}

#[test]
fn invalid_settings_are_never_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.security.login_attempts = 0;
    assert!(matches!(
        settings.save(&path).unwrap_err(),
        SettingsError::Invalid {
            field: "security.login_attempts",
            ..
        }
    ));
    assert!(!path.exists());
}

#[test]
fn load_rejects_invalid_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "general": { "current_quarter": 0 } }"#).unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("general.current_quarter"));

    let missing = Settings::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, SettingsError::Io(_)));
}
