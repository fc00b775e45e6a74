//! Typed dashboard settings.
//!
//! # Responsibility
//! - Define the settings schema with documented defaults.
//! - Load, validate and save settings as JSON documents.
//!
//! # Invariants
//! - Partial documents overlay defaults field by field.
//! - `load`, `from_json_str` and `save` never yield or write invalid settings.
//!
//! # See also
//! - DESIGN.md, "Configuration".

use crate::label::labelled_enum;
use chrono::NaiveDateTime;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

static ACADEMIC_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{4})$").expect("valid academic year regex"));

labelled_enum! {
    /// How grades are presented to users.
    #[derive(Default)]
    pub enum GradingScale {
        /// 0-100.
        #[default]
        Percentage => "percentage",
        /// A-F.
        Letter => "letter",
        /// 1-4 points.
        Points => "points",
    }
}

labelled_enum! {
    /// Automatic backup cadence.
    #[derive(Default)]
    pub enum BackupFrequency {
        Hourly => "hourly",
        #[default]
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

/// Settings load/validate failure.
#[derive(Debug)]
pub enum SettingsError {
    /// A field violates its documented constraint.
    Invalid {
        field: &'static str,
        reason: String,
    },
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
            Self::Io(err) => write!(f, "settings io error: {err}"),
            Self::Json(err) => write!(f, "settings json error: {err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid { .. } => None,
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// School identity and calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Shown in headers and reports. Must not be blank.
    pub school_name: String,
    /// `YYYY-YYYY` with consecutive years.
    pub academic_year: String,
    /// `1..=4`; grades default to this quarter in reports.
    pub current_quarter: u8,
    /// IANA zone name used when rendering dates.
    pub timezone: String,
    pub language: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            school_name: "SJCSI Junior High School".to_string(),
            academic_year: "2024-2025".to_string(),
            current_quarter: 3,
            timezone: "Asia/Manila".to_string(),
            language: "English".to_string(),
        }
    }
}

/// Notification channels and triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    /// Raise academic alerts for low grades.
    pub grade_alerts: bool,
    pub attendance_alerts: bool,
    pub parent_notifications: bool,
    /// Percent below which a grade counts as low, `0..=100`.
    pub low_grade_threshold: u8,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            grade_alerts: true,
            attendance_alerts: true,
            parent_notifications: true,
            low_grade_threshold: 75,
        }
    }
}

/// Grading policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingSettings {
    /// Minimum passing percent, `0..=100`.
    pub passing_grade: u8,
    /// Minimum honor-roll percent, `passing_grade..=100`.
    pub honor_roll_threshold: u8,
    pub grading_scale: GradingScale,
    pub allow_grade_override: bool,
    pub require_comments: bool,
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self {
            passing_grade: 75,
            honor_roll_threshold: 90,
            grading_scale: GradingScale::Percentage,
            allow_grade_override: false,
            require_comments: true,
        }
    }
}

impl GradingSettings {
    pub fn is_passing(&self, percent: f64) -> bool {
        percent >= f64::from(self.passing_grade)
    }

    pub fn is_honor_roll(&self, percent: f64) -> bool {
        percent >= f64::from(self.honor_roll_threshold)
    }
}

/// Account security policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    /// 0 disables expiry.
    pub password_expiry_days: u32,
    /// Must be positive.
    pub session_timeout_minutes: u32,
    pub two_factor_auth: bool,
    /// Must be positive.
    pub login_attempts: u32,
    pub audit_logging: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            password_expiry_days: 90,
            session_timeout_minutes: 30,
            two_factor_auth: false,
            login_attempts: 3,
            audit_logging: true,
        }
    }
}

/// Backup schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSettings {
    pub auto_backup: bool,
    pub backup_frequency: BackupFrequency,
    /// Must be positive.
    pub retention_days: u32,
    /// Informational; written by whatever runs backups.
    pub last_backup: Option<NaiveDateTime>,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            auto_backup: true,
            backup_frequency: BackupFrequency::Daily,
            retention_days: 30,
            last_backup: None,
        }
    }
}

/// Complete settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub notifications: NotificationSettings,
    pub grading: GradingSettings,
    pub security: SecuritySettings,
    pub backup: BackupSettings,
}

impl Settings {
    /// Checks every documented field constraint.
    ///
    /// # Errors
    /// - Returns `SettingsError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let general = &self.general;
        if general.school_name.trim().is_empty() {
            return Err(invalid("general.school_name", "must not be blank"));
        }
        validate_academic_year(general.academic_year.trim())?;
        if !(1..=4).contains(&general.current_quarter) {
            return Err(invalid(
                "general.current_quarter",
                format!("must be 1..=4, got {}", general.current_quarter),
            ));
        }
        if general.timezone.trim().is_empty() {
            return Err(invalid("general.timezone", "must not be blank"));
        }

        if self.notifications.low_grade_threshold > 100 {
            return Err(invalid(
                "notifications.low_grade_threshold",
                "must be 0..=100",
            ));
        }

        let grading = &self.grading;
        if grading.passing_grade > 100 {
            return Err(invalid("grading.passing_grade", "must be 0..=100"));
        }
        if grading.honor_roll_threshold > 100 {
            return Err(invalid("grading.honor_roll_threshold", "must be 0..=100"));
        }
        if grading.honor_roll_threshold < grading.passing_grade {
            return Err(invalid(
                "grading.honor_roll_threshold",
                "must not be below passing_grade",
            ));
        }

        if self.security.session_timeout_minutes == 0 {
            return Err(invalid("security.session_timeout_minutes", "must be positive"));
        }
        if self.security.login_attempts == 0 {
            return Err(invalid("security.login_attempts", "must be positive"));
        }
        if self.backup.retention_days == 0 {
            return Err(invalid("backup.retention_days", "must be positive"));
        }

        Ok(())
    }

    /// Parses a (possibly partial) JSON document over defaults and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads and validates a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        info!(
            "event=settings_load module=config status=ok path={}",
            path.display()
        );
        Ok(settings)
    }

    /// Validates and writes settings as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        self.validate()?;
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(
            "event=settings_save module=config status=ok path={}",
            path.display()
        );
        Ok(())
    }
}

fn validate_academic_year(value: &str) -> Result<(), SettingsError> {
    let Some(caps) = ACADEMIC_YEAR_RE.captures(value) else {
        return Err(invalid("general.academic_year", "must be YYYY-YYYY"));
    };
    let start: u32 = caps[1]
        .parse()
        .map_err(|_| invalid("general.academic_year", "start year is not numeric"))?;
    let end: u32 = caps[2]
        .parse()
        .map_err(|_| invalid("general.academic_year", "end year is not numeric"))?;
    if end != start + 1 {
        return Err(invalid(
            "general.academic_year",
            "end year must follow start year",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{GradingScale, Settings, SettingsError};

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.general.current_quarter, 3);
        assert_eq!(settings.grading.grading_scale, GradingScale::Percentage);
    }

    #[test]
    fn partial_document_overlays_defaults() {
        let settings =
            Settings::from_json_str(r#"{ "grading": { "passing_grade": 70 } }"#).unwrap();
        assert_eq!(settings.grading.passing_grade, 70);
        assert_eq!(settings.grading.honor_roll_threshold, 90);
        assert_eq!(settings.general.school_name, "SJCSI Junior High School");
    }

    #[test]
    fn academic_year_must_be_consecutive() {
        let err = Settings::from_json_str(r#"{ "general": { "academic_year": "2024-2026" } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "general.academic_year",
                ..
            }
        ));
    }

    #[test]
    fn honor_roll_cannot_undercut_passing() {
        let mut settings = Settings::default();
        settings.grading.honor_roll_threshold = 60;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("grading.honor_roll_threshold"));
    }

    #[test]
    fn unknown_grading_scale_is_a_json_error() {
        let err = Settings::from_json_str(r#"{ "grading": { "grading_scale": "stars" } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
