use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Id of an optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "checkbox-grid-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// App bar title.
    pub title: String,
    /// Floating label above the size picker.
    pub picker_label: String,
    /// Id of the element the app mounts into.
    pub host_id: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Lab03".to_string(),
            picker_label: "Board size".to_string(),
            host_id: "app-layout".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a (possibly partial) JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Unknown level names fall back to `debug`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.title, "Lab03");
        assert_eq!(cfg.picker_label, "Board size");
        assert_eq!(cfg.host_id, "app-layout");
        assert_eq!(cfg.level(), log::Level::Debug);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = AppConfig::from_json(r#"{"title":"Board","log_level":"warn"}"#).unwrap();
        assert_eq!(cfg.title, "Board");
        assert_eq!(cfg.level(), log::Level::Warn);
        assert_eq!(cfg.host_id, "app-layout");
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            AppConfig::from_json("{title:"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn unknown_level_falls_back_to_debug() {
        let cfg = AppConfig {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(cfg.level(), log::Level::Debug);
        let cfg = AppConfig {
            log_level: "INFO".into(),
            ..Default::default()
        };
        assert_eq!(cfg.level(), log::Level::Info);
    }
}
