use std::fs;

use serde::Deserialize;
use tracing::warn;

const CONFIG_FILE: &str = "bot.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub discord_token: String,
    pub log_filter: String,
    pub tmdb: TmdbSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbSettings {
    pub token: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            discord_token: String::new(),
            log_filter: "info".into(),
            tmdb: TmdbSettings::default(),
        }
    }
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string(CONFIG_FILE).ok();
    let mut settings = settings_from_file(raw.as_deref());
    apply_env_overrides(&mut settings);
    settings
}

fn settings_from_file(raw: Option<&str>) -> Settings {
    let Some(raw) = raw else {
        return Settings::default();
    };

    match toml::from_str::<Settings>(raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("ignoring malformed {CONFIG_FILE}: {err}");
            Settings::default()
        }
    }
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(v) = std::env::var("DISCORD_TOKEN") {
        settings.discord_token = v;
    }
    if let Ok(v) = std::env::var("APP__DISCORD_TOKEN") {
        settings.discord_token = v;
    }

    if let Ok(v) = std::env::var("TMDB_TOKEN") {
        settings.tmdb.token = v;
    }
    if let Ok(v) = std::env::var("APP__TMDB_TOKEN") {
        settings.tmdb.token = v;
    }

    if let Ok(v) = std::env::var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
