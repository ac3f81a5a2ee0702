// Configuration module: everything the actions need from the environment,
// read once at startup and then passed by reference into each action.

use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Immutable process-wide settings. Credentials may be empty: a missing key
/// only shows up later as an authentication failure from the remote API.
#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: String,
    pub meteo_api_key: String,
    pub model: String,
    pub completion_url: String,
    pub weather_url: String,
    pub report_dir: PathBuf,
}

impl Config {
    /// Build the configuration from the environment. A `.env` file in the
    /// working directory is loaded first if present.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads values through `lookup`, so tests do not
    /// have to touch the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Config {
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            meteo_api_key: lookup("METEO_API_KEY").unwrap_or_default(),
            model: or_default("SPELLCASTER_MODEL", DEFAULT_MODEL),
            completion_url: or_default("SPELLCASTER_COMPLETION_URL", DEFAULT_COMPLETION_URL),
            weather_url: or_default("SPELLCASTER_WEATHER_URL", DEFAULT_WEATHER_URL),
            report_dir: PathBuf::from(or_default("SPELLCASTER_REPORT_DIR", ".")),
        }
    }
}
