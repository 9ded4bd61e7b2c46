use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::locale::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub locale: Locale,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/expenses.json"),
            locale: Locale::default(),
            currency: "BRL".into(),
        }
    }
}

impl Config {
    /// Read configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let locale = match lookup("CODI_CASH_LOCALE") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!(locale = %value, "Unsupported CODI_CASH_LOCALE, using {}", defaults.locale);
                defaults.locale
            }),
            None => defaults.locale,
        };

        Self {
            data_path: lookup("CODI_CASH_DATA_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            locale,
            currency: lookup("CODI_CASH_CURRENCY")
                .map(|v| v.trim().to_uppercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.currency),
        }
    }
}
