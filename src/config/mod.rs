use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    core::{
        errors::{BudgetError, Result},
        utils::{app_data_dir, config_file_in, ensure_dir},
    },
    currency::{CurrencyFormat, DEFAULT_PRECISION, DEFAULT_SYMBOL},
    ledger::DEFAULT_CATEGORIES,
};

const TMP_SUFFIX: &str = "tmp";
const MAX_PRECISION: usize = 6;

/// User preferences for display and profile bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_precision")]
    pub precision: usize,
    #[serde(default = "Config::default_categories")]
    pub default_categories: Vec<String>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            precision: Self::default_precision(),
            default_categories: Self::default_categories(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        DEFAULT_SYMBOL.into()
    }

    pub fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    pub fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.precision)
    }

    /// Keys accepted by [`Config::set`], in display order.
    pub fn keys() -> &'static [&'static str] {
        &["currency", "precision", "categories", "color"]
    }

    /// Updates one preference from its textual form.
    ///
    /// `categories` takes a comma separated list; blank items are dropped.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            "currency" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(BudgetError::InvalidInput(
                        "currency symbol cannot be empty".into(),
                    ));
                }
                self.currency_symbol = symbol.to_string();
            }
            "precision" => {
                let precision = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|digits| *digits <= MAX_PRECISION)
                    .ok_or_else(|| {
                        BudgetError::InvalidInput(format!(
                            "precision must be a whole number between 0 and {}",
                            MAX_PRECISION
                        ))
                    })?;
                self.precision = precision;
            }
            "categories" => {
                let categories: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
                if categories.is_empty() {
                    return Err(BudgetError::InvalidInput(
                        "at least one default category is required".into(),
                    ));
                }
                self.default_categories = categories;
            }
            "color" => {
                self.ui_color_enabled = parse_flag(value).ok_or_else(|| {
                    BudgetError::InvalidInput("color must be `on` or `off`".into())
                })?;
            }
            other => {
                return Err(BudgetError::InvalidInput(format!(
                    "unknown config key `{}` (expected one of: {})",
                    other,
                    Self::keys().join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Current value of `key` rendered as text, if the key exists.
    pub fn get(&self, key: &str) -> Option<String> {
        match key.to_ascii_lowercase().as_str() {
            "currency" => Some(self.currency_symbol.clone()),
            "precision" => Some(self.precision.to_string()),
            "categories" => Some(self.default_categories.join(", ")),
            "color" => Some(if self.ui_color_enabled { "on" } else { "off" }.to_string()),
            _ => None,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Loads and saves [`Config`] as JSON inside the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the config file, falling back to defaults when it does not exist yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&data)?;
        debug!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
