// config.rs

use std::env;
use std::path::PathBuf;

use crate::error::{CalcError, Result};

const DEFAULT_PROMPT: &str = "> ";

#[derive(Clone, Debug)]
pub struct Config {
    pub prompt: String,
    /// Trim surrounding whitespace before an entry goes into recall history.
    pub trim_entries: bool,
    /// `None` means a `logs/` directory next to the executable.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            trim_entries: false,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(prompt) = lookup("CALCX_PROMPT") {
            config.prompt = prompt;
        }
        if let Some(value) = lookup("CALCX_TRIM_ENTRIES") {
            config.trim_entries = parse_flag("CALCX_TRIM_ENTRIES", value)?;
        }
        if let Some(dir) = lookup("CALCX_LOG_DIR").filter(|d| !d.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CalcError::Config { var, value }),
    }
}
