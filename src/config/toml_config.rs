use crate::utils::error::{Result, SquawkError};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_BATCH: usize = 4096;
pub const MAX_SELF_CHECK_DRAWS: usize = 1_000_000;
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SquawkConfig {
    pub generator: GeneratorConfig,
    pub self_check: SelfCheckConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: Option<u64>,
    pub assignable_only: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 1,
            seed: None,
            assignable_only: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfCheckConfig {
    pub digit_iterations: usize,
    pub sample_size: usize,
    pub seed: Option<u64>,
}

impl Default for SelfCheckConfig {
    fn default() -> Self {
        Self {
            digit_iterations: 100,
            sample_size: 1000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl SquawkConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SquawkError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SquawkError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SquawkError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for SquawkConfig {
    fn validate(&self) -> Result<()> {
        validate_range("generator.count", self.generator.count, 1, MAX_BATCH)?;
        validate_range(
            "self_check.digit_iterations",
            self.self_check.digit_iterations,
            1,
            MAX_SELF_CHECK_DRAWS,
        )?;
        validate_range(
            "self_check.sample_size",
            self.self_check.sample_size,
            1,
            MAX_SELF_CHECK_DRAWS,
        )?;
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        Ok(())
    }
}
