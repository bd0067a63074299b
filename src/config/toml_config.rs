use crate::config::BillingConfig;
use crate::utils::error::{BillingError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional configuration file. Every key may be omitted.
///
/// ```toml
/// [paths]
/// input = "${DATA_DIR}/products.csv"
/// output = "out/bill.csv"
///
/// [logging]
/// verbose = false
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BillingError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BillingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BillingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Paths from the file, falling back to the built-in defaults.
    pub fn billing_config(&self) -> BillingConfig {
        let defaults = BillingConfig::default();
        BillingConfig {
            input_path: self.paths.input.clone().unwrap_or(defaults.input_path),
            output_path: self.paths.output.clone().unwrap_or(defaults.output_path),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.paths.input {
            validate_path("paths.input", input)?;
        }
        if let Some(output) = &self.paths.output {
            validate_path("paths.output", output)?;
        }
        Ok(())
    }
}
