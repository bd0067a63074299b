pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "src/resources/data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "src/resources/bill.csv";

/// Where a billing run reads products from and writes the bill to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl BillingConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl ConfigProvider for BillingConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Validate for BillingConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.input", &self.input_path)?;
        validate_path("paths.output", &self.output_path)?;
        validate_distinct_paths(&self.input_path, &self.output_path)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "billing")]
#[command(about = "Computes a discounted bill from a product list")]
pub struct CliConfig {
    /// Product list to read [default: src/resources/data.csv]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the bill [default: src/resources/bill.csv]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Print the bill to stdout instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

/// Everything the binary needs after merging flags over the configuration file.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub billing: BillingConfig,
    pub verbose: bool,
    pub log_format: LogFormat,
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags given on the command line win over the configuration file.
    pub fn resolve(&self) -> Result<RunSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        let mut billing = file.billing_config();
        if let Some(input) = &self.input {
            billing.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            billing.output_path = output.clone();
        }

        Ok(RunSettings {
            billing,
            verbose: self.verbose || file.logging.verbose.unwrap_or(false),
            log_format: self.log_format.or(file.logging.format).unwrap_or_default(),
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = BillingConfig::default();
        assert_eq!(config.input_path(), Path::new(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path(), Path::new(DEFAULT_OUTPUT_PATH));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_same_input_and_output_is_invalid() {
        assert!(BillingConfig::new("a.csv", "a.csv").validate().is_err());
        assert!(BillingConfig::new("", "b.csv").validate().is_err());
    }

    #[cfg(feature = "cli")]
    mod cli_config {
        use crate::config::{BillingConfig, CliConfig};
        use crate::utils::logger::LogFormat;
        use clap::Parser;
        use std::io::Write;
        use std::path::PathBuf;
        use tempfile::NamedTempFile;

        #[test]
        fn test_resolve_without_flags_uses_defaults() {
            let cli = CliConfig::try_parse_from(["billing"]).unwrap();
            let settings = cli.resolve().unwrap();

            assert_eq!(settings.billing, BillingConfig::default());
            assert!(!settings.verbose);
            assert_eq!(settings.log_format, LogFormat::Compact);
            assert!(!settings.dry_run);
        }

        #[test]
        fn test_flags_override_config_file() {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(
                b"[paths]\ninput = \"file-in.csv\"\noutput = \"file-out.csv\"\n\n[logging]\nformat = \"json\"\nverbose = true\n",
            )
            .unwrap();
            let config_path = file.path().to_str().unwrap().to_string();

            let cli = CliConfig::try_parse_from([
                "billing",
                "--config",
                config_path.as_str(),
                "--output",
                "cli-out.csv",
                "--dry-run",
            ])
            .unwrap();
            let settings = cli.resolve().unwrap();

            assert_eq!(settings.billing.input_path, PathBuf::from("file-in.csv"));
            assert_eq!(settings.billing.output_path, PathBuf::from("cli-out.csv"));
            assert!(settings.verbose);
            assert_eq!(settings.log_format, LogFormat::Json);
            assert!(settings.dry_run);
        }

        #[test]
        fn test_log_format_flag() {
            let cli = CliConfig::try_parse_from(["billing", "--log-format", "json"]).unwrap();
            assert_eq!(cli.log_format, Some(LogFormat::Json));
            assert!(CliConfig::try_parse_from(["billing", "--log-format", "xml"]).is_err());
        }

        #[test]
        fn test_missing_config_file_fails() {
            let cli = CliConfig::try_parse_from(["billing", "--config", "nope/billing.toml"]).unwrap();
            assert!(cli.resolve().is_err());
        }
    }
}
