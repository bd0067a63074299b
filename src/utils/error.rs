use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Bill total overflowed while adding '{name}'")]
    AmountOverflow { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BillingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BillingError::ReadError { .. } | BillingError::WriteError { .. } => ErrorCategory::Io,
            BillingError::ConfigError { .. }
            | BillingError::ConfigValidationError { .. }
            | BillingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BillingError::AmountOverflow { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BillingError::ReadError { path, source } => {
                format!("Cannot read product list '{}': {}", path, source)
            }
            BillingError::WriteError { path, source } => {
                format!("Cannot write bill '{}': {}", path, source)
            }
            BillingError::ConfigError { message } => format!("Configuration problem: {}", message),
            BillingError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            BillingError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            BillingError::AmountOverflow { name } => {
                format!("The bill total is too large to represent (at product '{}')", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BillingError::ReadError { .. } => {
                "Check that the input file exists and is readable, or pass --input"
            }
            BillingError::WriteError { .. } => {
                "Check that the output directory is writable, or pass --output"
            }
            BillingError::ConfigError { .. } | BillingError::ConfigValidationError { .. } => {
                "Fix the configuration file and make sure it is valid TOML"
            }
            BillingError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value and run again"
            }
            BillingError::AmountOverflow { .. } => {
                "Check the input for unrealistic prices or quantities"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;
