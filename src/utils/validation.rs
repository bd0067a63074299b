use crate::utils::error::{BillingError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.trim().is_empty() {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(BillingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Input and output must not point at the same file, or the bill would overwrite its own source.
pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    if input == output {
        return Err(BillingError::ConfigValidationError {
            field: "paths.output".to_string(),
            message: format!(
                "output path '{}' is the same as the input path",
                output.display()
            ),
        });
    }
    Ok(())
}
