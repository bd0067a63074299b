use crate::core::Storage;
use crate::utils::error::{BillingError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads and writes line files relative to `base_path`. Absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

fn write_error(path: &Path) -> impl Fn(std::io::Error) -> BillingError + '_ {
    move |source| BillingError::WriteError {
        path: path.display().to_string(),
        source,
    }
}

impl Storage for LocalStorage {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let full_path = self.base_path.join(path);
        let content = fs::read_to_string(&full_path).map_err(|source| BillingError::ReadError {
            path: full_path.display().to_string(),
            source,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        let full_path = self.base_path.join(path);
        let on_error = write_error(&full_path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(&on_error)?;
            }
        }

        // 檔案在離開作用域時關閉，包括寫入中途失敗的情況
        let mut writer = BufWriter::new(File::create(&full_path).map_err(&on_error)?);
        for line in lines {
            writer.write_all(line.as_bytes()).map_err(&on_error)?;
            writer.write_all(b"\n").map_err(&on_error)?;
        }
        writer.flush().map_err(&on_error)?;
        Ok(())
    }
}
