use crate::domain::model::{ReadOutcome, TransformResult};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Line-oriented file access used at the edges of a billing run.
pub trait Storage {
    /// Reads every line of `path`, without line terminators.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Writes `lines` to `path`, each followed by `\n`, replacing any existing file.
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ReadOutcome>;
    fn transform(&self, outcome: ReadOutcome) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<PathBuf>;
}
