use crate::core::Pipeline;
use crate::domain::model::{RunSummary, TransformResult};
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Reads, bills and writes in one pass. Any failure aborts before the output is written.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!("Starting billing run");

        let result = self.extract_and_transform()?;
        let line_count = result.bill.lines.len();
        let error_count = result.error_count;
        let total = result.bill.total;

        tracing::info!("Loading bill...");
        let output_path = self.pipeline.load(result)?;

        tracing::info!(
            "Billing run finished in {:?}: {} lines, {} errors, total {}",
            started.elapsed(),
            line_count,
            error_count,
            total
        );

        Ok(RunSummary {
            output_path,
            line_count,
            error_count,
            total,
        })
    }

    /// Runs extract and transform only and returns the lines that `run` would write.
    pub fn preview(&self) -> Result<Vec<String>> {
        Ok(self.extract_and_transform()?.output_lines)
    }

    fn extract_and_transform(&self) -> Result<TransformResult> {
        tracing::info!("Extracting products...");
        let outcome = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} products ({} unparsable lines)",
            outcome.items.len(),
            outcome.error_count
        );

        tracing::info!("Calculating bill...");
        let result = self.pipeline.transform(outcome)?;
        tracing::debug!("Bill has {} lines", result.bill.lines.len());

        Ok(result)
    }
}
