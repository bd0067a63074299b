use crate::core::calculator::BillCalculator;
use crate::core::discount::QuantityDiscount;
use crate::core::{parser, serializer};
use crate::core::{ConfigProvider, Pipeline, ReadOutcome, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct BillingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    calculator: BillCalculator,
}

impl<S: Storage, C: ConfigProvider> BillingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_calculator(storage, config, BillCalculator::new(QuantityDiscount::STANDARD))
    }

    pub fn with_calculator(storage: S, config: C, calculator: BillCalculator) -> Self {
        Self {
            storage,
            config,
            calculator,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BillingPipeline<S, C> {
    fn extract(&self) -> Result<ReadOutcome> {
        let input = self.config.input_path();
        tracing::debug!("Reading products from: {}", input.display());

        let lines = self.storage.read_lines(input)?;
        tracing::debug!("Read {} raw lines", lines.len());

        let outcome = parser::parse_lines(&lines);
        if outcome.error_count > 0 {
            tracing::warn!("{} lines had unparsable values", outcome.error_count);
        }
        Ok(outcome)
    }

    fn transform(&self, outcome: ReadOutcome) -> Result<TransformResult> {
        let bill = self.calculator.calculate(&outcome.items)?;
        let output_lines = serializer::serialize(&bill.lines, bill.total, outcome.error_count);

        Ok(TransformResult {
            bill,
            error_count: outcome.error_count,
            output_lines,
        })
    }

    fn load(&self, result: TransformResult) -> Result<PathBuf> {
        let output = self.config.output_path();
        tracing::debug!(
            "Writing {} lines to: {}",
            result.output_lines.len(),
            output.display()
        );

        self.storage.write_lines(output, &result.output_lines)?;
        Ok(output.to_path_buf())
    }
}
