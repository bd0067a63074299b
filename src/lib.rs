pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, RunSettings};

pub use config::{cli::LocalStorage, BillingConfig};
pub use core::{etl::EtlEngine, pipeline::BillingPipeline};
pub use domain::model::{BillLine, BillResult, ProductRecord, ReadOutcome, RunSummary};
pub use domain::money::Money;
pub use utils::error::{BillingError, Result};
