pub mod calculator;
pub mod discount;
pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod serializer;

pub use crate::domain::model::{ReadOutcome, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
