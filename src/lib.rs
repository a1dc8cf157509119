pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::location::{LocationResolver, LocationTable};
pub use crate::core::pipeline::{AggregationPipeline, PipelineSettings};
pub use crate::domain::model::{AggregationResult, EnrichedItem, Filter, QueryAnalysis, RawItem};
pub use crate::domain::ports::{ConfigProvider, QueryAnalyzer};
pub use crate::utils::error::{AggregatorError, Result};
