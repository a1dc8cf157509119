pub mod detail;
pub mod enrichment;
pub mod location;
pub mod pager;
pub mod pipeline;

pub use crate::domain::model::{AggregationResult, EnrichedItem, Filter, RawItem, SearchCriteria};
pub use crate::domain::ports::{ConfigProvider, QueryAnalyzer};
pub use crate::utils::error::Result;
