pub mod aggregation;
pub mod filter_engine;
pub mod summary;
pub mod trend_bucketizer;

pub use aggregation::AggregationEngine;
pub use filter_engine::FilterEngine;
pub use summary::build_summary;
pub use trend_bucketizer::TrendBucketizer;
