pub mod algorithm;
pub mod bucket;
pub mod granularity;

pub use algorithm::{resample, resample_by};
pub use bucket::ResampledBucket;
pub use granularity::Granularity;
