pub mod column;
pub mod sample;

pub use column::TrackedColumn;
pub use sample::RawSample;
