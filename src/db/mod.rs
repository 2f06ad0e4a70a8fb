pub mod connection;
pub mod helpers;
pub mod models;
pub mod repositories;

pub use connection::Database;

use crate::error::Result;
use models::RawSample;

/// Anything that can produce the full raw sample set in timestamp order.
pub trait SampleSource {
    fn load(&self) -> Result<Vec<RawSample>>;
}
