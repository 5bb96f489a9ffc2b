pub mod fetch_transform;
pub mod filings_processing;

pub use self::fetch_transform::*;
pub use self::filings_processing::*;
