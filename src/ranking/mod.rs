pub mod aggregate;
pub mod metrics;
pub mod similarity;
pub mod top_n;

pub use aggregate::{score_multi, validate_queries};
pub use similarity::score_single;
pub use top_n::top_n;
