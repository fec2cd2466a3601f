//! Geometry, bounded random sampling, and sorted-sequence search.
//!
//! Every routine here is a pure function of its inputs plus an injected RNG,
//! so the crate carries no global state.

pub mod geom;
pub mod random;
pub mod search;
pub mod weighted;

// Re-exports for convenience
pub use geom::{Point, Rect, euclidean_distance, square};
pub use random::{rand_int, rand_point};
pub use search::{SearchStrategy, converging_search, first_at_least};
pub use weighted::WeightedSampler;

/// Errors that can occur while sampling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("Empty range [{min}, {max})")]
    EmptyRange { min: i32, max: i32 },

    #[error("Total weight is zero")]
    NoWeight,

    #[error("Total weight overflows u64")]
    WeightOverflow,

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),
}

/// Result type alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;
