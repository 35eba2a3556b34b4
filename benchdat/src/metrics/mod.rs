// This module contains the definition of `F64`.
pub mod float;

// This module contains the definition of `Samples` and `SampleStats`.
mod samples;

// Re-exports.
pub use float::F64;
pub use samples::{SampleStats, Samples};
