#![deny(rust_2018_idioms)]

// This module contains the definition of `F64`, `Samples` and `SampleStats`.
pub mod metrics;

// This module contains the definition of `ObjectSize`.
pub mod size;

// Re-exports.
pub use metrics::{SampleStats, Samples, F64};
pub use size::ObjectSize;
