#![deny(rust_2018_idioms)]

// This module contains the definition of `AggregateConfig` and `CdfConfig`.
pub mod config;

// This module contains the definition of `SamplesDB`, which knows where the
// raw latency samples of each run are stored.
pub mod db;

// This module contains the definition of `Dat`, a writer of `.dat` tables.
pub mod dat;

// This module contains the formatting rules shared by all `.dat` tables.
pub mod fmt;

// This module contains the line-pattern extractor for benchmark logs.
pub mod extract;

// This module contains the cross-strategy aggregator.
pub mod aggregate;

// This module contains the CDF sample exporter.
pub mod cdf;

// Re-exports.
pub use aggregate::{StatsMap, ThroughputStats};
pub use config::{AggregateConfig, CdfConfig};
pub use dat::Dat;
pub use db::{Op, SamplesDB};
pub use extract::{BenchRecord, ExtractJob};
pub use fmt::PlotFmt;
