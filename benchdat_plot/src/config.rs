use benchdat::size::MIB;
use benchdat::ObjectSize;
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// the akeso strategy is called `nested`
const STRATEGIES: [&str; 6] =
    ["cmek", "cmek-hsm", "csek", "keywrap", "strawman", "nested"];
const BASELINE: &str = "cmek";
const RUN: usize = 1;

const CDF_STRATEGY: &str = "nested";
const CDF_SIZE: u64 = 10 * MIB;

/// Configuration of the cross-strategy aggregator. Missing fields in a JSON
/// file take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// strategies to aggregate, in the order they're processed
    pub strategies: Vec<String>,
    /// strategy all others are compared against
    pub baseline: String,
    /// object sizes, in the order they appear in each table
    pub sizes: Vec<ObjectSize>,
    /// benchmark run to read samples from
    pub run: usize,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            strategies: STRATEGIES.iter().map(|s| s.to_string()).collect(),
            baseline: BASELINE.to_string(),
            sizes: ObjectSize::all(),
            run: RUN,
        }
    }
}

impl AggregateConfig {
    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Report> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("open {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .wrap_err_with(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Checks that every size has a label and that the baseline is one of the
    /// (unique) strategies.
    pub fn validate(&self) -> Result<(), Report> {
        if self.strategies.is_empty() {
            eyre::bail!("no strategies configured");
        }
        let mut seen = HashSet::new();
        for strategy in &self.strategies {
            if !seen.insert(strategy) {
                eyre::bail!("strategy {} configured more than once", strategy);
            }
        }
        if !seen.contains(&self.baseline) {
            eyre::bail!(
                "baseline {} is not one of the strategies {:?}",
                self.baseline,
                self.strategies
            );
        }
        if self.sizes.is_empty() {
            eyre::bail!("no object sizes configured");
        }
        for size in &self.sizes {
            size.label()?;
        }
        Ok(())
    }
}

/// Configuration of the CDF sample exporter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CdfConfig {
    pub strategy: String,
    pub size: ObjectSize,
    pub run: usize,
}

impl Default for CdfConfig {
    fn default() -> Self {
        Self {
            strategy: CDF_STRATEGY.to_string(),
            size: ObjectSize::new(CDF_SIZE),
            run: RUN,
        }
    }
}
