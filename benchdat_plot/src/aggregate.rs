use crate::config::AggregateConfig;
use crate::dat::Dat;
use crate::db::{Op, SamplesDB};
use crate::fmt::PlotFmt;
use benchdat::{ObjectSize, SampleStats, Samples, F64};
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Minimum number of samples per file: one is left after trimming.
pub const MIN_SAMPLES: usize = 3;

/// Statistics of each (strategy, object size) pair.
pub type StatsMap = BTreeMap<(String, ObjectSize), ThroughputStats>;

/// Trimmed read and write throughput statistics of one strategy with one
/// object size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThroughputStats {
    pub read: SampleStats,
    pub write: SampleStats,
}

impl ThroughputStats {
    /// Computes the statistics of both sample sets after trimming them.
    pub fn from(reads: &Samples, writes: &Samples) -> Self {
        Self {
            read: SampleStats::from(&reads.trimmed()),
            write: SampleStats::from(&writes.trimmed()),
        }
    }

    /// All statistics, in the column order of the tables: means, standard
    /// deviations, 50th, 90th and 99th percentiles, reads before writes.
    pub fn fields(&self) -> [F64; 10] {
        let (r, w) = (&self.read, &self.write);
        [
            r.mean, w.mean, r.stddev, w.stddev, r.p50, w.p50, r.p90, w.p90,
            r.p99, w.p99,
        ]
    }

    pub fn relative_to(&self, baseline: &Self) -> Self {
        Self {
            read: self.read.relative_to(&baseline.read),
            write: self.write.relative_to(&baseline.write),
        }
    }
}

/// Loads the samples of `op` and checks there are enough to be trimmed.
fn load_samples(
    db: &SamplesDB,
    strategy: &str,
    op: Op,
    size: ObjectSize,
) -> Result<Samples, Report> {
    let samples = db.load(strategy, op, size)?;
    if samples.len() < MIN_SAMPLES {
        eyre::bail!(
            "{} has {} samples; at least {} are required",
            db.path(strategy, op, size).display(),
            samples.len(),
            MIN_SAMPLES
        );
    }
    Ok(samples)
}

/// First phase: computes the statistics of every strategy (baseline
/// included) with every object size.
pub fn collect(
    db: &SamplesDB,
    config: &AggregateConfig,
) -> Result<StatsMap, Report> {
    let pairs: Vec<_> = config
        .strategies
        .iter()
        .flat_map(|strategy| {
            config.sizes.iter().map(move |size| (strategy, *size))
        })
        .collect();

    pairs
        .into_par_iter()
        .map(|(strategy, size)| {
            let reads = load_samples(db, strategy, Op::Read, size)?;
            let writes = load_samples(db, strategy, Op::Write, size)?;
            let stats = ThroughputStats::from(&reads, &writes);
            tracing::debug!(
                "{} {:?}: reads {:?} | writes {:?}",
                strategy,
                size,
                reads,
                writes
            );
            Ok(((strategy.clone(), size), stats))
        })
        .collect()
}

/// Second phase: divides the statistics of every strategy by the statistics
/// of `baseline` with the same object size.
///
/// Fails if `stats` lacks the baseline (or any strategy) for some size.
pub fn relative(
    stats: &StatsMap,
    baseline: &str,
    strategies: &[String],
    sizes: &[ObjectSize],
) -> Result<StatsMap, Report> {
    let missing: Vec<_> = sizes
        .iter()
        .filter(|size| !stats.contains_key(&(baseline.to_string(), **size)))
        .collect();
    if !missing.is_empty() {
        eyre::bail!(
            "baseline {} missing for object sizes {:?}",
            baseline,
            missing
        );
    }

    let mut relative = StatsMap::new();
    for strategy in strategies {
        for size in sizes {
            let key = (strategy.clone(), *size);
            let value = stats.get(&key).ok_or_else(|| {
                eyre::eyre!("no statistics for {} with {:?}", strategy, size)
            })?;
            let base = &stats[&(baseline.to_string(), *size)];
            relative.insert(key, value.relative_to(base));
        }
    }
    Ok(relative)
}

/// Writes the table of `strategy`: one row per object size.
pub fn write_table(
    stats: &StatsMap,
    strategy: &str,
    sizes: &[ObjectSize],
    comment: &str,
    output: impl AsRef<Path>,
) -> Result<PathBuf, Report> {
    let mut dat = Dat::create(output)?;
    dat.comment(comment)?;
    dat.line(&PlotFmt::stats_header())?;
    for size in sizes {
        let row = stats.get(&(strategy.to_string(), *size)).ok_or_else(|| {
            eyre::eyre!("no statistics for {} with {:?}", strategy, size)
        })?;
        dat.line(&PlotFmt::stats_row(size.label()?, &row.fields()))?;
    }
    dat.finish()
}

pub fn absolute_table_path(output_dir: &Path, strategy: &str) -> PathBuf {
    output_dir.join(format!("{}-all-tm.dat", strategy))
}

pub fn relative_table_path(output_dir: &Path, strategy: &str) -> PathBuf {
    output_dir.join(format!("{}-all-tm-rel.dat", strategy))
}

/// Runs both phases, writing for each strategy a table with its absolute
/// statistics and a table with its statistics relative to the baseline.
/// Returns the statistics of the first phase.
pub fn aggregate(
    db: &SamplesDB,
    config: &AggregateConfig,
    output_dir: impl AsRef<Path>,
) -> Result<StatsMap, Report> {
    let output_dir = output_dir.as_ref();
    config.validate().wrap_err("invalid aggregate config")?;

    let stats = collect(db, config).wrap_err("collect statistics")?;
    tracing::info!(
        "collected statistics of {} strategies with {} object sizes",
        config.strategies.len(),
        config.sizes.len()
    );
    for strategy in &config.strategies {
        let comment = format!("{} run-{} (seconds)", strategy, db.run());
        let path = absolute_table_path(output_dir, strategy);
        write_table(&stats, strategy, &config.sizes, &comment, path)?;
    }

    let relative = relative(
        &stats,
        &config.baseline,
        &config.strategies,
        &config.sizes,
    )?;
    for strategy in &config.strategies {
        // the trailing space is part of the format plots expect
        let comment = format!(
            "{} run-{} relative to {} ",
            strategy,
            db.run(),
            config.baseline.to_uppercase()
        );
        let path = relative_table_path(output_dir, strategy);
        write_table(&relative, strategy, &config.sizes, &comment, path)?;
    }
    tracing::info!(
        "wrote {} tables to {}",
        config.strategies.len() * 2,
        output_dir.display()
    );

    Ok(stats)
}
