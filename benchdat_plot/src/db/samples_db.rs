use crate::db::Op;
use benchdat::{ObjectSize, Samples};
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Raw latency samples of one benchmark run, stored as
/// `<root>/<strategy>/gcsfuse-<strategy>/artifact-data/run-<run>/<strategy>-<op>-<size>.dat`.
#[derive(Debug, Clone)]
pub struct SamplesDB {
    root: PathBuf,
    run: usize,
}

impl SamplesDB {
    pub fn new(root: impl AsRef<Path>, run: usize) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            run,
        }
    }

    pub fn run(&self) -> usize {
        self.run
    }

    /// Path of the file with the samples of `op` on objects of `size` bytes.
    pub fn path(&self, strategy: &str, op: Op, size: ObjectSize) -> PathBuf {
        self.root
            .join(strategy)
            .join(format!("gcsfuse-{}", strategy))
            .join("artifact-data")
            .join(format!("run-{}", self.run))
            .join(format!("{}-{}-{}.dat", strategy, op, size))
    }

    /// Loads the samples of `op` on objects of `size` bytes as throughputs
    /// (bytes per second), sorted in ascending order.
    pub fn load(
        &self,
        strategy: &str,
        op: Op,
        size: ObjectSize,
    ) -> Result<Samples, Report> {
        let path = self.path(strategy, op, size);
        let elapsed = Self::load_elapsed(&path)?;
        tracing::debug!(
            "loaded {} samples from {}",
            elapsed.len(),
            path.display()
        );
        Ok(Samples::throughput(size, elapsed))
    }

    /// Reads a file with one elapsed time (in seconds) per line.
    pub fn load_elapsed(path: &Path) -> Result<Vec<f64>, Report> {
        let file = File::open(path)
            .wrap_err_with(|| format!("open {}", path.display()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(file);

        let mut elapsed = Vec::new();
        for record in reader.records() {
            let record = record
                .wrap_err_with(|| format!("read {}", path.display()))?;
            let line = record.position().map(|pos| pos.line()).unwrap_or(0);
            let field = match record.get(0) {
                Some(field) if !field.is_empty() => field,
                // whitespace-only line
                _ => continue,
            };
            if record.len() > 1 {
                eyre::bail!(
                    "line {} of {} has {} fields, expected a single value",
                    line,
                    path.display(),
                    record.len()
                );
            }
            let value = field.parse::<f64>().wrap_err_with(|| {
                format!(
                    "line {} of {}: {:?} is not a number",
                    line,
                    path.display(),
                    field
                )
            })?;
            elapsed.push(value);
        }
        Ok(elapsed)
    }
}
