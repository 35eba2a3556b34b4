use crate::dat::Dat;
use crate::fmt::{GROUP_WIDTH, VALUE_WIDTH};
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const GROUP_SIZE_LABEL: &str = "# group size";
pub const DEFAULT_TIMING_LABEL: &str = "ns/op (op = key update)";

// index of the timing token in a benchmark line
const TIMING_TOKEN: usize = 2;

/// A benchmark log line reduced to the group size it ran with and the time
/// each operation took. Both are kept as written in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRecord {
    pub group_size: String,
    pub op_time: String,
}

impl BenchRecord {
    /// Parses a line such as
    /// `BenchmarkUpdate/Update-16-8    1000    123456 ns/op`.
    ///
    /// The group size is the second `-`-separated part of the first token
    /// and the operation time is the third token, without any unit glued to
    /// it.
    pub fn parse(line: &str) -> Result<Self, Report> {
        let tokens: Vec<_> = line.split_whitespace().collect();
        if tokens.len() <= TIMING_TOKEN {
            eyre::bail!(
                "expected at least {} tokens, found {} in {:?}",
                TIMING_TOKEN + 1,
                tokens.len(),
                line.trim()
            );
        }

        let group_size = tokens[0].split('-').nth(1).ok_or_else(|| {
            eyre::eyre!("no group size in benchmark name {:?}", tokens[0])
        })?;

        // drop a unit suffix, if any (e.g. `1234ns/op`)
        let op_time = tokens[TIMING_TOKEN]
            .trim_end_matches(|c: char| !(c.is_ascii_digit() || c == '.'));
        if op_time.is_empty() {
            eyre::bail!("no timing value in {:?}", tokens[TIMING_TOKEN]);
        }

        Ok(Self {
            group_size: group_size.to_string(),
            op_time: op_time.to_string(),
        })
    }
}

/// Parses every line of `reader` matching `pattern`, keeping their order.
pub fn records<R: BufRead>(
    reader: R,
    pattern: &Regex,
) -> Result<Vec<BenchRecord>, Report> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.wrap_err("read line")?;
        if pattern.is_match(&line) {
            let record = BenchRecord::parse(&line)
                .wrap_err_with(|| format!("line {}", index + 1))?;
            records.push(record);
        }
    }
    Ok(records)
}

/// Writes `records` as a two-column table.
pub fn write(
    records: &[BenchRecord],
    timing_label: &str,
    output: impl AsRef<Path>,
) -> Result<(), Report> {
    let mut dat = Dat::create(output)?;
    dat.columns(vec![
        (GROUP_SIZE_LABEL, GROUP_WIDTH),
        (timing_label, VALUE_WIDTH),
    ])?;
    for record in records {
        dat.columns(vec![
            (record.group_size.as_str(), GROUP_WIDTH),
            (record.op_time.as_str(), VALUE_WIDTH),
        ])?;
    }
    dat.finish()?;
    Ok(())
}

/// Extraction of the lines matching `pattern` in the log `input` into the
/// table `output`.
#[derive(Debug, Clone)]
pub struct ExtractJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pattern: String,
    pub timing_label: String,
}

impl ExtractJob {
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            pattern: pattern.into(),
            timing_label: DEFAULT_TIMING_LABEL.to_string(),
        }
    }

    pub fn timing_label(mut self, timing_label: impl Into<String>) -> Self {
        self.timing_label = timing_label.into();
        self
    }

    /// Key update benchmarks of ART and DRAT, with logs and tables in `dir`.
    pub fn defaults(dir: impl AsRef<Path>) -> Vec<Self> {
        let dir = dir.as_ref();
        vec![
            Self::new(
                dir.join("art.bench"),
                dir.join("art.dat"),
                r"BenchmarkUpdate/Update-\d+-\d+",
            ),
            Self::new(
                dir.join("drat.bench"),
                dir.join("drat.dat"),
                r"BenchmarkKeyRotation/Group-\d+-\d+",
            ),
        ]
    }

    /// Runs this job, returning the number of rows written.
    pub fn run(&self) -> Result<usize, Report> {
        let pattern = Regex::new(&self.pattern)
            .wrap_err_with(|| format!("invalid pattern {:?}", self.pattern))?;
        let file = File::open(&self.input)
            .wrap_err_with(|| format!("open {}", self.input.display()))?;
        let records = records(BufReader::new(file), &pattern)
            .wrap_err_with(|| format!("parse {}", self.input.display()))?;
        write(&records, &self.timing_label, &self.output)?;
        tracing::info!(
            "{} rows matching {:?} extracted from {} into {}",
            records.len(),
            self.pattern,
            self.input.display(),
            self.output.display()
        );
        Ok(records.len())
    }
}
