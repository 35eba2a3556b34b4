mod common;

use benchdat_plot::ExtractJob;
use clap::{App, Arg};
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;

fn main() -> Result<(), Report> {
    common::init()?;
    for job in parse_args()? {
        job.run()
            .wrap_err_with(|| format!("extract {}", job.input.display()))?;
    }
    Ok(())
}

fn parse_args() -> Result<Vec<ExtractJob>, Report> {
    let matches = App::new("extract")
        .version("0.1")
        .about("Extracts the group size and operation time of matching benchmark log lines into a two-column table.")
        .arg(
            Arg::with_name("dir")
                .long("dir")
                .value_name("DIR")
                .help("directory with the art.bench and drat.bench logs, used when no input is given; default: '.'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .long("input")
                .value_name("FILE")
                .help("benchmark log to read")
                .takes_value(true)
                .requires_all(&["output", "pattern"]),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("FILE")
                .help("table to write")
                .takes_value(true)
                .requires("input"),
        )
        .arg(
            Arg::with_name("pattern")
                .long("pattern")
                .value_name("REGEX")
                .help("lines matching this regular expression are extracted (e.g. 'BenchmarkUpdate/Update-\\d+-\\d+')")
                .takes_value(true)
                .requires("input"),
        )
        .arg(
            Arg::with_name("label")
                .long("label")
                .value_name("LABEL")
                .help("header of the timing column; default: 'ns/op (op = key update)'")
                .takes_value(true),
        )
        .get_matches();

    let jobs = match (
        matches.value_of("input"),
        matches.value_of("output"),
        matches.value_of("pattern"),
    ) {
        (Some(input), Some(output), Some(pattern)) => {
            vec![ExtractJob::new(input, output, pattern)]
        }
        (None, None, None) => {
            ExtractJob::defaults(common::parse_dir(matches.value_of("dir")))
        }
        _ => eyre::bail!("--input, --output and --pattern go together"),
    };

    let jobs = match matches.value_of("label") {
        Some(label) => jobs
            .into_iter()
            .map(|job| job.timing_label(label))
            .collect(),
        None => jobs,
    };

    for job in &jobs {
        tracing::info!(
            "{} -> {} ({})",
            job.input.display(),
            job.output.display(),
            job.pattern
        );
    }
    Ok(jobs)
}
