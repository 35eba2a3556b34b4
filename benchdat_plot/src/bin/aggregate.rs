mod common;

use benchdat_plot::{aggregate, AggregateConfig, SamplesDB};
use clap::{App, Arg};
use color_eyre::Report;

const PLOTS_DIR: &str = "plots";

fn main() -> Result<(), Report> {
    common::init()?;

    let matches = App::new("aggregate")
        .version("0.1")
        .about("Computes trimmed throughput statistics of each strategy and object size, in absolute terms and relative to a baseline strategy.")
        .arg(
            Arg::with_name("dir")
                .long("dir")
                .value_name("DIR")
                .help("directory with one folder of samples per strategy; default: '.'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output_dir")
                .long("output_dir")
                .value_name("DIR")
                .help("directory where tables are written; default: DIR/plots")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("JSON file with 'strategies', 'baseline', 'sizes' (in bytes) and 'run'; missing fields take their default")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("run")
                .long("run")
                .value_name("RUN")
                .help("benchmark run to read samples from; default: 1")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("baseline")
                .long("baseline")
                .value_name("STRATEGY")
                .help("strategy all others are compared against; default: 'cmek'")
                .takes_value(true),
        )
        .get_matches();

    let dir = common::parse_dir(matches.value_of("dir"));
    let output_dir = matches
        .value_of("output_dir")
        .map(Into::into)
        .unwrap_or_else(|| dir.join(PLOTS_DIR));

    let mut config = match matches.value_of("config") {
        Some(path) => AggregateConfig::load(path)?,
        None => AggregateConfig::default(),
    };
    config.run = common::parse_number("run", matches.value_of("run"), config.run)?;
    if let Some(baseline) = matches.value_of("baseline") {
        config.baseline = baseline.to_string();
    }
    tracing::info!("{:?}", config);

    let db = SamplesDB::new(&dir, config.run);
    aggregate::aggregate(&db, &config, &output_dir)?;
    Ok(())
}
