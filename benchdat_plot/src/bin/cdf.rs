mod common;

use benchdat::ObjectSize;
use benchdat_plot::{cdf, CdfConfig, SamplesDB};
use clap::{App, Arg};
use color_eyre::Report;

const READ_OUTPUT: &str = "plots/seqread.dat";
const WRITE_OUTPUT: &str = "plots/seqwrite.dat";

fn main() -> Result<(), Report> {
    common::init()?;

    let matches = App::new("cdf")
        .version("0.1")
        .about("Exports the sorted read and write throughputs of one strategy and object size, one value per line.")
        .arg(
            Arg::with_name("dir")
                .long("dir")
                .value_name("DIR")
                .help("directory with one folder of samples per strategy; default: '.'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .help("strategy whose samples are exported; default: 'nested'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .long("size")
                .value_name("BYTES")
                .help("object size in bytes; default: 10485760")
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
            Arg::with_name("read_output")
                .long("read_output")
                .value_name("FILE")
                .help("file where read throughputs are written; default: DIR/plots/seqread.dat")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("write_output")
                .long("write_output")
                .value_name("FILE")
                .help("file where write throughputs are written; default: DIR/plots/seqwrite.dat")
                .takes_value(true),
        )
        .get_matches();

    let dir = common::parse_dir(matches.value_of("dir"));
    let mut config = CdfConfig::default();
    if let Some(strategy) = matches.value_of("strategy") {
        config.strategy = strategy.to_string();
    }
    let size = common::parse_number(
        "size",
        matches.value_of("size"),
        config.size.bytes(),
    )?;
    config.size = ObjectSize::new(size);
    config.run = common::parse_number("run", matches.value_of("run"), config.run)?;

    let read_output = matches
        .value_of("read_output")
        .map(Into::into)
        .unwrap_or_else(|| dir.join(READ_OUTPUT));
    let write_output = matches
        .value_of("write_output")
        .map(Into::into)
        .unwrap_or_else(|| dir.join(WRITE_OUTPUT));
    tracing::info!("{:?}", config);

    let db = SamplesDB::new(&dir, config.run);
    cdf::export(&db, &config, &read_output, &write_output)?;
    Ok(())
}
