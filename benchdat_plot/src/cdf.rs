use crate::config::CdfConfig;
use crate::dat::Dat;
use crate::db::{Op, SamplesDB};
use benchdat::Samples;
use color_eyre::Report;
use std::path::Path;

/// Writes every sample in its own line, in ascending order.
pub fn write_samples(
    samples: &Samples,
    output: impl AsRef<Path>,
) -> Result<(), Report> {
    let mut dat = Dat::create(output)?;
    for value in samples.values() {
        dat.value(value)?;
    }
    dat.finish()?;
    Ok(())
}

/// Exports all read and write throughputs of the configured strategy and
/// object size, so that their CDF can be plotted.
pub fn export(
    db: &SamplesDB,
    config: &CdfConfig,
    read_output: impl AsRef<Path>,
    write_output: impl AsRef<Path>,
) -> Result<(), Report> {
    let reads = db.load(&config.strategy, Op::Read, config.size)?;
    let writes = db.load(&config.strategy, Op::Write, config.size)?;

    write_samples(&reads, read_output.as_ref())?;
    write_samples(&writes, write_output.as_ref())?;
    tracing::info!(
        "exported {} reads and {} writes of {} with {:?}",
        reads.len(),
        writes.len(),
        config.strategy,
        config.size
    );
    Ok(())
}
