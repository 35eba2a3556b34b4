use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DIR: &str = ".";

/// Installs the error report handler and a tracing subscriber filtered by
/// `RUST_LOG` (`info` if unset).
pub fn init() -> Result<(), Report> {
    color_eyre::install()?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

pub fn parse_dir(dir: Option<&str>) -> PathBuf {
    PathBuf::from(dir.unwrap_or(DEFAULT_DIR))
}

#[allow(dead_code)]
pub fn parse_number<T>(
    name: &str,
    value: Option<&str>,
    default: T,
) -> Result<T, Report>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(value) => value
            .parse::<T>()
            .wrap_err_with(|| format!("{} should be a number", name)),
        None => Ok(default),
    }
}
