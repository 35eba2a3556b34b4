use crate::fmt::PlotFmt;
use benchdat::F64;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A `.dat` file being written. Nothing is guaranteed to be on disk until
/// `Dat::finish` returns.
#[derive(Debug)]
pub struct Dat {
    path: PathBuf,
    buf: BufWriter<File>,
}

impl Dat {
    /// Creates (or truncates) the file at `path`, creating its parent
    /// directory if needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, Report> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("create directory {}", parent.display())
                })?;
            }
        }
        let file = File::create(&path)
            .wrap_err_with(|| format!("create {}", path.display()))?;
        let buf = BufWriter::new(file);
        Ok(Self { path, buf })
    }

    /// Writes a `# `-prefixed comment line.
    pub fn comment(&mut self, comment: &str) -> Result<(), Report> {
        self.line(&format!("# {}", comment))
    }

    /// Writes a line of left-justified columns.
    pub fn columns<'a, I>(&mut self, columns: I) -> Result<(), Report>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        self.line(&PlotFmt::columns(columns))
    }

    /// Writes a single value in its own line.
    pub fn value(&mut self, value: F64) -> Result<(), Report> {
        self.line(&PlotFmt::float(value))
    }

    pub fn line(&mut self, line: &str) -> Result<(), Report> {
        writeln!(self.buf, "{}", line)
            .wrap_err_with(|| format!("write to {}", self.path.display()))
    }

    /// Flushes everything written so far.
    pub fn finish(mut self) -> Result<PathBuf, Report> {
        self.buf
            .flush()
            .wrap_err_with(|| format!("flush {}", self.path.display()))?;
        Ok(self.path)
    }
}
