mod samples_db;

// Re-exports.
pub use samples_db::SamplesDB;

use std::fmt;

/// Kind of operation a latency sample file was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
    Read,
    Write,
}

impl Op {
    pub fn all() -> [Op; 2] {
        [Op::Read, Op::Write]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Read => "read",
            Op::Write => "write",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
