use color_eyre::eyre::{self, Report};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;

/// Object sizes with a known label, in the order they're usually reported.
const LABELS: [(u64, &str); 5] = [
    (10 * KIB, "10K"),
    (100 * KIB, "100K"),
    (MIB, "1M"),
    (10 * MIB, "10M"),
    (100 * MIB, "100M"),
];

/// Size (in bytes) of the objects transferred in a benchmark run.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
)]
#[serde(transparent)]
pub struct ObjectSize(u64);

impl ObjectSize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// All sizes with a known label: 10KiB, 100KiB, 1MiB, 10MiB and 100MiB.
    pub fn all() -> Vec<Self> {
        LABELS.iter().map(|(bytes, _)| Self(*bytes)).collect()
    }

    pub fn bytes(self) -> u64 {
        self.0
    }

    /// Human-readable name of this size (e.g. `10K`). Fails if the size is
    /// not one of `ObjectSize::all()`.
    pub fn label(self) -> Result<&'static str, Report> {
        LABELS
            .iter()
            .find(|(bytes, _)| *bytes == self.0)
            .map(|(_, label)| *label)
            .ok_or_else(|| eyre::eyre!("object size {} has no label", self.0))
    }
}

impl fmt::Debug for ObjectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.0)
    }
}

impl fmt::Display for ObjectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let labels: Vec<_> = ObjectSize::all()
            .into_iter()
            .map(|size| (size.bytes(), size.label().unwrap()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (10240, "10K"),
                (102400, "100K"),
                (1048576, "1M"),
                (10485760, "10M"),
                (104857600, "100M"),
            ]
        );
    }

    #[test]
    fn unknown_label() {
        let error = ObjectSize::new(4096).label().unwrap_err();
        assert_eq!(error.to_string(), "object size 4096 has no label");
    }

    #[test]
    fn display() {
        assert_eq!(ObjectSize::new(10485760).to_string(), "10485760");
        assert_eq!(format!("{:?}", ObjectSize::new(10240)), "10240B");
    }
}
