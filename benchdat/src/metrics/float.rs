use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A `f64` with a total order: `NaN` equals `NaN` and is larger than any
/// other value.
#[derive(PartialOrd, Deserialize, Serialize, Clone, Copy)]
pub struct F64(f64);

impl F64 {
    pub fn new(x: f64) -> Self {
        Self(x)
    }

    pub fn nan() -> Self {
        Self::new(f64::NAN)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Checks whether `self` and `other` are within `epsilon` of each other.
    /// Two `NaN`s are considered close.
    pub fn close_to(self, other: Self, epsilon: f64) -> bool {
        if self.is_nan() || other.is_nan() {
            self.is_nan() && other.is_nan()
        } else {
            (self.0 - other.0).abs() <= epsilon
        }
    }
}

impl std::ops::Div for F64 {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self(self.0 / other.0)
    }
}

// based on: https://github.com/reem/rust-ordered-float/ `cmp` implementation for `OrderedFloat`
impl Ord for F64 {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.partial_cmp(other) {
            Some(ordering) => ordering,
            None => {
                if self.0.is_nan() {
                    if other.0.is_nan() {
                        Ordering::Equal
                    } else {
                        Ordering::Greater
                    }
                } else {
                    Ordering::Less
                }
            }
        }
    }
}

impl PartialEq for F64 {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() {
            other.0.is_nan()
        } else {
            self.0 == other.0
        }
    }
}

impl Eq for F64 {}

impl fmt::Debug for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value() {
        assert_eq!(F64::new(0.0).value(), 0.0);
        assert_eq!(F64::new(11.2).value(), 11.2);
    }

    #[test]
    fn div() {
        assert_eq!(F64::new(10.0) / F64::new(4.0), F64::new(2.5));
        assert!((F64::new(0.0) / F64::new(0.0)).is_nan());
        assert_eq!(F64::new(1.0) / F64::new(0.0), F64::new(f64::INFINITY));
        assert!((F64::nan() / F64::new(2.0)).is_nan());
    }

    #[test]
    fn close_to() {
        assert!(F64::new(1.0).close_to(F64::new(1.0 + 1e-12), 1e-9));
        assert!(!F64::new(1.0).close_to(F64::new(1.1), 1e-9));
        assert!(F64::nan().close_to(F64::nan(), 1e-9));
        assert!(!F64::nan().close_to(F64::new(1.0), 1e-9));
    }

    #[test]
    fn ord() {
        assert_eq!(F64::new(5.2).cmp(&F64::new(5.3)), Ordering::Less);
        assert_eq!(F64::new(5.3).cmp(&F64::new(5.2)), Ordering::Greater);
        assert_eq!(F64::new(5.2).cmp(&F64::new(5.2)), Ordering::Equal);
        assert_eq!(F64::new(5.2).cmp(&F64::nan()), Ordering::Less);
        assert_eq!(F64::nan().cmp(&F64::new(5.3)), Ordering::Greater);
        assert_eq!(F64::nan().cmp(&F64::nan()), Ordering::Equal);
    }
}
