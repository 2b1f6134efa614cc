use crate::bigint::BigInt;
use crate::error::Result;
use crate::interpolate::reconstruct;

/// One share of the secret: a point on the hidden polynomial.
#[derive(Clone, Debug)]
pub struct Point {
    pub x: i64,
    pub y: BigInt,
}

/// A set of shares together with the reconstruction threshold.
#[derive(Clone, Debug)]
pub struct ShareSet {
    /// Minimum number of shares needed to reconstruct (k).
    pub threshold: usize,
    /// Total number of shares issued (informational).
    pub total: usize,
    pub points: Vec<Point>,
}

impl ShareSet {
    /// Recover the secret from this share set.
    pub fn reconstruct(&self) -> Result<BigInt> {
        reconstruct(&self.points, self.threshold)
    }
}
