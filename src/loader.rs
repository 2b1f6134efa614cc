use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, ShamirError};
use crate::radix;
use crate::share::{Point, ShareSet};

#[derive(Deserialize)]
struct RawDocument {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

#[derive(Deserialize)]
struct RawKeys {
    n: u64,
    k: u64,
}

#[derive(Deserialize)]
struct RawShare {
    base: String,
    value: String,
}

impl ShareSet {
    /// Parse a share document: a `keys` object carrying `n` and `k`, plus
    /// one entry per share keyed by its decimal x value, each holding a
    /// string-encoded `base` and a digit-string `value`. A malformed
    /// document fails before any arithmetic runs.
    pub fn from_json(text: &str) -> Result<ShareSet> {
        let raw: RawDocument = serde_json::from_str(text)?;
        if raw.keys.k == 0 {
            return Err(ShamirError::InvalidThreshold);
        }

        let mut points = Vec::with_capacity(raw.shares.len());
        for (key, share) in &raw.shares {
            let x: i64 = key
                .parse()
                .map_err(|_| ShamirError::InvalidShareKey { key: key.clone() })?;
            let base: u32 = share.base.parse().map_err(|_| {
                ShamirError::InvalidBaseField {
                    value: share.base.clone(),
                }
            })?;
            let y = radix::decode(&share.value, base)?;
            points.push(Point { x, y });
        }

        Ok(ShareSet {
            threshold: raw.keys.k as usize,
            total: raw.keys.n as usize,
            points,
        })
    }
}
