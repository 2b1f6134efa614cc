pub mod bigint;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod loader;
pub mod radix;
pub mod share;
pub mod util;

pub use bigint::*;
pub use error::*;
pub use interpolate::*;
pub use share::*;

pub mod shamir {
    use super::*;

    /// Reconstruct the secret from an already-loaded share set
    ///
    /// # Arguments
    /// * `set` - Shares plus the reconstruction threshold
    ///
    /// # Returns
    /// * `Ok(BigInt)` - The recovered constant term
    /// * `Err(ShamirError)` - Error if the set cannot be reconstructed
    pub fn reconstruct_secret(set: &ShareSet) -> Result<BigInt> {
        set.reconstruct()
    }

    /// Reconstruct the secret straight from a JSON share document
    ///
    /// # Arguments
    /// * `text` - Share document (see [`ShareSet::from_json`])
    ///
    /// # Returns
    /// * `Ok(BigInt)` - The recovered constant term
    /// * `Err(ShamirError)` - Error if the document is malformed or the
    ///   set cannot be reconstructed
    pub fn reconstruct_from_json(text: &str) -> Result<BigInt> {
        ShareSet::from_json(text)?.reconstruct()
    }
}
