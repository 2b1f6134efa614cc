use crate::bigint::BigInt;
use crate::config::base_supported;
use crate::error::{Result, ShamirError};
use crate::util::digit_value;

/// Decode a digit string in the given base (2-36), skipping characters that
/// are not valid digits of that base. The skip is a deliberate, documented
/// policy carried over from the original tooling; an empty or all-invalid
/// string decodes to zero. Use [`decode_strict`] to fail on bad digits
/// instead.
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    decode_inner(digits, base, false)
}

/// Like [`decode`], but any character that is not a valid digit of `base`
/// is an error.
pub fn decode_strict(digits: &str, base: u32) -> Result<BigInt> {
    decode_inner(digits, base, true)
}

fn decode_inner(digits: &str, base: u32, strict: bool) -> Result<BigInt> {
    if !base_supported(base) {
        return Err(ShamirError::UnsupportedBase { base });
    }
    let mut acc = BigInt::zero();
    for ch in digits.chars() {
        match digit_value(ch).filter(|&v| v < base) {
            Some(v) => {
                acc = acc.mul_small(base as i64).add(&BigInt::from(v as i64));
            }
            None if strict => return Err(ShamirError::InvalidDigit { ch, base }),
            None => {}
        }
    }
    Ok(acc)
}
