use std::cmp::Ordering;
use std::fmt;

use crate::config::{LIMB_BASE, LIMB_DIGITS};
use crate::error::{Result, ShamirError};

/// Arbitrary-precision signed integer in sign + magnitude form.
///
/// The magnitude is a little-endian sequence of base-10^9 limbs with no
/// trailing zero limbs; zero is the empty magnitude with sign 0, so equality
/// is plain structural equality. Every operation returns a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    sign: i8,
    limbs: Vec<u32>,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            sign: 0,
            limbs: Vec::new(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    pub fn neg(&self) -> Self {
        let mut result = self.clone();
        result.sign = -result.sign;
        result
    }

    /// Compare magnitudes only, ignoring sign.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign == other.sign {
            let mut result = Self::add_magnitude(self, other);
            result.sign = self.sign;
            return result;
        }
        match self.cmp_magnitude(other) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                let mut result = Self::sub_magnitude(self, other);
                if !result.is_zero() {
                    result.sign = self.sign;
                }
                result
            }
            Ordering::Less => {
                let mut result = Self::sub_magnitude(other, self);
                if !result.is_zero() {
                    result.sign = other.sign;
                }
                result
            }
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiply by a native scalar.
    pub fn mul_small(&self, m: i64) -> Self {
        if m == 0 || self.is_zero() {
            return Self::zero();
        }
        let sign = if m < 0 { -self.sign } else { self.sign };
        let mm = m.unsigned_abs() as u128;
        let base = LIMB_BASE as u128;

        let mut limbs = Vec::with_capacity(self.limbs.len() + 3);
        let mut carry: u128 = 0;
        for &limb in &self.limbs {
            let cur = carry + limb as u128 * mm;
            limbs.push((cur % base) as u32);
            carry = cur / base;
        }
        while carry > 0 {
            limbs.push((carry % base) as u32);
            carry /= base;
        }

        let mut result = BigInt { sign, limbs };
        result.trim();
        result
    }

    /// Long division by a positive native scalar, from the most significant
    /// limb down. Returns the quotient and the non-negative magnitude
    /// remainder; checking the remainder is the caller's job where the
    /// division is meant to be exact.
    pub fn div_small(&self, d: i64) -> Result<(Self, i64)> {
        if d <= 0 {
            return Err(ShamirError::InvalidDivisor { divisor: d });
        }
        if self.is_zero() {
            return Ok((Self::zero(), 0));
        }
        let dd = d as u128;
        let base = LIMB_BASE as u128;

        let mut limbs = vec![0u32; self.limbs.len()];
        let mut rem: u128 = 0;
        for i in (0..self.limbs.len()).rev() {
            let cur = self.limbs[i] as u128 + rem * base;
            limbs[i] = (cur / dd) as u32;
            rem = cur % dd;
        }

        let mut quotient = BigInt {
            sign: self.sign,
            limbs,
        };
        quotient.trim();
        Ok((quotient, rem as i64))
    }

    fn add_magnitude(a: &Self, b: &Self) -> Self {
        let n = a.limbs.len().max(b.limbs.len());
        let mut limbs = Vec::with_capacity(n + 1);
        let mut carry = 0u64;
        for i in 0..n {
            let mut cur = carry;
            if let Some(&limb) = a.limbs.get(i) {
                cur += limb as u64;
            }
            if let Some(&limb) = b.limbs.get(i) {
                cur += limb as u64;
            }
            if cur >= LIMB_BASE {
                limbs.push((cur - LIMB_BASE) as u32);
                carry = 1;
            } else {
                limbs.push(cur as u32);
                carry = 0;
            }
        }
        if carry > 0 {
            limbs.push(1);
        }
        let mut result = BigInt { sign: 1, limbs };
        result.trim();
        result
    }

    // Requires |a| >= |b|; callers establish this with cmp_magnitude.
    fn sub_magnitude(a: &Self, b: &Self) -> Self {
        let mut limbs = a.limbs.clone();
        let mut borrow = 0i64;
        for i in 0..limbs.len() {
            let subtrahend = b.limbs.get(i).map_or(0, |&limb| limb as i64);
            let mut cur = limbs[i] as i64 - borrow - subtrahend;
            if cur < 0 {
                cur += LIMB_BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs[i] = cur as u32;
            if borrow == 0 && i + 1 >= b.limbs.len() {
                break;
            }
        }
        let mut result = BigInt { sign: 1, limbs };
        result.trim();
        result
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.sign = 0;
        }
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        if v == 0 {
            return Self::zero();
        }
        let sign = if v < 0 { -1 } else { 1 };
        let mut x = v.unsigned_abs();
        let mut limbs = Vec::new();
        while x > 0 {
            limbs.push((x % LIMB_BASE) as u32);
            x /= LIMB_BASE;
        }
        BigInt { sign, limbs }
    }
}

impl fmt::Display for BigInt {
    /// Renders the sign (only if negative), the most significant limb
    /// unpadded, then every lower limb zero-padded to 9 digits. The padding
    /// keeps interior zero runs in the rendered value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (most, rest) = match self.limbs.split_last() {
            Some(split) => split,
            None => return f.write_str("0"),
        };
        if self.sign < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}", most)?;
        for limb in rest.iter().rev() {
            write!(f, "{:0width$}", limb, width = LIMB_DIGITS)?;
        }
        Ok(())
    }
}
