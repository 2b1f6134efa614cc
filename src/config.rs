/// Limb radix of the big-integer magnitude: large enough to amortize
/// per-limb overhead, small enough that a limb times a 64-bit scalar fits
/// a native wide integer.
pub const LIMB_BASE: u64 = 1_000_000_000;

/// Decimal digits per limb.
pub const LIMB_DIGITS: usize = 9;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

pub fn base_supported(base: u32) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base)
}
