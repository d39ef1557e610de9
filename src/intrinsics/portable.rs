// =============================================================================
// Portable Bit Scans (SWAR)
// =============================================================================
//
// Branch-free fallbacks built on a SWAR popcount. Every function is a
// `const fn`, so these also serve constant evaluation on any backend.

/// Number of set bits in a 32-bit value.
///
/// Sums bits in 2-, 4- and 8-bit lanes, then folds the byte sums.
#[inline(always)]
pub const fn popcnt32(x: u32) -> u32 {
    let mut x = x;
    x -= (x >> 1) & 0x5555_5555;
    x = ((x >> 2) & 0x3333_3333) + (x & 0x3333_3333);
    x = ((x >> 4) + x) & 0x0F0F_0F0F;
    x += x >> 8;
    x += x >> 16;
    x & 0x0000_003F
}

/// Number of set bits in a 64-bit value.
#[inline(always)]
pub const fn popcnt64(x: u64) -> u32 {
    let mut x = x;
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = ((x >> 2) & 0x3333_3333_3333_3333) + (x & 0x3333_3333_3333_3333);
    x = ((x >> 4) + x) & 0x0F0F_0F0F_0F0F_0F0F;
    (x.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}

/// Count leading zeros in a 32-bit value. Returns 32 for zero.
///
/// Smears the highest set bit downward, then counts what is left unset.
#[inline(always)]
pub const fn clz32(x: u32) -> u32 {
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    32 - popcnt32(x)
}

/// Count leading zeros in a 64-bit value. Returns 64 for zero.
#[inline(always)]
pub const fn clz64(x: u64) -> u32 {
    let mut x = x;
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    64 - popcnt64(x)
}

/// Count trailing zeros in a 32-bit value. Returns 32 for zero.
///
/// `(x & -x) - 1` is a mask of exactly the trailing zeros; for zero it wraps
/// to all ones.
#[inline(always)]
pub const fn ctz32(x: u32) -> u32 {
    popcnt32((x & x.wrapping_neg()).wrapping_sub(1))
}

/// Count trailing zeros in a 64-bit value. Returns 64 for zero.
#[inline(always)]
pub const fn ctz64(x: u64) -> u32 {
    popcnt64((x & x.wrapping_neg()).wrapping_sub(1))
}

// Sentinels hold during constant evaluation.
const _: () = {
    assert!(ctz32(0) == 32);
    assert!(ctz64(0) == 64);
    assert!(clz32(0) == 32);
    assert!(clz32(u32::MAX) == 0);
    assert!(popcnt32(0) == 0);
    assert!(popcnt32(u32::MAX) == 32);
};
