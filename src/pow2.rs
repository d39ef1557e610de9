// =============================================================================
// Power-of-Two Math
// =============================================================================
//
// Power-of-two tests, integer base-2 logarithms and rounding. These use plain
// shift loops and bit smearing rather than the bit-scan intrinsics, so they
// stay `const`-friendly and backend-independent.
//
// Two edge cases are kept on purpose:
// - `is_pow2(0)` is false even though `0 & (0 - 1) == 0`.
// - `round_to_next_pow2(0)` is 0, not 1.
//
// Signed inputs are accepted. Negative values behave like zero.

use crate::width::{Integral, UnsignedBits};

// =============================================================================
// Unsigned-View Kernels
// =============================================================================

#[inline(always)]
fn is_pow2_bits<U: UnsignedBits>(x: U) -> bool {
    x != U::ZERO && (x & x.wrapping_sub(U::ONE)) == U::ZERO
}

#[inline(always)]
fn log2_bits<U: UnsignedBits>(x: U) -> u32 {
    let mut x = x;
    let mut p = 0;
    while x > U::ONE {
        x = x >> 1;
        p += 1;
    }
    p
}

#[inline(always)]
fn next_pow2_bits<U: UnsignedBits>(x: U) -> U {
    if x == U::ZERO {
        return U::ZERO;
    }
    let mut v = x.wrapping_sub(U::ONE);
    let mut s = U::BITS / 2;
    while s > 0 {
        v = v | (v >> s);
        s >>= 1;
    }
    v.wrapping_add(U::ONE)
}

#[inline(always)]
fn low_mask_bits<U: UnsignedBits>(n: u32) -> U {
    U::ONE.wrapping_shl(n).wrapping_sub(U::ONE)
}

// =============================================================================
// Generic API
// =============================================================================

/// Returns `true` iff `x > 0` and `x` has exactly one bit set.
///
/// Negative values are never powers of two, `i32::MIN` included.
///
/// ```
/// use prav_bits::is_pow2;
///
/// assert!(is_pow2(1u8));
/// assert!(is_pow2(1usize << 40));
/// assert!(is_pow2(64i32));
/// assert!(!is_pow2(0u32));
/// assert!(!is_pow2(6u16));
/// assert!(!is_pow2(i32::MIN));
/// ```
#[inline(always)]
pub fn is_pow2<T: Integral>(x: T) -> bool {
    !x.is_negative() && is_pow2_bits(x.to_unsigned())
}

/// Floor of the base-2 logarithm of `x`.
///
/// Defined for `x >= 1`. Zero and negative values are outside the domain and
/// yield 0.
#[inline(always)]
pub fn log2_int<T: Integral>(x: T) -> u32 {
    if x.is_negative() {
        return 0;
    }
    log2_bits(x.to_unsigned())
}

/// Number of bits needed to represent `x`: `log2_int(x) + 1`, or 0 for zero.
///
/// Negative values yield 0, like zero.
///
/// ```
/// use prav_bits::log2_int_round_up;
///
/// assert_eq!(log2_int_round_up(0u32), 0);
/// assert_eq!(log2_int_round_up(3u32), 2);
/// assert_eq!(log2_int_round_up(1024u32), 11);
/// assert_eq!(log2_int_round_up(-7i16), 0);
/// ```
#[inline(always)]
pub fn log2_int_round_up<T: Integral>(x: T) -> u32 {
    let x_bits = x.to_unsigned();
    if x.is_negative() || x_bits == <T::Unsigned as UnsignedBits>::ZERO {
        0
    } else {
        log2_bits(x_bits) + 1
    }
}

/// Smallest power of two `>= x`, with `round_to_next_pow2(0) == 0`.
///
/// Negative values yield 0, like zero. Values above the largest power of two
/// `T` can hold wrap to 0; for signed types that bound is `1 << (BITS - 2)`.
///
/// ```
/// use prav_bits::round_to_next_pow2;
///
/// assert_eq!(round_to_next_pow2(0u32), 0);
/// assert_eq!(round_to_next_pow2(5u32), 8);
/// assert_eq!(round_to_next_pow2(64u64), 64);
/// assert_eq!(round_to_next_pow2(5i32), 8);
/// assert_eq!(round_to_next_pow2(-5i32), 0);
/// ```
#[inline(always)]
pub fn round_to_next_pow2<T: Integral>(x: T) -> T {
    let zero = T::from_unsigned(<T::Unsigned as UnsignedBits>::ZERO);
    if x.is_negative() {
        return zero;
    }
    let r = T::from_unsigned(next_pow2_bits(x.to_unsigned()));
    // A signed result landing on the sign bit is out of range.
    if r.is_negative() {
        zero
    } else {
        r
    }
}

/// Single-bit mask `1 << n`.
///
/// `n` must be below `T::BITS`.
#[inline(always)]
pub fn bit<T: Integral>(n: u32) -> T {
    debug_assert!(n < T::BITS, "bit index {} out of range for {} bits", n, T::BITS);
    T::from_unsigned(<T::Unsigned as UnsignedBits>::ONE.wrapping_shl(n))
}

/// Returns `true` iff `n` is a multiple of `2^x`.
///
/// Checks that the low `x` bits are clear. `x` must be below the width of
/// `T`; `x == 0` is always `true`.
///
/// ```
/// use prav_bits::is_divisible_by_pow2;
///
/// assert!(is_divisible_by_pow2(24u32, 3));
/// assert!(!is_divisible_by_pow2(24u32, 4));
/// assert!(is_divisible_by_pow2(-16i64, 4));
/// ```
#[inline(always)]
pub fn is_divisible_by_pow2<T: Integral>(n: T, x: u32) -> bool {
    debug_assert!(x < T::BITS, "shift {} out of range for {} bits", x, T::BITS);
    (n.to_unsigned() & low_mask_bits::<T::Unsigned>(x)) == <T::Unsigned as UnsignedBits>::ZERO
}

// =============================================================================
// Const API (allocator hot types)
// =============================================================================

macro_rules! const_pow2 {
    ($($t:ty => $is_pow2:ident, $log2:ident, $log2_up:ident, $next:ident;)*) => {
        $(
            #[doc = concat!("`const` form of [`is_pow2`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $is_pow2(x: $t) -> bool {
                x != 0 && (x & x.wrapping_sub(1)) == 0
            }

            #[doc = concat!("`const` form of [`log2_int`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $log2(x: $t) -> u32 {
                let mut x = x;
                let mut p = 0;
                while x > 1 {
                    x >>= 1;
                    p += 1;
                }
                p
            }

            #[doc = concat!("`const` form of [`log2_int_round_up`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $log2_up(x: $t) -> u32 {
                if x == 0 {
                    0
                } else {
                    $log2(x) + 1
                }
            }

            #[doc = concat!("`const` form of [`round_to_next_pow2`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $next(x: $t) -> $t {
                if x == 0 {
                    return 0;
                }
                let mut v = x - 1;
                let mut s = <$t>::BITS / 2;
                while s > 0 {
                    v |= v >> s;
                    s >>= 1;
                }
                v.wrapping_add(1)
            }
        )*
    };
}

const_pow2! {
    u32 => is_pow2_u32, log2_int_u32, log2_int_round_up_u32, round_to_next_pow2_u32;
    u64 => is_pow2_u64, log2_int_u64, log2_int_round_up_u64, round_to_next_pow2_u64;
    usize => is_pow2_usize, log2_int_usize, log2_int_round_up_usize, round_to_next_pow2_usize;
}

// Bits-needed table, checked at compile time.
const _: () = {
    assert!(log2_int_round_up_u32(0) == 0);
    assert!(log2_int_round_up_u32(1) == 1);
    assert!(log2_int_round_up_u32(2) == 2);
    assert!(log2_int_round_up_u32(3) == 2);
    assert!(log2_int_round_up_u32(4) == 3);
    assert!(log2_int_round_up_u32(5) == 3);
    assert!(log2_int_round_up_u32(6) == 3);
    assert!(log2_int_round_up_u32(7) == 3);
    assert!(log2_int_round_up_u32(8) == 4);
    assert!(log2_int_round_up_u32(9) == 4);
    assert!(log2_int_round_up_u32(13) == 4);
    assert!(log2_int_round_up_u32(1023) == 10);
    assert!(log2_int_round_up_u32(1024) == 11);
    assert!(round_to_next_pow2_u32(0) == 0);
    assert!(!is_pow2_u64(0));
};
