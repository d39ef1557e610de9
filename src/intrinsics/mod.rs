// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Trailing/leading zero counts and population counts in two interchangeable
// backends. The `portable` Cargo feature picks which one the crate root sees.

/// Native backend: hardware count instructions or the compiler builtins.
pub mod native;

/// Portable backend: branch-free bit smearing and SWAR popcount, all `const fn`.
pub mod portable;

// =============================================================================
// Backend Selection
// =============================================================================

#[cfg(not(feature = "portable"))]
pub use native::{clz32, clz64, ctz32, ctz64, popcnt32, popcnt64};

#[cfg(feature = "portable")]
pub use portable::{clz32, clz64, ctz32, ctz64, popcnt32, popcnt64};

/// Name of the backend the crate-root bit scans resolve to.
pub const BACKEND: &str = if cfg!(feature = "portable") {
    "portable"
} else {
    "native"
};

// =============================================================================
// Bit Iteration
// =============================================================================

/// Bit scan and reset: clears the lowest set bit.
///
/// Equivalent to `x & (x - 1)`; zero stays zero. Paired with [`ctz64`] it
/// walks the set bits of a mask:
///
/// ```
/// use prav_bits::{blsr, ctz64};
///
/// let mut mask = 0b1010_0100u64;
/// let mut seen = 0;
/// while mask != 0 {
///     seen |= 1 << ctz64(mask);
///     mask = blsr(mask);
/// }
/// assert_eq!(seen, 0b1010_0100);
/// ```
#[inline(always)]
pub const fn blsr(x: u64) -> u64 {
    x & x.wrapping_sub(1)
}
