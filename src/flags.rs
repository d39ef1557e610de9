// =============================================================================
// Flag Operations
// =============================================================================
//
// Set, clear, toggle and test bit masks on a caller-owned integer. The mask
// may be any integer type; it is converted to the target's width bit for bit.
// A mask wider than the target is truncated to the target's low bits. That
// narrowing is intended, so `flag_on(&mut byte, 0x1FFu16)` touches only the
// eight bits a byte has.

use crate::width::{Integral, UnsignedBits};

#[inline(always)]
fn fit<T: Integral, M: Integral>(mask: M) -> T {
    T::from_u64_truncating(mask.to_u64())
}

/// Set every bit of `f` in `n` (`n |= f`).
///
/// ```
/// use prav_bits::{flag_on, flags_are_on};
///
/// let mut state = 0b0001u8;
/// flag_on(&mut state, 0b0110u8);
/// assert_eq!(state, 0b0111);
/// assert!(flags_are_on(state, 0b0110u8));
/// ```
#[inline(always)]
pub fn flag_on<T: Integral, M: Integral>(n: &mut T, f: M) {
    let bits = n.to_unsigned() | fit::<T, M>(f).to_unsigned();
    *n = T::from_unsigned(bits);
}

/// Clear every bit of `f` in `n` (`n &= !f`).
#[inline(always)]
pub fn flag_off<T: Integral, M: Integral>(n: &mut T, f: M) {
    let bits = n.to_unsigned() & !fit::<T, M>(f).to_unsigned();
    *n = T::from_unsigned(bits);
}

/// Flip every bit of `f` in `n` (`n ^= f`).
#[inline(always)]
pub fn flag_toggle<T: Integral, M: Integral>(n: &mut T, f: M) {
    let bits = n.to_unsigned() ^ fit::<T, M>(f).to_unsigned();
    *n = T::from_unsigned(bits);
}

/// Returns `true` if at least one bit of `f` is set in `n`.
#[inline(always)]
pub fn flag_is_on<T: Integral, M: Integral>(n: T, f: M) -> bool {
    let f = fit::<T, M>(f).to_unsigned();
    (n.to_unsigned() & f) != <T::Unsigned as UnsignedBits>::ZERO
}

/// Returns `true` if every bit of `f` is set in `n`.
///
/// The check runs against `f` after narrowing to `T`'s width.
#[inline(always)]
pub fn flags_are_on<T: Integral, M: Integral>(n: T, f: M) -> bool {
    let f = fit::<T, M>(f).to_unsigned();
    (n.to_unsigned() & f) == f
}
