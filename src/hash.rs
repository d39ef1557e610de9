// =============================================================================
// MurmurHash3 Integer Finalizer
// =============================================================================
//
// The fmix avalanche step of MurmurHash3 applied to a single 4- or 8-byte
// integer. Unseeded and stateless: a bit mixer for hash tables, not a hash
// of arbitrary data and not cryptographic.

use core::mem::size_of;

use crate::width::{ByteWidth, Bytes, Integral};

/// 32-bit MurmurHash3 finalizer (`fmix32`).
#[inline(always)]
pub const fn fmix32(h: u32) -> u32 {
    let mut h = h;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// 64-bit MurmurHash3 finalizer (`fmix64`).
#[inline(always)]
pub const fn fmix64(h: u64) -> u64 {
    let mut h = h;
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    h = h.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    h ^= h >> 33;
    h
}

// =============================================================================
// Width Dispatch
// =============================================================================

/// Byte widths that have a finalizer: only `Bytes<4>` and `Bytes<8>`.
pub trait FinalizerWidth: ByteWidth {
    /// Mix the unsigned bits of that width.
    fn finalize(h: Self::Unsigned) -> Self::Unsigned;
}

impl FinalizerWidth for Bytes<4> {
    #[inline(always)]
    fn finalize(h: u32) -> u32 {
        fmix32(h)
    }
}

impl FinalizerWidth for Bytes<8> {
    #[inline(always)]
    fn finalize(h: u64) -> u64 {
        fmix64(h)
    }
}

/// Integers the MurmurHash3 finalizer accepts.
///
/// Implemented for every 4- and 8-byte integer (`isize`/`usize` on the
/// matching pointer widths). Other widths do not compile:
///
/// ```compile_fail
/// use prav_bits::murmur3_finalize;
/// let _ = murmur3_finalize(7u16);
/// ```
pub trait Murmur3: Integral {
    /// Mix the bits of `self`.
    fn murmur3_finalize(self) -> Self;
}

macro_rules! murmur3 {
    ($($t:ty),*) => {
        $(
            impl Murmur3 for $t {
                #[inline(always)]
                fn murmur3_finalize(self) -> Self {
                    let h = <Bytes<{ size_of::<$t>() }> as FinalizerWidth>::finalize(self.to_unsigned());
                    Self::from_unsigned(h)
                }
            }
        )*
    };
}

murmur3!(u32, i32, u64, i64);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
murmur3!(usize, isize);

/// MurmurHash3 finalizer over the unsigned view of `h`, cast back to `T`.
///
/// ```
/// use prav_bits::{fmix32, murmur3_finalize};
///
/// assert_eq!(murmur3_finalize(5u32), fmix32(5));
/// assert_eq!(murmur3_finalize(-1i32) as u32, fmix32(u32::MAX));
/// ```
#[inline(always)]
pub fn murmur3_finalize<T: Murmur3>(h: T) -> T {
    h.murmur3_finalize()
}
