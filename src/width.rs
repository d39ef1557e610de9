// =============================================================================
// Size-to-Type Selection
// =============================================================================
//
// Maps a byte count to the narrowest native integer of at least that many
// bytes, and an integer type to the unsigned/signed type of the same size.
// Everything here is resolved during monomorphization; nothing exists at
// runtime.

use core::fmt::Debug;
use core::mem::size_of;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// Byte-Count Selector
// =============================================================================

/// Type-level byte count.
///
/// Only `Bytes<1>` through `Bytes<8>` implement [`ByteWidth`]; any other
/// count fails to type-check wherever a selected type is requested.
///
/// ```compile_fail
/// use prav_bits::UintOfBytes;
/// let _x: UintOfBytes<9> = 0;
/// ```
///
/// ```compile_fail
/// use prav_bits::UintOfBytes;
/// let _x: UintOfBytes<0> = 0;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bytes<const N: usize>;

/// Integer types selected for a byte count.
///
/// Widths without a native type round up: 3 bytes select the 4-byte
/// integers, 5 to 7 bytes select the 8-byte integers.
pub trait ByteWidth: sealed::Sealed {
    /// Unsigned integer of at least `N` bytes.
    type Unsigned: UnsignedBits;
    /// Signed integer of at least `N` bytes.
    type Signed: Integral<Unsigned = Self::Unsigned>;
}

macro_rules! byte_width {
    ($($n:literal => $u:ty, $i:ty;)*) => {
        $(
            impl sealed::Sealed for Bytes<$n> {}

            impl ByteWidth for Bytes<$n> {
                type Unsigned = $u;
                type Signed = $i;
            }
        )*
    };
}

byte_width! {
    1 => u8, i8;
    2 => u16, i16;
    3 => u32, i32;
    4 => u32, i32;
    5 => u64, i64;
    6 => u64, i64;
    7 => u64, i64;
    8 => u64, i64;
}

/// Narrowest unsigned integer of at least `N` bytes.
///
/// For an arbitrary concrete type use `UintOfBytes<{ size_of::<T>() }>`.
pub type UintOfBytes<const N: usize> = <Bytes<N> as ByteWidth>::Unsigned;

/// Narrowest signed integer of at least `N` bytes.
pub type IntOfBytes<const N: usize> = <Bytes<N> as ByteWidth>::Signed;

/// Unsigned integer with the same size as `T`.
///
/// `T` must be a primitive integer; for any other concrete type, such as
/// `f64` or a `#[repr(C)]` struct, use `UintOfBytes<{ size_of::<T>() }>`.
pub type UintOf<T> = <T as Integral>::Unsigned;

/// Signed integer with the same size as `T`.
///
/// Non-integer types go through `IntOfBytes<{ size_of::<T>() }>`.
pub type IntOf<T> = <T as Integral>::Signed;

// =============================================================================
// Integer Traits
// =============================================================================

/// A primitive integer of 1 to 8 bytes.
///
/// Implemented for `i8`..`i64`, `u8`..`u64`, `isize` and `usize`. Sealed.
pub trait Integral: Copy + Eq + Ord + Debug + sealed::Sealed {
    /// Width in bits.
    const BITS: u32;

    /// `true` for `i8`..`i64` and `isize`.
    const SIGNED: bool;

    /// Same-size unsigned view, picked by the byte-count selector.
    type Unsigned: UnsignedBits;

    /// Same-size signed type, picked by the byte-count selector.
    type Signed: Integral;

    /// Reinterpret the bits as the unsigned view.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Reinterpret unsigned bits as `Self`.
    fn from_unsigned(bits: Self::Unsigned) -> Self;

    /// Unsigned view zero-extended to 64 bits.
    fn to_u64(self) -> u64;

    /// Keep the low `Self::BITS` bits of `bits`.
    fn from_u64_truncating(bits: u64) -> Self;

    /// `true` iff the type is signed and the sign bit is set.
    #[inline(always)]
    fn is_negative(self) -> bool {
        Self::SIGNED
            && (self.to_unsigned() >> (Self::BITS - 1)) != <Self::Unsigned as UnsignedBits>::ZERO
    }
}

/// The unsigned views every generic operation computes in.
///
/// Exactly the selector outputs: `u8`, `u16`, `u32`, `u64`.
pub trait UnsignedBits:
    Integral<Unsigned = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// All bits clear.
    const ZERO: Self;
    /// Only bit 0 set.
    const ONE: Self;

    /// Modular addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Modular subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Left shift with the shift amount masked to the width.
    fn wrapping_shl(self, rhs: u32) -> Self;
}

macro_rules! integral {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integral for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = <$t>::MIN != 0;

                type Unsigned = UintOfBytes<{ size_of::<$t>() }>;
                type Signed = IntOfBytes<{ size_of::<$t>() }>;

                #[inline(always)]
                fn to_unsigned(self) -> Self::Unsigned {
                    self as Self::Unsigned
                }

                #[inline(always)]
                fn from_unsigned(bits: Self::Unsigned) -> Self {
                    bits as $t
                }

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self.to_unsigned() as u64
                }

                #[inline(always)]
                fn from_u64_truncating(bits: u64) -> Self {
                    bits as Self::Unsigned as $t
                }
            }
        )*
    };
}

integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! unsigned_bits {
    ($($t:ty),*) => {
        $(
            impl UnsignedBits for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_shl(self, rhs: u32) -> Self {
                    <$t>::wrapping_shl(self, rhs)
                }
            }
        )*
    };
}

unsigned_bits!(u8, u16, u32, u64);
