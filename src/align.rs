// =============================================================================
// Alignment Primitives
// =============================================================================
//
// Round addresses up or down to a power-of-two boundary and test alignment.
// Integer operands are processed in their same-size unsigned view so signed
// inputs behave like their two's-complement bits. Pointer operands go through
// their address and come back with the same pointee type and provenance.
//
// The boundary must be a power of two. Debug builds assert it; release builds
// do not check. Rounding past the top of the type wraps.

use crate::pow2::is_pow2_u64;
use crate::width::{Integral, UnsignedBits};

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// Integer Alignment
// =============================================================================

/// Round `address` up to the next multiple of `align_to`.
///
/// ```
/// use prav_bits::align_up;
///
/// assert_eq!(align_up(13u64, 8), 16);
/// assert_eq!(align_up(16u64, 8), 16);
/// assert_eq!(align_up(-13i32, 8), -8);
/// ```
#[inline(always)]
pub fn align_up<T: Integral>(address: T, align_to: T) -> T {
    let mask = boundary_mask(align_to);
    T::from_unsigned(address.to_unsigned().wrapping_add(mask) & !mask)
}

/// Round `address` down to the previous multiple of `align_to`.
///
/// ```
/// use prav_bits::align_down;
///
/// assert_eq!(align_down(13u64, 8), 8);
/// assert_eq!(align_down(-13i32, 8), -16);
/// ```
#[inline(always)]
pub fn align_down<T: Integral>(address: T, align_to: T) -> T {
    let mask = boundary_mask(align_to);
    T::from_unsigned(address.to_unsigned() & !mask)
}

/// Returns `true` if `address` is a multiple of `align_to`.
#[inline(always)]
pub fn is_aligned<T: Integral>(address: T, align_to: T) -> bool {
    (address.to_unsigned() & boundary_mask(align_to)) == <T::Unsigned as UnsignedBits>::ZERO
}

/// `align_to - 1` in the unsigned view.
#[inline(always)]
fn boundary_mask<T: Integral>(align_to: T) -> T::Unsigned {
    let align = align_to.to_unsigned();
    debug_assert!(
        is_pow2_u64(align.to_u64()),
        "alignment {:?} is not a power of two",
        align_to
    );
    align.wrapping_sub(<T::Unsigned as UnsignedBits>::ONE)
}

// =============================================================================
// Pointer Alignment
// =============================================================================

/// Raw pointers that can be aligned through their address.
///
/// Implemented for `*const T` and `*mut T`. Sealed.
pub trait Pointer: Copy + sealed::Sealed {
    /// Address part of the pointer.
    fn addr(self) -> usize;

    /// Same pointer with its address replaced by `f(addr)`.
    fn map_addr(self, f: impl FnOnce(usize) -> usize) -> Self;
}

impl<T> sealed::Sealed for *const T {}
impl<T> sealed::Sealed for *mut T {}

impl<T> Pointer for *const T {
    #[inline(always)]
    fn addr(self) -> usize {
        <*const T>::addr(self)
    }

    #[inline(always)]
    fn map_addr(self, f: impl FnOnce(usize) -> usize) -> Self {
        <*const T>::map_addr(self, f)
    }
}

impl<T> Pointer for *mut T {
    #[inline(always)]
    fn addr(self) -> usize {
        <*mut T>::addr(self)
    }

    #[inline(always)]
    fn map_addr(self, f: impl FnOnce(usize) -> usize) -> Self {
        <*mut T>::map_addr(self, f)
    }
}

/// Round a pointer's address up to a multiple of `align_to`.
///
/// The pointee type and provenance are preserved; the result is only
/// dereferenceable if it still lies inside the original allocation.
///
/// ```
/// use prav_bits::align_ptr_up;
///
/// let buf = [0u8; 64];
/// let p = buf.as_ptr().wrapping_add(3);
/// let q = align_ptr_up(p, 16);
/// assert_eq!(q as usize % 16, 0);
/// assert!(q >= p && (q as usize - p as usize) < 16);
/// ```
#[inline(always)]
pub fn align_ptr_up<P: Pointer>(ptr: P, align_to: usize) -> P {
    ptr.map_addr(|a| align_up(a, align_to))
}

/// Round a pointer's address down to a multiple of `align_to`.
#[inline(always)]
pub fn align_ptr_down<P: Pointer>(ptr: P, align_to: usize) -> P {
    ptr.map_addr(|a| align_down(a, align_to))
}

/// Returns `true` if the pointer's address is a multiple of `align_to`.
#[inline(always)]
pub fn is_ptr_aligned<P: Pointer>(ptr: P, align_to: usize) -> bool {
    is_aligned(ptr.addr(), align_to)
}

// =============================================================================
// Const API (allocator hot types)
// =============================================================================

macro_rules! const_align {
    ($($t:ty => $up:ident, $down:ident, $is:ident;)*) => {
        $(
            #[doc = concat!("`const` form of [`align_up`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $up(address: $t, align_to: $t) -> $t {
                debug_assert!(align_to != 0 && align_to & (align_to - 1) == 0);
                address.wrapping_add(align_to.wrapping_sub(1)) & !align_to.wrapping_sub(1)
            }

            #[doc = concat!("`const` form of [`align_down`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $down(address: $t, align_to: $t) -> $t {
                debug_assert!(align_to != 0 && align_to & (align_to - 1) == 0);
                address & !align_to.wrapping_sub(1)
            }

            #[doc = concat!("`const` form of [`is_aligned`] for `", stringify!($t), "`.")]
            #[inline(always)]
            pub const fn $is(address: $t, align_to: $t) -> bool {
                address & align_to.wrapping_sub(1) == 0
            }
        )*
    };
}

const_align! {
    u64 => align_up_u64, align_down_u64, is_aligned_u64;
    usize => align_up_usize, align_down_usize, is_aligned_usize;
}
