//! # prav-bits: Bit-Level Numeric Primitives
//!
//! `prav-bits` is a `no_std`, zero-allocation collection of the small integer
//! tricks that allocators, hash tables, serializers and decoders keep
//! re-deriving: alignment, power-of-two math, bit flags, bit scans and an
//! integer hash finalizer.
//!
//! ## Overview
//!
//! Every operation is a pure function of its operands (the flag mutators write
//! through one `&mut` owned by the caller). Nothing allocates, blocks or keeps
//! state, so everything here is safe to call from any thread on disjoint data.
//!
//! Contract violations come in two kinds:
//!
//! 1. **Type-level** - a byte width outside `1..=8`, hashing a 1- or 2-byte
//!    integer, aligning a non-integer. These do not compile: the sealed traits
//!    in [`width`] and [`hash`] simply have no impl for them.
//! 2. **Value-level** - a non-power-of-two alignment or an out-of-range shift.
//!    The result is unspecified; debug builds catch them with `debug_assert!`,
//!    release builds pay nothing.
//!
//! ## Quick Start
//!
//! ```
//! use prav_bits::{align_up, ctz64, flag_on, flag_is_on, is_pow2, murmur3_finalize};
//!
//! assert_eq!(align_up(13u64, 8), 16);
//! assert!(is_pow2(64u32));
//! assert_eq!(ctz64(0), 64);
//!
//! let mut state = 0u16;
//! flag_on(&mut state, 0b100u8);
//! assert!(flag_is_on(state, 0b110u8));
//!
//! let h = murmur3_finalize(42u64);
//! assert_eq!(h, murmur3_finalize(42u64));
//! ```
//!
//! ## Module Organization
//!
//! - [`width`] - Byte-count to integer-type selection and the sealed integer traits
//! - [`intrinsics`] - Trailing/leading zero counts and population count
//! - [`pow2`] - Power-of-two tests, logarithms, rounding and divisibility
//! - [`align`] - Address alignment for integers and pointers
//! - [`flags`] - Bit-flag set/clear/toggle/test
//! - [`hash`] - MurmurHash3 integer finalizer
//!
//! ## Backend Selection
//!
//! The crate-root bit scans use the native count instructions by default.
//! Enabling the `portable` feature switches them to the branch-free SWAR
//! fallback. Both backends are always compiled and reachable as
//! [`intrinsics::native`] and [`intrinsics::portable`].

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Size-to-type selection and sealed integer traits.
pub mod width;

/// Bit scans: ctz, clz, popcount (native and portable backends).
pub mod intrinsics;

/// Power-of-two math and divisibility.
pub mod pow2;

/// Integer and pointer alignment.
pub mod align;

/// Bit-flag manipulation on caller-owned integers.
pub mod flags;

/// MurmurHash3 integer finalizer.
pub mod hash;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Type selection
pub use width::{ByteWidth, Bytes, IntOf, IntOfBytes, Integral, UintOf, UintOfBytes, UnsignedBits};

// Bit scans (backend chosen by the `portable` feature)
pub use intrinsics::{blsr, clz32, clz64, ctz32, ctz64, popcnt32, popcnt64};

// Power-of-two math
pub use pow2::{
    bit, is_divisible_by_pow2, is_pow2, log2_int, log2_int_round_up, round_to_next_pow2,
};

// Alignment
pub use align::{align_down, align_ptr_down, align_ptr_up, align_up, is_aligned, is_ptr_aligned};

// Flags
pub use flags::{flag_is_on, flag_off, flag_on, flag_toggle, flags_are_on};

// Hashing
pub use hash::{fmix32, fmix64, murmur3_finalize, Murmur3};
