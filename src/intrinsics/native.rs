// =============================================================================
// Native Bit Scans
// =============================================================================
//
// Uses the BMI1/LZCNT/POPCNT instructions on x86_64 when the target enables
// them, and the compiler count builtins everywhere else. TZCNT and LZCNT
// define the zero input as the operand width, which is the sentinel this
// crate promises; the builtins agree.

#[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
use core::arch::x86_64::{_tzcnt_u32, _tzcnt_u64};

#[cfg(all(target_arch = "x86_64", target_feature = "lzcnt"))]
use core::arch::x86_64::{_lzcnt_u32, _lzcnt_u64};

#[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
use core::arch::x86_64::{_popcnt32, _popcnt64};

/// Count trailing zeros in a 32-bit value. Returns 32 for zero.
#[inline(always)]
pub fn ctz32(x: u32) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
    unsafe {
        _tzcnt_u32(x)
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi1")))]
    {
        x.trailing_zeros()
    }
}

/// Count trailing zeros in a 64-bit value. Returns 64 for zero.
#[inline(always)]
pub fn ctz64(x: u64) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi1"))]
    unsafe {
        _tzcnt_u64(x) as u32
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "bmi1")))]
    {
        x.trailing_zeros()
    }
}

/// Count leading zeros in a 32-bit value. Returns 32 for zero.
#[inline(always)]
pub fn clz32(x: u32) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "lzcnt"))]
    unsafe {
        _lzcnt_u32(x)
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "lzcnt")))]
    {
        x.leading_zeros()
    }
}

/// Count leading zeros in a 64-bit value. Returns 64 for zero.
#[inline(always)]
pub fn clz64(x: u64) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "lzcnt"))]
    unsafe {
        _lzcnt_u64(x) as u32
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "lzcnt")))]
    {
        x.leading_zeros()
    }
}

/// Number of set bits in a 32-bit value.
#[inline(always)]
pub fn popcnt32(x: u32) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
    unsafe {
        _popcnt32(x as i32) as u32
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "popcnt")))]
    {
        x.count_ones()
    }
}

/// Number of set bits in a 64-bit value.
#[inline(always)]
pub fn popcnt64(x: u64) -> u32 {
    #[cfg(all(target_arch = "x86_64", target_feature = "popcnt"))]
    unsafe {
        _popcnt64(x as i64) as u32
    }
    #[cfg(not(all(target_arch = "x86_64", target_feature = "popcnt")))]
    {
        x.count_ones()
    }
}
