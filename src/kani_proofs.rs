//! Kani formal verification proofs for the bit primitives.
//!
//! These proofs check that the two bit-scan backends are interchangeable and
//! that the alignment, power-of-two and flag helpers keep their contracts over
//! the full input space.
//!
//! Run with: `cargo kani` (or `cargo xtask kani`)

use crate::intrinsics::{blsr, native, portable};
use crate::align::{align_down, align_up};
use crate::flags::{flag_is_on, flag_off, flag_on, flag_toggle};
use crate::pow2::{is_pow2, round_to_next_pow2};

// ============================================================================
// Proof 1: Backends agree on 32-bit scans
// ============================================================================
// What: native and portable ctz32/clz32/popcnt32 return the same value
// Why: the `portable` feature must never change observable results

#[kani::proof]
fn verify_scan32_backends_agree() {
    let x: u32 = kani::any();

    kani::assert(native::ctz32(x) == portable::ctz32(x), "ctz32 backends differ");
    kani::assert(native::clz32(x) == portable::clz32(x), "clz32 backends differ");
    kani::assert(
        native::popcnt32(x) == portable::popcnt32(x),
        "popcnt32 backends differ",
    );
}

// ============================================================================
// Proof 2: Backends agree on 64-bit scans
// ============================================================================

#[kani::proof]
fn verify_scan64_backends_agree() {
    let x: u64 = kani::any();

    kani::assert(native::ctz64(x) == portable::ctz64(x), "ctz64 backends differ");
    kani::assert(native::clz64(x) == portable::clz64(x), "clz64 backends differ");
    kani::assert(
        native::popcnt64(x) == portable::popcnt64(x),
        "popcnt64 backends differ",
    );
}

// ============================================================================
// Proof 3: ctz64 finds the lowest set bit
// ============================================================================
// What: for x != 0, bit ctz64(x) is set and every bit below it is clear
// Why: `while m != 0 { i = ctz64(m); m = blsr(m); }` relies on it

#[kani::proof]
fn verify_ctz64_lowest_set_bit() {
    let x: u64 = kani::any();
    kani::assume(x != 0);

    let tz = portable::ctz64(x);

    kani::assert(tz < 64, "ctz64 must be < 64 for non-zero input");
    kani::assert((x & (1u64 << tz)) != 0, "bit at ctz64 position must be set");
    kani::assert(
        tz == 0 || (x & ((1u64 << tz) - 1)) == 0,
        "bits below ctz64 must be clear",
    );
}

// ============================================================================
// Proof 4: blsr clears exactly one bit
// ============================================================================

#[kani::proof]
fn verify_blsr_clears_one_bit() {
    let x: u64 = kani::any();
    kani::assume(x != 0);

    let result = blsr(x);

    kani::assert(
        result.count_ones() == x.count_ones() - 1,
        "blsr must clear exactly one bit",
    );
    kani::assert(
        result & (1u64 << x.trailing_zeros()) == 0,
        "blsr must clear the lowest bit",
    );
}

// ============================================================================
// Proof 5: is_pow2 means exactly one bit
// ============================================================================

#[kani::proof]
fn verify_is_pow2_single_bit() {
    let x: u64 = kani::any();

    kani::assert(is_pow2(x) == (x.count_ones() == 1), "is_pow2 must mean one set bit");
}

#[kani::proof]
fn verify_is_pow2_signed_positive_single_bit() {
    let x: i32 = kani::any();

    kani::assert(
        is_pow2(x) == (x > 0 && x.count_ones() == 1),
        "signed is_pow2 must mean positive with one set bit",
    );
}

// ============================================================================
// Proof 6: round_to_next_pow2 is the smallest covering power of two
// ============================================================================
// What: for 0 < x <= 2^31 the result is a power of two >= x and half of it < x
// Why: table and allocator sizing depend on the bound being tight

#[kani::proof]
fn verify_round_to_next_pow2_tight() {
    let x: u32 = kani::any();
    kani::assume(x > 0 && x <= 1 << 31);

    let p = round_to_next_pow2(x);

    kani::assert(p.count_ones() == 1, "result must be a power of two");
    kani::assert(p >= x, "result must cover x");
    kani::assert(p / 2 < x, "result must be the smallest cover");
}

// ============================================================================
// Proof 7: Alignment bounds
// ============================================================================
// What: align_down(x, a) <= x <= align_up(x, a), both multiples of a, each
//       less than a away from x
// Why: allocator headers are placed with these helpers

#[kani::proof]
fn verify_alignment_bounds() {
    let x: u32 = kani::any();
    let shift: u32 = kani::any();
    kani::assume(shift < 16);
    kani::assume(x <= u32::MAX - (1 << 16));
    let a = 1u32 << shift;

    let up = align_up(x, a);
    let down = align_down(x, a);

    kani::assert(down <= x && x <= up, "x must lie between the bounds");
    kani::assert(up % a == 0 && down % a == 0, "bounds must be multiples of a");
    kani::assert(up - x < a && x - down < a, "bounds must be within one step of x");
    kani::assert(up == down || up - down == a, "bounds must be equal or one step apart");
}

// ============================================================================
// Proof 8: Flag laws
// ============================================================================

#[kani::proof]
fn verify_flag_laws() {
    let n: u16 = kani::any();
    let f: u16 = kani::any();
    kani::assume(f != 0);

    let mut on = n;
    flag_on(&mut on, f);
    kani::assert(flag_is_on(on, f), "flag_on must set the mask");

    let mut off = n;
    flag_off(&mut off, f);
    kani::assert(!flag_is_on(off, f), "flag_off must clear the mask");

    let mut toggled = n;
    flag_toggle(&mut toggled, f);
    flag_toggle(&mut toggled, f);
    kani::assert(toggled == n, "double toggle must restore the value");
}
