//! Unit tests for prav-bits pow2 module.
//!
//! Tests cover: is_pow2, log2_int, log2_int_round_up, round_to_next_pow2,
//! bit and is_divisible_by_pow2, plus their `const` twins.

#[cfg(test)]
mod tests {
    use crate::common;
    use prav_bits::pow2::{
        is_pow2_usize, log2_int_round_up_u64, round_to_next_pow2_u64, round_to_next_pow2_usize,
    };
    use prav_bits::{
        bit, is_divisible_by_pow2, is_pow2, log2_int, log2_int_round_up, round_to_next_pow2,
    };

    // =========================================================================
    // is_pow2
    // =========================================================================

    #[test]
    fn test_is_pow2_zero_is_false() {
        assert!(!is_pow2(0u8));
        assert!(!is_pow2(0u64));
        assert!(!is_pow2_usize(0));
    }

    #[test]
    fn test_is_pow2_exactly_powers() {
        let powers: Vec<u32> = (0..32).map(|i| 1u32 << i).collect();
        for x in 0u32..=70_000 {
            assert_eq!(is_pow2(x), powers.contains(&x), "x={}", x);
        }
        for p in common::pow2s() {
            assert!(is_pow2(p));
        }
        assert!(!is_pow2(u64::MAX));
    }

    // =========================================================================
    // log2_int / log2_int_round_up
    // =========================================================================

    #[test]
    fn test_log2_int_round_up_table() {
        let table: [(u32, u32); 9] = [
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 2),
            (4, 3),
            (7, 3),
            (8, 4),
            (1023, 10),
            (1024, 11),
        ];
        for (x, bits) in table {
            assert_eq!(log2_int_round_up(x), bits, "x={}", x);
            assert_eq!(log2_int_round_up_u64(x as u64), bits, "x={}", x);
        }
    }

    #[test]
    fn test_log2_int_round_up_is_bit_length() {
        for x in 0u64..=5000 {
            assert_eq!(log2_int_round_up(x), 64 - x.leading_zeros(), "x={}", x);
        }
    }

    #[test]
    fn test_log2_int_floor() {
        assert_eq!(log2_int(1u32), 0);
        assert_eq!(log2_int(2u32), 1);
        assert_eq!(log2_int(3u32), 1);
        assert_eq!(log2_int(1000u32), 9);
        assert_eq!(log2_int(u16::MAX), 15);
        for p in common::pow2s() {
            assert_eq!(log2_int(p), p.trailing_zeros());
        }
    }

    // =========================================================================
    // round_to_next_pow2
    // =========================================================================

    #[test]
    fn test_round_to_next_pow2_zero_stays_zero() {
        assert_eq!(round_to_next_pow2(0u8), 0);
        assert_eq!(round_to_next_pow2(0u64), 0);
        assert_eq!(round_to_next_pow2_usize(0), 0);
    }

    #[test]
    fn test_round_to_next_pow2_against_reference() {
        for x in 1u64..=100_000 {
            let expected = common::naive_next_pow2(x);
            assert_eq!(round_to_next_pow2(x), expected, "x={}", x);
            assert_eq!(round_to_next_pow2(x as u32) as u64, expected, "x={}", x);
            assert_eq!(round_to_next_pow2_u64(x), expected, "x={}", x);
        }
    }

    #[test]
    fn test_round_to_next_pow2_top_of_range() {
        assert_eq!(round_to_next_pow2(1u64 << 63), 1 << 63);
        assert_eq!(round_to_next_pow2((1u64 << 63) + 1), 0);
        assert_eq!(round_to_next_pow2(u32::MAX), 0);
    }

    // =========================================================================
    // Signed inputs
    // =========================================================================

    #[test]
    fn test_is_pow2_signed() {
        assert!(is_pow2(64i32));
        assert!(is_pow2(1i8));
        assert!(is_pow2(1i64 << 62));
        assert!(!is_pow2(0i32));
        assert!(!is_pow2(-64i32));
        // Sign bit alone: one bit set, but negative.
        assert!(!is_pow2(i32::MIN));
        assert!(!is_pow2(isize::MIN));
    }

    #[test]
    fn test_round_to_next_pow2_signed() {
        assert_eq!(round_to_next_pow2(5i32), 8);
        assert_eq!(round_to_next_pow2(1000i16), 1024);
        assert_eq!(round_to_next_pow2(0i32), 0);
        assert_eq!(round_to_next_pow2(-5i32), 0);
        assert_eq!(round_to_next_pow2(i32::MIN), 0);
        assert_eq!(round_to_next_pow2(1i32 << 30), 1 << 30);
        assert_eq!(round_to_next_pow2((1i32 << 30) + 1), 0);
    }

    #[test]
    fn test_log2_signed() {
        assert_eq!(log2_int(1000i32), 9);
        assert_eq!(log2_int(-1000i32), 0);
        assert_eq!(log2_int_round_up(i64::MAX), 63);
        assert_eq!(log2_int_round_up(-1i64), 0);
    }

    // =========================================================================
    // bit / is_divisible_by_pow2
    // =========================================================================

    #[test]
    fn test_bit_builds_single_bit_masks() {
        for n in 0..64 {
            assert_eq!(bit::<u64>(n), 1u64 << n);
        }
        assert_eq!(bit::<i8>(7), i8::MIN);
    }

    #[test]
    fn test_is_divisible_by_pow2_examples() {
        assert!(is_divisible_by_pow2(24u32, 3));
        assert!(!is_divisible_by_pow2(24u32, 4));
        assert!(is_divisible_by_pow2(0u8, 7));
        assert!(is_divisible_by_pow2(-8i32, 3));
        assert!(!is_divisible_by_pow2(-8i32, 4));
    }

    #[test]
    fn test_is_divisible_by_one_always() {
        for n in [0u64, 1, 3, 17, u64::MAX] {
            assert!(is_divisible_by_pow2(n, 0), "n={}", n);
        }
    }

    #[test]
    fn test_const_forms_in_const_context() {
        const SLOTS: u64 = round_to_next_pow2_u64(1000);
        const BITS: u32 = log2_int_round_up_u64(SLOTS);
        const ALIGNED: bool = is_pow2_usize(4096);
        assert_eq!(SLOTS, 1024);
        assert_eq!(BITS, 11);
        assert!(ALIGNED);
    }
}
