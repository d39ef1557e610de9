//! Property-based tests for prav-bits pow2 module.

use proptest::prelude::*;

use crate::common;

proptest! {
    #[test]
    fn prop_is_pow2_means_one_bit(x in any::<u64>()) {
        use prav_bits::is_pow2;

        prop_assert_eq!(is_pow2(x), x.count_ones() == 1);
    }

    #[test]
    fn prop_round_to_next_pow2_matches_reference(x in 1u64..=(1u64 << 63)) {
        use prav_bits::round_to_next_pow2;

        prop_assert_eq!(round_to_next_pow2(x), common::naive_next_pow2(x));
    }

    #[test]
    fn prop_round_to_next_pow2_fixes_powers(shift in 0u32..32) {
        use prav_bits::round_to_next_pow2;

        let p = 1u32 << shift;
        prop_assert_eq!(round_to_next_pow2(p), p);
    }

    #[test]
    fn prop_log2_brackets_value(x in 1u64..=u64::MAX) {
        use prav_bits::log2_int;

        let k = log2_int(x);
        prop_assert!(1u64 << k <= x);
        prop_assert!(k == 63 || x < 1u64 << (k + 1));
    }

    #[test]
    fn prop_log2_round_up_is_one_more(x in 1u32..=u32::MAX) {
        use prav_bits::{log2_int, log2_int_round_up};

        prop_assert_eq!(log2_int_round_up(x), log2_int(x) + 1);
    }

    #[test]
    fn prop_divisibility_matches_remainder(n in any::<u64>(), x in 0u32..64) {
        use prav_bits::is_divisible_by_pow2;

        prop_assert_eq!(is_divisible_by_pow2(n, x), n % (1u64 << x) == 0);
    }

    #[test]
    fn prop_signed_agrees_with_unsigned_on_non_negatives(x in 0i64..=i64::MAX) {
        use prav_bits::{is_pow2, log2_int, log2_int_round_up, round_to_next_pow2};

        let u = x as u64;
        prop_assert_eq!(is_pow2(x), is_pow2(u));
        prop_assert_eq!(log2_int(x), log2_int(u));
        prop_assert_eq!(log2_int_round_up(x), log2_int_round_up(u));
        if u <= 1 << 62 {
            prop_assert_eq!(round_to_next_pow2(x) as u64, round_to_next_pow2(u));
        } else {
            prop_assert_eq!(round_to_next_pow2(x), 0);
        }
    }

    #[test]
    fn prop_negatives_are_never_pow2(x in i64::MIN..0i64) {
        use prav_bits::{is_pow2, round_to_next_pow2};

        prop_assert!(!is_pow2(x));
        prop_assert_eq!(round_to_next_pow2(x), 0);
    }
}
