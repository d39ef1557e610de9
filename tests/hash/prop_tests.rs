//! Property-based tests for prav-bits hash module.

use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_signed_and_unsigned_share_bits_32(x in any::<i32>()) {
        use prav_bits::murmur3_finalize;

        prop_assert_eq!(murmur3_finalize(x) as u32, murmur3_finalize(x as u32));
    }

    #[test]
    fn prop_signed_and_unsigned_share_bits_64(x in any::<i64>()) {
        use prav_bits::murmur3_finalize;

        prop_assert_eq!(murmur3_finalize(x) as u64, murmur3_finalize(x as u64));
    }

    #[test]
    fn prop_fmix_is_injective_on_pairs(a in any::<u64>(), b in any::<u64>()) {
        use prav_bits::fmix64;

        // fmix64 is a bijection: distinct inputs never collide.
        prop_assume!(a != b);
        prop_assert_ne!(fmix64(a), fmix64(b));
    }

    #[test]
    fn prop_fmix32_nonzero_for_nonzero(x in 1u32..=u32::MAX) {
        use prav_bits::fmix32;

        // Zero is the only fixed point at zero.
        prop_assert_ne!(fmix32(x), 0);
    }
}
