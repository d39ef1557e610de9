//! Unit tests for prav-bits flags module.

#[cfg(test)]
mod tests {
    use prav_bits::{flag_is_on, flag_off, flag_on, flag_toggle, flags_are_on};

    const DIRTY: u8 = 0b0000_0001;
    const PINNED: u8 = 0b0000_0010;
    const EVICTING: u8 = 0b1000_0000;

    #[test]
    fn test_on_then_is_on() {
        let mut state = 0u8;
        flag_on(&mut state, DIRTY);
        assert!(flag_is_on(state, DIRTY));
        assert!(!flag_is_on(state, PINNED));
    }

    #[test]
    fn test_off_then_not_on() {
        let mut state = DIRTY | PINNED | EVICTING;
        flag_off(&mut state, PINNED | EVICTING);
        assert_eq!(state, DIRTY);
        assert!(!flag_is_on(state, PINNED | EVICTING));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original = 0b1010_0110u8;
        let mut state = original;
        flag_toggle(&mut state, 0b0110_0011u8);
        assert_ne!(state, original);
        flag_toggle(&mut state, 0b0110_0011u8);
        assert_eq!(state, original);
    }

    #[test]
    fn test_any_versus_all() {
        let state = DIRTY | EVICTING;
        assert!(flag_is_on(state, DIRTY | PINNED));
        assert!(!flags_are_on(state, DIRTY | PINNED));
        assert!(flags_are_on(state, DIRTY | EVICTING));
    }

    #[test]
    fn test_mask_of_another_width() {
        let mut word = 0u64;
        flag_on(&mut word, 0x8000_0000u32);
        flag_on(&mut word, 1u8);
        assert_eq!(word, 0x8000_0001);

        let mut byte = 0xFFu8;
        flag_off(&mut byte, 0xFF0Fu16);
        assert_eq!(byte, 0xF0);
    }

    #[test]
    fn test_high_bit_of_wide_word() {
        let mut word = 0u64;
        flag_on(&mut word, 1u64 << 63);
        assert!(flag_is_on(word, 1u64 << 63));
        assert!(flags_are_on(word, 1u64 << 63));
        flag_toggle(&mut word, 1u64 << 63);
        assert_eq!(word, 0);
    }
}
