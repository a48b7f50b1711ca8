//! Flag-value helpers for generating members of bit-flag enumerations.

/// `true` for `0` and for values with exactly one bit set.
pub fn is_zero_or_power_of_two(value: u64) -> bool {
    value & value.wrapping_sub(1) == 0
}

/// Find a power of two that is not in `reserved` and fits in `bit_width`
/// bits.
///
/// By default the lowest unused power of two is returned. With
/// `start_from_highest`, the search continues upward from the highest
/// reserved power of two, so new flags are appended after existing ones
/// instead of filling gaps. Returns `None` when the width is exhausted.
///
/// ```
/// use syster_select::flags::unique_power_of_two;
///
/// assert_eq!(unique_power_of_two(&[0, 1, 2, 8], 32, false), Some(4));
/// assert_eq!(unique_power_of_two(&[0, 1, 2, 8], 32, true), Some(16));
/// assert_eq!(unique_power_of_two(&[1, 2, 4, 8], 4, false), None);
/// ```
pub fn unique_power_of_two(reserved: &[u64], bit_width: u32, start_from_highest: bool) -> Option<u64> {
    let bit_width = bit_width.min(u64::BITS);

    let start_bit = if start_from_highest {
        reserved
            .iter()
            .filter(|&&value| value != 0 && is_zero_or_power_of_two(value))
            .map(|value| value.trailing_zeros() + 1)
            .max()
            .unwrap_or(0)
    } else {
        0
    };

    (start_bit..bit_width)
        .map(|bit| 1u64 << bit)
        .find(|value| !reserved.contains(value))
}
