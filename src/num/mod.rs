//! Integer rounding helpers.

/// Rounds `value` up to the nearest multiple of `multiple`.
///
/// A value already on a multiple comes back unchanged.
///
/// # Panics
///
/// Panics if `multiple` is zero.
///
/// # Example
///
/// ```
/// use sniffrs::num::round_up;
///
/// assert_eq!(round_up(150, 10), 150);
/// assert_eq!(round_up(151, 10), 160);
/// ```
pub fn round_up(value: i32, multiple: i32) -> i32 {
    let rem = value % multiple;
    if rem == 0 { value } else { value + (multiple - rem) }
}

/// Rounds `value` down to the nearest multiple of `multiple`.
///
/// # Panics
///
/// Panics if `multiple` is zero.
///
/// # Example
///
/// ```
/// use sniffrs::num::round_down;
///
/// assert_eq!(round_down(150, 10), 150);
/// assert_eq!(round_down(151, 10), 150);
/// ```
pub fn round_down(value: i32, multiple: i32) -> i32 {
    value - value % multiple
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_between_multiples() {
        assert_eq!(round_up(151, 10), 160);
        assert_eq!(round_up(159, 10), 160);
        assert_eq!(round_up(3, 10), 10);
    }

    #[test]
    fn test_round_up_on_a_multiple() {
        assert_eq!(round_up(150, 10), 150);
        assert_eq!(round_up(0, 10), 0);
    }

    #[test]
    fn test_round_down_between_multiples() {
        assert_eq!(round_down(151, 10), 150);
        assert_eq!(round_down(159, 10), 150);
        assert_eq!(round_down(3, 10), 0);
    }

    #[test]
    fn test_round_down_on_a_multiple() {
        assert_eq!(round_down(150, 10), 150);
        assert_eq!(round_down(0, 10), 0);
    }

    #[test]
    fn test_other_multiples() {
        assert_eq!(round_up(7, 4), 8);
        assert_eq!(round_down(7, 4), 4);
        assert_eq!(round_up(100, 7), 105);
        assert_eq!(round_down(100, 7), 98);
    }
}
