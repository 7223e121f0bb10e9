//! Repeat-count letters of the ZPL hex compression scheme.
//!
//! | Letters | Counts |
//! |---------|--------|
//! | `G` `H` … `Y` | 1, 2 … 19 |
//! | `g` `h` … `z` | 20, 40 … 400 |
//!
//! Letters are additive: `hK` is 40 + 5 = 45 repetitions of the digit that
//! follows, and `zzG` is 801.

/// Largest count a single letter can express.
pub const MAX_LETTER_COUNT: usize = 400;

/// Letter for `count`, if one letter expresses it exactly.
pub fn count_letter(count: usize) -> Option<char> {
    match count {
        1..=19 => Some(char::from(b'G' + (count - 1) as u8)),
        20..=MAX_LETTER_COUNT if count % 20 == 0 => Some(char::from(b'g' + (count / 20 - 1) as u8)),
        _ => None,
    }
}

/// Count expressed by a repeat letter, or `None` for any other character.
pub fn letter_count(letter: char) -> Option<usize> {
    match letter {
        'G'..='Y' => Some(letter as usize - 'G' as usize + 1),
        'g'..='z' => Some((letter as usize - 'g' as usize + 1) * 20),
        _ => None,
    }
}

/// Append the letters for `count` (without the repeated digit).
///
/// Counts above 400 emit one `z` per 400; the rest is the largest multiple of
/// 20 followed by the remainder, so every count in `1..=400` is one letter or
/// a pair. A count of zero appends nothing.
pub fn push_count(out: &mut String, count: usize) {
    let mut remaining = count;
    while remaining > MAX_LETTER_COUNT {
        out.push('z');
        remaining -= MAX_LETTER_COUNT;
    }
    if remaining == 0 {
        return;
    }
    if let Some(letter) = count_letter(remaining) {
        out.push(letter);
        return;
    }
    // 21..=399, not a multiple of 20
    let tens = remaining / 20 * 20;
    for part in [tens, remaining - tens] {
        if let Some(letter) = count_letter(part) {
            out.push(letter);
        }
    }
}

/// Letters for `count` as a new string.
pub fn count_prefix(count: usize) -> String {
    let mut out = String::new();
    push_count(&mut out, count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(prefix: &str) -> Option<usize> {
        prefix.chars().map(letter_count).sum()
    }

    #[test]
    fn test_single_letters() {
        assert_eq!(count_letter(1), Some('G'));
        assert_eq!(count_letter(19), Some('Y'));
        assert_eq!(count_letter(20), Some('g'));
        assert_eq!(count_letter(40), Some('h'));
        assert_eq!(count_letter(400), Some('z'));
        assert_eq!(count_letter(0), None);
        assert_eq!(count_letter(21), None);
        assert_eq!(count_letter(420), None);
    }

    #[test]
    fn test_letter_count_inverse() {
        for count in 1..=MAX_LETTER_COUNT {
            if let Some(letter) = count_letter(count) {
                assert_eq!(letter_count(letter), Some(count));
            }
        }
        assert_eq!(letter_count('F'), None);
        assert_eq!(letter_count('Z'), None);
        assert_eq!(letter_count('a'), None);
        assert_eq!(letter_count(','), None);
    }

    #[test]
    fn test_every_count_up_to_400_is_one_or_two_letters() {
        let mut seen = std::collections::HashSet::new();
        for count in 1..=MAX_LETTER_COUNT {
            let prefix = count_prefix(count);
            let len = prefix.chars().count();
            assert!(len == 1 || len == 2, "count {} -> {:?}", count, prefix);
            assert_eq!(sum(&prefix), Some(count), "count {} -> {:?}", count, prefix);
            assert!(seen.insert(prefix), "collision at {}", count);
        }
    }

    #[test]
    fn test_twenty_is_single_letter() {
        assert_eq!(count_prefix(20), "g");
        assert_eq!(count_prefix(19), "Y");
        assert_eq!(count_prefix(21), "gG");
    }

    #[test]
    fn test_above_400_decomposes() {
        assert_eq!(count_prefix(401), "zG");
        assert_eq!(count_prefix(800), "zz");
        assert_eq!(count_prefix(845), "zzhK");
        assert_eq!(sum(&count_prefix(1234)), Some(1234));
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(count_prefix(0), "");
    }
}
