// Character-class predicates shared across the crate.

/// Han ideograph as understood by the dictionaries: the CJK Unified
/// Ideographs block U+4E00..=U+9FA5, plus `〇` (U+3007), the ideographic
/// zero that sits outside the block but is conventionally a Han numeral.
#[inline(always)]
pub const fn is_han(c: char) -> bool {
    let cp = c as u32;

    // Early exit: most non-CJK text never enters this range.
    if cp < 0x3007 || cp > 0x9FA5 {
        return false;
    }

    matches!(cp, 0x4E00..=0x9FA5 | 0x3007)
}

/// True if `text` contains at least one Han character.
#[inline]
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}
