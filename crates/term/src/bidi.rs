//! Display order for right-to-left words.
//!
//! Most terminal emulators print characters in logical order, left to right,
//! which shows Hebrew words back to front. Words containing Hebrew are
//! reversed before drawing unless the terminal applies bidi itself.

use std::borrow::Cow;

/// `s` in left-to-right display order.
pub fn display_order(s: &str, reverse_rtl: bool) -> Cow<'_, str> {
    if reverse_rtl && s.chars().any(is_rtl) {
        Cow::Owned(s.chars().rev().collect())
    } else {
        Cow::Borrowed(s)
    }
}

fn is_rtl(ch: char) -> bool {
    matches!(ch as u32, 0x05D0..=0x05EA | 0x05F0..=0x05F4 | 0xFB1D..=0xFB4F)
}
