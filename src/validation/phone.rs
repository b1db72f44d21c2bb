//! South African phone number checks and as-you-type grouping.
//!
//! The validity check is a loose length heuristic on the digit string, not a
//! numbering-plan validator. It accepts some unassigned numbers and rejects
//! extension-style input; both are accepted limitations.

/// Local numbers: `0` followed by the area or mobile code.
const LOCAL_PREFIX: &str = "0";
/// International numbers: country code without the `+`.
const INTERNATIONAL_PREFIX: &str = "27";

const LOCAL_LENGTHS: std::ops::RangeInclusive<usize> = 9..=10;
const INTERNATIONAL_LENGTHS: std::ops::RangeInclusive<usize> = 10..=11;

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// `0…` numbers must have 9 or 10 digits, `27…` numbers 10 or 11.
pub fn is_valid_phone(raw: &str) -> bool {
    let digits = strip_non_digits(raw);

    if digits.starts_with(LOCAL_PREFIX) {
        LOCAL_LENGTHS.contains(&digits.len())
    } else if digits.starts_with(INTERNATIONAL_PREFIX) {
        INTERNATIONAL_LENGTHS.contains(&digits.len())
    } else {
        false
    }
}

/// Groups the digits of `raw` for display.
///
/// * `0…`  -> `XXX XXX XXXX`, truncated to 10 digits
/// * `27…` -> `XX XXX XXX XXX`, truncated to 11 digits
/// * anything else -> the bare digits
pub fn format_phone(raw: &str) -> String {
    let digits = strip_non_digits(raw);

    if digits.starts_with(LOCAL_PREFIX) {
        group(&digits, &[3, 3, 4])
    } else if digits.starts_with(INTERNATIONAL_PREFIX) {
        group(&digits, &[2, 3, 3, 3])
    } else {
        digits
    }
}

/// Splits `digits` into consecutive groups of the given widths, joined by a
/// single space. Digits past the last group are dropped.
fn group(digits: &str, widths: &[usize]) -> String {
    let mut groups: Vec<&str> = Vec::with_capacity(widths.len());
    let mut start = 0;
    for width in widths {
        if start >= digits.len() {
            break;
        }
        let end = (start + width).min(digits.len());
        groups.push(&digits[start..end]);
        start = end;
    }
    groups.join(" ")
}

/// A key press on the phone input, in browser `keyCode` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key_code: u32,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyPress {
    pub fn plain(key_code: u32) -> Self {
        Self {
            key_code,
            ctrl: false,
            shift: false,
        }
    }
}

const KEY_BACKSPACE: u32 = 8;
const KEY_TAB: u32 = 9;
const KEY_ENTER: u32 = 13;
const KEY_ESCAPE: u32 = 27;
const KEY_DELETE: u32 = 46;
const KEY_A: u32 = 65;
const NAVIGATION_KEYS: std::ops::RangeInclusive<u32> = 35..=39; // end, home, arrows
const DIGIT_KEYS: std::ops::RangeInclusive<u32> = 48..=57;
const NUMPAD_KEYS: std::ops::RangeInclusive<u32> = 96..=105;

/// Input mask for the phone field: editing and navigation keys pass, as do
/// digits. Everything else should be suppressed by the host.
pub fn is_allowed_phone_key(key: KeyPress) -> bool {
    if matches!(
        key.key_code,
        KEY_DELETE | KEY_BACKSPACE | KEY_TAB | KEY_ESCAPE | KEY_ENTER
    ) || (key.key_code == KEY_A && key.ctrl)
        || NAVIGATION_KEYS.contains(&key.key_code)
    {
        return true;
    }

    // Shift turns the digit row into symbols; the keypad is unaffected.
    (!key.shift && DIGIT_KEYS.contains(&key.key_code)) || NUMPAD_KEYS.contains(&key.key_code)
}
