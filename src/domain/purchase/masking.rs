// SPDX-License-Identifier: MPL-2.0
//! Input masks for the simulated payment form.
//!
//! These are pure string transforms. They shape what the user types but do
//! not check it: no Luhn check, no expiry-in-the-future check. The checkout
//! is a mock and always succeeds.

/// Maximum digits kept in a card number.
pub const CARD_DIGITS: usize = 16;
/// Maximum formatted card number length (16 digits and 3 spaces).
pub const CARD_MAX_LEN: usize = 19;
/// Maximum formatted expiry length (`MM/YY`).
pub const EXPIRY_MAX_LEN: usize = 5;
/// Maximum CVV length.
pub const CVV_MAX_LEN: usize = 3;

/// Groups card digits in blocks of four, e.g. `"1234567890123456"` becomes
/// `"1234 5678 9012 3456"`.
///
/// Whitespace and other non-digit characters are dropped, and anything past
/// the sixteenth digit is discarded.
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let mut formatted = String::with_capacity(CARD_MAX_LEN);
    for (i, digit) in digits(input).take(CARD_DIGITS).enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }
    formatted
}

/// Formats an expiry date as `MM/YY`.
///
/// The slash appears as soon as two digits are present, so `"12"` becomes
/// `"12/"` and `"1"` stays `"1"`.
#[must_use]
pub fn format_expiry(input: &str) -> String {
    let digits: String = digits(input).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Keeps at most three digits.
#[must_use]
pub fn format_cvv(input: &str) -> String {
    digits(input).take(CVV_MAX_LEN).collect()
}

fn digits(input: &str) -> impl Iterator<Item = char> + '_ {
    input.chars().filter(char::is_ascii_digit)
}
