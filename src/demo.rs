use crate::constants::HEX_DIGITS;
use rand::Rng;

// Pure helpers behind the "area" and "string" demo buttons.

#[inline]
pub fn calculate_rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Reverse by Unicode scalar value, so multi-byte text survives a double reverse.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Locale-invariant uppercase mapping.
pub fn capitalize_string(s: &str) -> String {
    s.to_uppercase()
}

/// `#RRGGBB` with each digit drawn uniformly from the 16 hex symbols.
pub fn random_color_hex<R: Rng>(rng: &mut R) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    for _ in 0..6 {
        out.push(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char);
    }
    out
}

pub fn area_report(width: f64, height: f64) -> String {
    format!(
        "Area of rectangle ({} x {}): {}",
        width,
        height,
        calculate_rectangle_area(width, height)
    )
}

pub fn string_report(s: &str) -> String {
    format!(
        "Original: {} | Reversed: {} | Uppercase: {}",
        s,
        reverse_string(s),
        capitalize_string(s)
    )
}
