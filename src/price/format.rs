//! Display formatting for prices and volumes.
//!
//! Prices keep the precision of their shortest round-trip representation;
//! volume and change always show two decimals. Both use `,` as thousands
//! separator.

/// Number of fractional digits in a decimal string, scientific notation included.
///
/// `"0.0001234"` -> 7, `"1.234e-5"` -> 8, `"1.5e3"` -> 0.
pub fn count_decimal_places(number: &str) -> usize {
    let number = number.trim();
    let (mantissa, exponent) = match number.find(['e', 'E']) {
        Some(idx) => (&number[..idx], number[idx + 1..].parse::<i64>().unwrap_or(0)),
        None => (number, 0),
    };

    let fractional = mantissa
        .split_once('.')
        .map(|(_, frac)| frac.len() as i64)
        .unwrap_or(0);

    (fractional - exponent).max(0) as usize
}

/// Formats `value` with exactly `precision` decimals and thousands separators.
pub fn format_with_separators(value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    // NaN / inf
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{:.*}", precision, value);
    }

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Price display: as many decimals as the value naturally carries.
pub fn format_price(value: f64) -> String {
    let precision = count_decimal_places(&value.to_string());
    format_with_separators(value, precision)
}

/// Volume and change display: always two decimals.
pub fn format_amount(value: f64) -> String {
    format_with_separators(value, 2)
}
