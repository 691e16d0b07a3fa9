//! Explicit conversions between the Quill primitive types
//!
//! One converter per (source, target) pair, all total. The type checker
//! only admits explicit casts, so generated code calls these directly.
//!
//! String-to-number conversion scans the longest valid numeric prefix with
//! locale-independent, byte-oriented scanning. The internal API reports an
//! unparsable input explicitly via [`Parsed`]; the FFI surface collapses it
//! to 0 / 0.0, which is the documented ABI behavior.

use crate::string::QStr;

/// Outcome of parsing a numeric value out of a string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<T> {
    /// A valid numeric prefix was found.
    Value(T),
    /// No valid prefix; the ABI coerces this to zero.
    Unparsable,
}

impl<T: Default> Parsed<T> {
    /// Collapse to the silent-default ABI behavior (0 for `i32`, 0.0 for `f64`).
    pub fn or_zero(self) -> T {
        match self {
            Parsed::Value(v) => v,
            Parsed::Unparsable => T::default(),
        }
    }
}

fn skip_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Parse the longest valid decimal-integer prefix.
///
/// Grammar: optional ASCII whitespace, optional sign, one or more digits.
/// Values beyond the `i32` range saturate at `i32::MIN` / `i32::MAX`.
pub fn int_prefix(bytes: &[u8]) -> Parsed<i32> {
    let bytes = skip_ascii_whitespace(bytes);
    let (negative, bytes) = match bytes.first() {
        Some(&b'-') => (true, &bytes[1..]),
        Some(&b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut acc: i64 = 0;
    let mut any_digit = false;
    for &b in bytes {
        if !b.is_ascii_digit() {
            break;
        }
        any_digit = true;
        // Stop accumulating once past the i32 range; the clamp below takes over.
        if acc <= i32::MAX as i64 {
            acc = acc * 10 + (b - b'0') as i64;
        }
    }
    if !any_digit {
        return Parsed::Unparsable;
    }
    if negative {
        acc = -acc;
    }
    Parsed::Value(acc.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Parse the longest valid floating-point prefix.
///
/// Grammar: optional ASCII whitespace, optional sign, digits with an
/// optional `.` fraction (at least one digit on either side of the point),
/// then an optional `e`/`E` exponent with its own sign and at least one
/// digit. The radix character is always `.`, regardless of locale.
pub fn float_prefix(bytes: &[u8]) -> Parsed<f64> {
    let bytes = skip_ascii_whitespace(bytes);
    let mut end = 0;
    if matches!(bytes.first(), Some(&b'-') | Some(&b'+')) {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        mantissa_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return Parsed::Unparsable;
    }

    // Exponent is only part of the prefix when it carries a digit.
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&b'-') | Some(&b'+')) {
            exp_end += 1;
        }
        let mut exp_digits = 0;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
            exp_digits += 1;
        }
        if exp_digits > 0 {
            end = exp_end;
        }
    }

    // The prefix is ASCII by construction, and within f64's grammar; out-of-
    // range magnitudes round to ±infinity rather than failing.
    match core::str::from_utf8(&bytes[..end]).ok().and_then(|s| s.parse().ok()) {
        Some(v) => Parsed::Value(v),
        None => Parsed::Unparsable,
    }
}

// =============================================================================
// To string
// =============================================================================

/// `true` → `"true"`, `false` → `"false"`.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_bool_to_string(b: bool) -> QStr {
    QStr::from_bytes_lossy(if b { b"true" } else { b"false" })
}

/// Canonical decimal rendering, leading `-` when negative.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_int_to_string(i: i32) -> QStr {
    QStr::from_bytes_lossy(format!("{i}").as_bytes())
}

/// Fixed six-decimal-place rendering, no scientific notation.
///
/// Large magnitudes spell out every digit; the widest finite `f64` is still
/// far under the string capacity. Non-finite values render as `inf`, `-inf`,
/// and `NaN`.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_float_to_string(f: f64) -> QStr {
    QStr::from_bytes_lossy(format!("{f:.6}").as_bytes())
}

// =============================================================================
// To boolean
// =============================================================================

/// True iff the string is non-empty; content is irrelevant.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_string_to_bool(s: QStr) -> bool {
    !s.is_empty()
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_int_to_bool(i: i32) -> bool {
    i != 0
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_float_to_bool(f: f64) -> bool {
    f != 0.0
}

// =============================================================================
// To integer
// =============================================================================

/// Longest valid decimal prefix; 0 when no prefix parses.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_string_to_int(s: QStr) -> i32 {
    int_prefix(s.as_bytes()).or_zero()
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_bool_to_int(b: bool) -> i32 {
    b as i32
}

/// Truncation toward zero; out-of-range values saturate at the `i32` bounds
/// and NaN maps to 0.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_float_to_int(f: f64) -> i32 {
    f as i32
}

// =============================================================================
// To float
// =============================================================================

/// Longest valid floating-point prefix; 0.0 when no prefix parses.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_string_to_float(s: QStr) -> f64 {
    float_prefix(s.as_bytes()).or_zero()
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_bool_to_float(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Exact widening: every `i32` is representable as an `f64`.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_int_to_float(i: i32) -> f64 {
    i as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_to_string_literals() {
        assert_eq!(quill_builtin_bool_to_string(true).as_bytes(), b"true");
        assert_eq!(quill_builtin_bool_to_string(false).as_bytes(), b"false");
    }

    #[test]
    fn int_to_string_decimal() {
        assert_eq!(quill_builtin_int_to_string(0).as_bytes(), b"0");
        assert_eq!(quill_builtin_int_to_string(42).as_bytes(), b"42");
        assert_eq!(quill_builtin_int_to_string(-7).as_bytes(), b"-7");
        assert_eq!(
            quill_builtin_int_to_string(i32::MIN).as_bytes(),
            b"-2147483648"
        );
    }

    #[test]
    fn float_to_string_fixed_six_places() {
        assert_eq!(quill_builtin_float_to_string(3.5).as_bytes(), b"3.500000");
        assert_eq!(quill_builtin_float_to_string(0.0).as_bytes(), b"0.000000");
        assert_eq!(
            quill_builtin_float_to_string(-0.125).as_bytes(),
            b"-0.125000"
        );
    }

    #[test]
    fn float_to_string_large_magnitude_stays_decimal() {
        let s = quill_builtin_float_to_string(1e20);
        assert_eq!(s.as_bytes(), b"100000000000000000000.000000");
    }

    #[test]
    fn string_to_bool_checks_length_only() {
        assert!(!quill_builtin_string_to_bool(QStr::empty()));
        assert!(quill_builtin_string_to_bool(QStr::from("x")));
        assert!(quill_builtin_string_to_bool(QStr::from("false")));
    }

    #[test]
    fn string_to_int_parses_longest_prefix() {
        assert_eq!(quill_builtin_string_to_int(QStr::from("42")), 42);
        assert_eq!(quill_builtin_string_to_int(QStr::from("-17px")), -17);
        assert_eq!(quill_builtin_string_to_int(QStr::from("  99 red")), 99);
        assert_eq!(quill_builtin_string_to_int(QStr::from("+8")), 8);
    }

    #[test]
    fn string_to_int_defaults_to_zero() {
        assert_eq!(quill_builtin_string_to_int(QStr::empty()), 0);
        assert_eq!(quill_builtin_string_to_int(QStr::from("abc")), 0);
        assert_eq!(quill_builtin_string_to_int(QStr::from("-")), 0);
        assert_eq!(quill_builtin_string_to_int(QStr::from(" + 3")), 0);
    }

    #[test]
    fn string_to_int_saturates_out_of_range() {
        assert_eq!(
            quill_builtin_string_to_int(QStr::from("99999999999999999999")),
            i32::MAX
        );
        assert_eq!(
            quill_builtin_string_to_int(QStr::from("-99999999999999999999")),
            i32::MIN
        );
    }

    #[test]
    fn string_to_float_parses_longest_prefix() {
        assert_eq!(quill_builtin_string_to_float(QStr::from("3.5")), 3.5);
        assert_eq!(quill_builtin_string_to_float(QStr::from("3.500000")), 3.5);
        assert_eq!(quill_builtin_string_to_float(QStr::from("-2.5e2xyz")), -250.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from(".5")), 0.5);
        assert_eq!(quill_builtin_string_to_float(QStr::from("5.")), 5.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from(" 7 ")), 7.0);
    }

    #[test]
    fn string_to_float_exponent_needs_digits() {
        // "1e" has no exponent digits, so the prefix ends after the mantissa.
        assert_eq!(quill_builtin_string_to_float(QStr::from("1e")), 1.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from("2E+")), 2.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from("2e-1")), 0.2);
    }

    #[test]
    fn string_to_float_defaults_to_zero() {
        assert_eq!(quill_builtin_string_to_float(QStr::empty()), 0.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from(".")), 0.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from("e5")), 0.0);
        assert_eq!(quill_builtin_string_to_float(QStr::from("nope")), 0.0);
    }

    #[test]
    fn parsed_reports_unparsable_explicitly() {
        assert_eq!(int_prefix(b"abc"), Parsed::Unparsable);
        assert_eq!(int_prefix(b"12abc"), Parsed::Value(12));
        assert_eq!(float_prefix(b"-"), Parsed::Unparsable);
        assert_eq!(float_prefix(b"-1.5"), Parsed::Value(-1.5));
    }

    #[test]
    fn bool_numeric_conversions() {
        assert_eq!(quill_builtin_bool_to_int(true), 1);
        assert_eq!(quill_builtin_bool_to_int(false), 0);
        assert_eq!(quill_builtin_bool_to_float(true), 1.0);
        assert_eq!(quill_builtin_bool_to_float(false), 0.0);
    }

    #[test]
    fn numeric_truthiness() {
        assert!(!quill_builtin_int_to_bool(0));
        assert!(quill_builtin_int_to_bool(-3));
        assert!(!quill_builtin_float_to_bool(0.0));
        assert!(quill_builtin_float_to_bool(0.5));
    }

    #[test]
    fn float_to_int_truncates_toward_zero() {
        assert_eq!(quill_builtin_float_to_int(3.9), 3);
        assert_eq!(quill_builtin_float_to_int(-3.9), -3);
        assert_eq!(quill_builtin_float_to_int(0.0), 0);
        assert_eq!(quill_builtin_float_to_int(f64::INFINITY), i32::MAX);
        assert_eq!(quill_builtin_float_to_int(f64::NAN), 0);
    }

    #[test]
    fn int_to_float_is_exact() {
        assert_eq!(quill_builtin_int_to_float(42), 42.0);
        assert_eq!(quill_builtin_int_to_float(i32::MAX), 2147483647.0);
        assert_eq!(quill_builtin_int_to_float(i32::MIN), -2147483648.0);
    }

    #[test]
    fn string_round_trips() {
        let s = quill_builtin_int_to_string(42);
        assert_eq!(quill_builtin_string_to_int(s), 42);

        let s = quill_builtin_float_to_string(3.5);
        assert_eq!(s.as_bytes(), b"3.500000");
        assert_eq!(quill_builtin_string_to_float(s), 3.5);
    }
}
