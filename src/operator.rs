//! Type-pair-specialized operators for Quill values
//!
//! One `extern "C"` function per (operator, left-type, right-type) tuple.
//! Overload resolution happens entirely in the code generator: it picks the
//! matching symbol at compile time, so nothing here inspects operand types
//! at run time and there is no fallback for unsupported combinations.
//!
//! Mixed int/float tuples promote the integer operand to `f64` before
//! computing. Integer arithmetic wraps on overflow (two's complement);
//! integer division by zero is fatal and aborts the process; floating-point
//! division by zero follows IEEE 754 and yields ±infinity or NaN.

use crate::error::{FatalError, fatal};
use crate::string::QStr;

// =============================================================================
// Addition
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_add_int_int(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_add_int_float(a: i32, b: f64) -> f64 {
    a as f64 + b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_add_float_float(a: f64, b: f64) -> f64 {
    a + b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_add_float_int(a: f64, b: i32) -> f64 {
    a + b as f64
}

/// Byte concatenation under the string capacity clamp: the left operand is
/// kept whole, excess bytes of the right operand are dropped silently.
#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_add_string_string(a: QStr, b: QStr) -> QStr {
    a.concat(&b).0
}

// =============================================================================
// Subtraction
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_sub_int_int(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_sub_int_float(a: i32, b: f64) -> f64 {
    a as f64 - b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_sub_float_float(a: f64, b: f64) -> f64 {
    a - b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_sub_float_int(a: f64, b: i32) -> f64 {
    a - b as f64
}

// =============================================================================
// Multiplication
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_mul_int_int(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_mul_int_float(a: i32, b: f64) -> f64 {
    a as f64 * b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_mul_float_float(a: f64, b: f64) -> f64 {
    a * b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_mul_float_int(a: f64, b: i32) -> f64 {
    a * b as f64
}

// =============================================================================
// Division
// =============================================================================

/// Integer division, truncating toward zero.
///
/// A zero divisor is fatal: no value can be produced, so the runtime reports
/// the error and aborts. `i32::MIN / -1` wraps to `i32::MIN`.
#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_div_int_int(a: i32, b: i32) -> i32 {
    if b == 0 {
        fatal(FatalError::IntegerDivisionByZero);
    }
    a.wrapping_div(b)
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_div_int_float(a: i32, b: f64) -> f64 {
    a as f64 / b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_div_float_float(a: f64, b: f64) -> f64 {
    a / b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_div_float_int(a: f64, b: i32) -> f64 {
    a / b as f64
}

// =============================================================================
// Equality
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_eq_int_int(a: i32, b: i32) -> bool {
    a == b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_eq_int_float(a: i32, b: f64) -> bool {
    a as f64 == b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_eq_float_float(a: f64, b: f64) -> bool {
    a == b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_eq_float_int(a: f64, b: i32) -> bool {
    a == b as f64
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_eq_bool_bool(a: bool, b: bool) -> bool {
    a == b
}

/// Equality over optional strings (ABI: nullable pointers).
///
/// An absent string is distinct from the empty string: both-absent compares
/// equal, exactly-one-absent compares unequal, and two present strings
/// compare their valid byte prefixes.
///
/// # Safety
///
/// Each argument must be null or a valid pointer to a `QStr` that lives for
/// the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quill_operator_eq_string_string(
    a: Option<&QStr>,
    b: Option<&QStr>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// =============================================================================
// Inequality
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ne_int_int(a: i32, b: i32) -> bool {
    a != b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ne_int_float(a: i32, b: f64) -> bool {
    a as f64 != b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ne_float_float(a: f64, b: f64) -> bool {
    a != b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ne_float_int(a: f64, b: i32) -> bool {
    a != b as f64
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ne_bool_bool(a: bool, b: bool) -> bool {
    a != b
}

/// Logical negation of [`quill_operator_eq_string_string`] for every input
/// pair, absent operands included.
///
/// # Safety
///
/// Same contract as [`quill_operator_eq_string_string`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quill_operator_ne_string_string(
    a: Option<&QStr>,
    b: Option<&QStr>,
) -> bool {
    !unsafe { quill_operator_eq_string_string(a, b) }
}

// =============================================================================
// Greater than
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_gt_int_int(a: i32, b: i32) -> bool {
    a > b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_gt_int_float(a: i32, b: f64) -> bool {
    a as f64 > b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_gt_float_float(a: f64, b: f64) -> bool {
    a > b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_gt_float_int(a: f64, b: i32) -> bool {
    a > b as f64
}

// =============================================================================
// Less than
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_lt_int_int(a: i32, b: i32) -> bool {
    a < b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_lt_int_float(a: i32, b: f64) -> bool {
    (a as f64) < b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_lt_float_float(a: f64, b: f64) -> bool {
    a < b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_lt_float_int(a: f64, b: i32) -> bool {
    a < b as f64
}

// =============================================================================
// Greater than or equal
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ge_int_int(a: i32, b: i32) -> bool {
    a >= b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ge_int_float(a: i32, b: f64) -> bool {
    a as f64 >= b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ge_float_float(a: f64, b: f64) -> bool {
    a >= b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_ge_float_int(a: f64, b: i32) -> bool {
    a >= b as f64
}

// =============================================================================
// Less than or equal
// =============================================================================

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_le_int_int(a: i32, b: i32) -> bool {
    a <= b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_le_int_float(a: i32, b: f64) -> bool {
    a as f64 <= b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_le_float_float(a: f64, b: f64) -> bool {
    a <= b
}

#[unsafe(no_mangle)]
pub extern "C" fn quill_operator_le_float_int(a: f64, b: i32) -> bool {
    a <= b as f64
}
