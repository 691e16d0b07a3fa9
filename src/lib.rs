//! Quill runtime library.
//!
//! Provides the native runtime functions required by Quill's compiled output:
//! - String value representation (`quill_string_from_bytes`)
//! - Console output (`quill_builtin_print`, `quill_builtin_println`)
//! - Explicit conversions between the four primitive types
//!   (`quill_builtin_<from>_to_<to>`)
//! - Type-pair-specialized arithmetic and comparison operators
//!   (`quill_operator_<op>_<lhs>_<rhs>`)
//!
//! The code generator is the sole caller. It resolves every overload at
//! compile time and emits a direct call to the matching symbol; this layer
//! carries no runtime type tags and no fallback for unsupported operand
//! combinations. All values are plain stack data with no heap backing, and
//! the crate holds no global mutable state, so every function may be called
//! from any thread (stdout interleaving aside).

pub mod console;
pub mod convert;
pub mod error;
pub mod operator;
pub mod string;

pub use convert::Parsed;
pub use error::FatalError;
pub use string::{CAPACITY, Fit, MAX_LEN, QStr};
