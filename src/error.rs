//! Fatal-error reporting for the Quill runtime
//!
//! The runtime's error taxonomy has exactly one condition that cannot yield
//! a value: integer division by zero. Generated code has no error channel,
//! so the runtime reports the condition on stderr and aborts the process.

use derive_more::{Display, Error};

/// A condition that terminates the compiled program.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    #[display("integer division by zero")]
    IntegerDivisionByZero,
}

/// Report `err` on stderr and abort. Never returns.
pub(crate) fn fatal(err: FatalError) -> ! {
    eprintln!("fatal runtime error: {err}");
    std::process::abort()
}
