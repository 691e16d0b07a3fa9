//! Console output primitives
//!
//! `print` and `println` write a string value's payload bytes to the
//! process's standard output. Buffering and flushing are the host stream's
//! responsibility, and a write failure is never surfaced to generated code.

use std::io::{self, Write};

use crate::string::QStr;

/// Write the value's payload bytes, optionally followed by one newline byte.
pub(crate) fn write_value(w: &mut impl Write, s: &QStr, newline: bool) -> io::Result<()> {
    w.write_all(s.as_bytes())?;
    if newline {
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Write exactly `s.len` bytes to stdout, no trailing separator.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_print(s: QStr) {
    let _ = write_value(&mut io::stdout().lock(), &s, false);
}

/// Write exactly `s.len` bytes to stdout, followed by a single newline byte.
#[unsafe(no_mangle)]
pub extern "C" fn quill_builtin_println(s: QStr) {
    let _ = write_value(&mut io::stdout().lock(), &s, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_writes_payload_only() {
        let mut out = Vec::new();
        write_value(&mut out, &QStr::from("hi"), false).unwrap();
        assert_eq!(out, b"hi");
    }

    #[test]
    fn println_appends_one_newline() {
        let mut out = Vec::new();
        write_value(&mut out, &QStr::from("hi"), true).unwrap();
        assert_eq!(out, b"hi\n");
    }

    #[test]
    fn empty_string_prints_nothing() {
        let mut out = Vec::new();
        write_value(&mut out, &QStr::empty(), false).unwrap();
        assert!(out.is_empty());
        write_value(&mut out, &QStr::empty(), true).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn non_utf8_bytes_pass_through_verbatim() {
        let payload = [0xFFu8, 0x00, 0x7F];
        let s = QStr::from_bytes_lossy(&payload);
        let mut out = Vec::new();
        write_value(&mut out, &s, false).unwrap();
        assert_eq!(out, payload);
    }
}
