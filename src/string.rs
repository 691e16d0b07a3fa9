//! String value representation for the Quill runtime
//!
//! A Quill string is a fixed-capacity byte buffer with an explicit length,
//! passed by value everywhere. The layout must match what the code generator
//! emits for string locals and literals, so it is pinned by a compile-time
//! assertion below.

use core::fmt;

/// Total buffer capacity in bytes, including the NUL sentinel slot.
pub const CAPACITY: usize = 512;

/// Maximum number of payload bytes a string value can hold.
pub const MAX_LEN: usize = CAPACITY - 1;

/// Whether a source sequence fit into a string value without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// The whole source was copied.
    Exact,
    /// The source exceeded [`MAX_LEN`]; only the leading bytes were kept.
    Truncated,
}

/// A Quill string value: fixed-capacity byte buffer plus explicit length.
///
/// Invariants: `len <= MAX_LEN`, and `data[len] == 0` (a NUL sentinel kept
/// for the benefit of generated code and debuggers). Bytes past the sentinel
/// are zero-filled by construction. Values are pure data with no heap
/// backing, copied by value on every use.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct QStr {
    data: [u8; CAPACITY],
    len: u16,
}

// Layout contract with the code generator.
const _: () = {
    assert!(core::mem::size_of::<QStr>() == 514);
    assert!(core::mem::align_of::<QStr>() == 2);
};

impl QStr {
    /// The empty string value.
    pub const fn empty() -> Self {
        QStr {
            data: [0; CAPACITY],
            len: 0,
        }
    }

    /// Copy a source byte sequence into a new string value.
    ///
    /// At most [`MAX_LEN`] bytes are copied; the returned [`Fit`] says
    /// whether anything was dropped. Construction is total — there is no
    /// error path, only the truncation signal.
    pub fn from_bytes(src: &[u8]) -> (Self, Fit) {
        let fit = if src.len() > MAX_LEN {
            Fit::Truncated
        } else {
            Fit::Exact
        };
        let take = src.len().min(MAX_LEN);
        let mut data = [0u8; CAPACITY];
        data[..take].copy_from_slice(&src[..take]);
        (
            QStr {
                data,
                len: take as u16,
            },
            fit,
        )
    }

    /// Construction that discards the truncation signal.
    ///
    /// This is the generated-code path: the Quill ABI has no slot for the
    /// signal, so overflow is silent data loss by contract.
    pub fn from_bytes_lossy(src: &[u8]) -> Self {
        Self::from_bytes(src).0
    }

    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The valid payload bytes, sentinel excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Concatenate two string values under the capacity clamp.
    ///
    /// The left operand is preserved in full (it is at most [`MAX_LEN`]
    /// bytes already); bytes of the right operand are taken only as far as
    /// they fit.
    pub fn concat(&self, other: &QStr) -> (Self, Fit) {
        let take_right = other.len().min(MAX_LEN - self.len());
        let fit = if take_right < other.len() {
            Fit::Truncated
        } else {
            Fit::Exact
        };
        let mut data = [0u8; CAPACITY];
        data[..self.len()].copy_from_slice(self.as_bytes());
        data[self.len()..self.len() + take_right]
            .copy_from_slice(&other.as_bytes()[..take_right]);
        (
            QStr {
                data,
                len: (self.len() + take_right) as u16,
            },
            fit,
        )
    }
}

impl Default for QStr {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for QStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for QStr {}

impl fmt::Display for QStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl fmt::Debug for QStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QStr({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl From<&str> for QStr {
    fn from(s: &str) -> Self {
        Self::from_bytes_lossy(s.as_bytes())
    }
}

/// Construct a string value from raw bytes.
///
/// Called by generated code for string literals and host data. Sources
/// longer than [`MAX_LEN`] are truncated silently, per the Quill ABI.
/// A null `data` pointer yields the empty string.
///
/// # Safety
///
/// `data` must be null or valid for reads of `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quill_string_from_bytes(data: *const u8, len: usize) -> QStr {
    if data.is_null() {
        return QStr::empty();
    }
    let src = unsafe { core::slice::from_raw_parts(data, len) };
    QStr::from_bytes_lossy(src)
}
