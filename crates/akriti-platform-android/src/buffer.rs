//! Native-side text buffers
//!
//! A [`NativeBuffer`] is the bridge's own NUL-terminated copy of a managed
//! string. It lives for exactly one bridge call and is released on drop, on
//! every exit path. Live buffers are counted per thread so callers (and tests)
//! can check that a call left nothing behind.

use std::cell::Cell;
use std::ffi::{CStr, CString};

thread_local! {
    static LIVE_BUFFERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of native buffers currently alive on this thread
pub fn live_native_buffers() -> usize {
    LIVE_BUFFERS.with(|live| live.get())
}

/// Owned native copy of a managed string
#[derive(Debug)]
pub struct NativeBuffer {
    text: CString,
}

impl NativeBuffer {
    /// Copy `text` into a native buffer.
    ///
    /// U+0000 is written as `C0 80`, the JVM's modified UTF-8 form, so the
    /// buffer never carries an interior NUL.
    pub fn new(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        for byte in text.bytes() {
            if byte == 0 {
                bytes.extend_from_slice(&[0xc0, 0x80]);
            } else {
                bytes.push(byte);
            }
        }
        // SAFETY: every NUL byte was rewritten above.
        let text = unsafe { CString::from_vec_unchecked(bytes) };

        LIVE_BUFFERS.with(|live| live.set(live.get() + 1));
        tracing::trace!(len = text.as_bytes().len(), "native buffer acquired");

        Self { text }
    }

    /// Borrow the buffer as a C string
    pub fn as_c_str(&self) -> &CStr {
        &self.text
    }
}

impl Drop for NativeBuffer {
    fn drop(&mut self) {
        LIVE_BUFFERS.with(|live| live.set(live.get().saturating_sub(1)));
        tracing::trace!("native buffer released");
    }
}
