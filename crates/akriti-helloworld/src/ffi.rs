//! C ABI exported to the platform apps
//!
//! Strings returned by [`akriti_helloworld`] are allocated by Rust and must be
//! handed back to [`akriti_string_free`]; releasing them with the C allocator
//! is undefined behavior.

use std::ffi::CString;
use std::os::raw::c_char;

use crate::greeting::helloworld_from_ptr;

/// Produce the greeting for `name`.
///
/// Returns null when `name` is null.
///
/// # Safety
///
/// `name` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn akriti_helloworld(name: *const c_char) -> *mut c_char {
    let greeting = match helloworld_from_ptr(name) {
        Ok(greeting) => greeting,
        Err(e) => {
            tracing::warn!("akriti_helloworld: {}", e);
            return std::ptr::null_mut();
        }
    };

    // The name came from a C string and the salutation has no NUL, so this
    // only fails if that invariant is broken.
    match CString::new(greeting) {
        Ok(greeting) => greeting.into_raw(),
        Err(e) => {
            tracing::warn!("akriti_helloworld: greeting contains NUL at {}", e.nul_position());
            std::ptr::null_mut()
        }
    }
}

/// Release a string returned by [`akriti_helloworld`]. Null is ignored.
///
/// # Safety
///
/// `text` must be null or a pointer obtained from [`akriti_helloworld`] that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn akriti_string_free(text: *mut c_char) {
    if text.is_null() {
        return;
    }
    drop(CString::from_raw(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_roundtrip_through_abi() {
        let name = CString::new("World").unwrap();
        unsafe {
            let greeting = akriti_helloworld(name.as_ptr());
            assert!(!greeting.is_null());
            assert_eq!(CStr::from_ptr(greeting).to_str().unwrap(), "Hello World");
            akriti_string_free(greeting);
        }
    }

    #[test]
    fn test_null_name_returns_null() {
        let greeting = unsafe { akriti_helloworld(std::ptr::null()) };
        assert!(greeting.is_null());
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { akriti_string_free(std::ptr::null_mut()) };
    }
}
