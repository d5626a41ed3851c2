//! Greeting construction

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error::HelloError;

/// Prefix put in front of every name.
pub const SALUTATION: &str = "Hello ";

/// Name used when the caller hands over bytes that are not UTF-8.
pub const FALLBACK_NAME: &str = "Ghost";

/// Build the greeting for `name`.
///
/// # Example
///
/// ```rust
/// assert_eq!(akriti_helloworld::helloworld("World"), "Hello World");
/// ```
pub fn helloworld(name: &str) -> String {
    let mut greeting = String::with_capacity(SALUTATION.len() + name.len());
    greeting.push_str(SALUTATION);
    greeting.push_str(name);
    greeting
}

/// Build the greeting for a NUL-terminated C string.
///
/// Non-UTF-8 names are greeted as [`FALLBACK_NAME`].
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn helloworld_from_ptr(name: *const c_char) -> Result<String, HelloError> {
    if name.is_null() {
        return Err(HelloError::NullName);
    }

    let name = CStr::from_ptr(name);
    let name = match name.to_str() {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!("name is not UTF-8 ({}), using fallback", e);
            FALLBACK_NAME
        }
    };

    Ok(helloworld(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_helloworld() {
        assert_eq!(helloworld("World"), "Hello World");
        assert_eq!(helloworld(""), "Hello ");
        assert_eq!(helloworld("Sreejith Krishnan"), "Hello Sreejith Krishnan");
    }

    #[test]
    fn test_helloworld_unicode() {
        assert_eq!(helloworld("गणित"), "Hello गणित");
    }

    #[test]
    fn test_from_ptr_valid() {
        let name = CString::new("Akriti").unwrap();
        let greeting = unsafe { helloworld_from_ptr(name.as_ptr()) }.unwrap();
        assert_eq!(greeting, "Hello Akriti");
    }

    #[test]
    fn test_from_ptr_invalid_utf8() {
        let name = CString::new(vec![0xff, 0xfe, b'a']).unwrap();
        let greeting = unsafe { helloworld_from_ptr(name.as_ptr()) }.unwrap();
        assert_eq!(greeting, "Hello Ghost");
    }

    #[test]
    fn test_from_ptr_null() {
        let result = unsafe { helloworld_from_ptr(std::ptr::null()) };
        assert_eq!(result, Err(HelloError::NullName));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The greeting always starts with the salutation and ends with the name
            #[test]
            fn prop_greeting_wraps_name(name in ".*") {
                let greeting = helloworld(&name);
                prop_assert!(greeting.starts_with(SALUTATION));
                prop_assert_eq!(&greeting[SALUTATION.len()..], name.as_str());
            }

            /// Same name in, same greeting out
            #[test]
            fn prop_greeting_is_pure(name in "[^\\x00]*") {
                let c_name = CString::new(name.clone()).unwrap();
                let first = unsafe { helloworld_from_ptr(c_name.as_ptr()) }.unwrap();
                let second = unsafe { helloworld_from_ptr(c_name.as_ptr()) }.unwrap();
                prop_assert_eq!(&first, &second);
                prop_assert_eq!(first, helloworld(&name));
            }
        }
    }
}
