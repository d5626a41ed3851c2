//! Text producers the bridge delegates to

use std::ffi::CStr;
use std::os::raw::c_char;

use akriti_helloworld::{akriti_helloworld, akriti_string_free};

use crate::error::BridgeError;

/// Produces text from a native input string.
///
/// Implementations must be reentrant: the bridge calls them from whichever
/// Java thread invoked it, with no locking of its own.
pub trait TextProducer {
    fn produce(&self, input: &CStr) -> Result<String, BridgeError>;
}

/// String owned by the hello-world library, freed through its own ABI
struct ProducedText {
    raw: *mut c_char,
}

impl ProducedText {
    fn as_c_str(&self) -> &CStr {
        // SAFETY: `raw` is non-null (checked in `HelloWorld::produce`) and
        // stays valid until `akriti_string_free` runs in `drop`.
        unsafe { CStr::from_ptr(self.raw) }
    }
}

impl Drop for ProducedText {
    fn drop(&mut self) {
        // SAFETY: `raw` came from `akriti_helloworld` and is freed only here.
        unsafe { akriti_string_free(self.raw) }
    }
}

/// Producer backed by the `akriti_helloworld` C ABI
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloWorld;

impl TextProducer for HelloWorld {
    fn produce(&self, input: &CStr) -> Result<String, BridgeError> {
        // SAFETY: `input` is a valid NUL-terminated string for this call.
        let raw = unsafe { akriti_helloworld(input.as_ptr()) };
        if raw.is_null() {
            return Err(BridgeError::Native("akriti_helloworld returned null".to_string()));
        }

        let produced = ProducedText { raw };
        let text = produced.as_c_str().to_string_lossy().into_owned();
        Ok(text)
    }
}

/// Producer wrapping a plain Rust function
pub struct FnProducer<F>(pub F);

impl<F> TextProducer for FnProducer<F>
where
    F: Fn(&str) -> String,
{
    fn produce(&self, input: &CStr) -> Result<String, BridgeError> {
        let input = input.to_string_lossy();
        Ok((self.0)(&input))
    }
}

impl<P: TextProducer + ?Sized> TextProducer for &P {
    fn produce(&self, input: &CStr) -> Result<String, BridgeError> {
        (**self).produce(input)
    }
}
