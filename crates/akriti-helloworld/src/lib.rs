//! Akriti hello-world - native text producer for the Akriti mobile apps
//!
//! The iOS app links this crate as a static library and calls the C ABI
//! directly. The Android bridge (`akriti-platform-android`) links it as an
//! rlib and goes through the same C ABI.

pub mod error;
pub mod ffi;
pub mod greeting;

pub use error::HelloError;
pub use ffi::{akriti_helloworld, akriti_string_free};
pub use greeting::{helloworld, helloworld_from_ptr, FALLBACK_NAME, SALUTATION};
