//! Akriti Platform Android - JNI string bridge for the Akriti Android app
//!
//! Exposes `HelloWorld.stringFromJNI(String)` to Kotlin/Java: the managed
//! string is copied into a native buffer, handed to the `akriti_helloworld`
//! C ABI, and the result comes back as a new Java string.

mod bridge;
mod buffer;
mod config;
mod error;
pub mod logging;
mod producer;

// Re-export main types
pub use bridge::{ManagedStrings, StringBridge};
pub use buffer::{live_native_buffers, NativeBuffer};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use producer::{FnProducer, HelloWorld, TextProducer};

// JNI bindings - only compile on Android targets
#[cfg(target_os = "android")]
mod jni_bindings;

#[cfg(target_os = "android")]
pub use jni_bindings::JniStrings;
