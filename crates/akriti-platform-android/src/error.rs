//! Error types for the Android string bridge

use thiserror::Error;

/// Java exception class thrown for argument errors
pub const ILLEGAL_ARGUMENT_EXCEPTION: &str = "java/lang/IllegalArgumentException";

/// Java exception class thrown for everything else
pub const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Akriti Android bridge errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JNI error: {0}")]
    Jni(String),

    #[error("Native error: {0}")]
    Native(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// Java exception class this error is reported as
    pub fn exception_class(&self) -> &'static str {
        match self {
            BridgeError::InvalidArgument(_) | BridgeError::Config(_) => ILLEGAL_ARGUMENT_EXCEPTION,
            BridgeError::Jni(_) | BridgeError::Native(_) => RUNTIME_EXCEPTION,
        }
    }
}

impl From<jni::errors::Error> for BridgeError {
    fn from(e: jni::errors::Error) -> Self {
        match e {
            jni::errors::Error::NullPtr(what) | jni::errors::Error::NullDeref(what) => {
                BridgeError::InvalidArgument(format!("null {}", what))
            }
            other => BridgeError::Jni(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Config(format!("JSON error: {}", e))
    }
}
