//! Error types for the hello-world producer

use thiserror::Error;

/// Hello-world errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelloError {
    #[error("Name pointer is null")]
    NullName,
}
