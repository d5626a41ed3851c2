//! The managed/native string bridge
//!
//! One call does: managed text in, native buffer, producer, managed text out.
//! The native buffer is scoped to the producer call, so it is released before
//! the managed result is created and on every error path.

use crate::buffer::NativeBuffer;
use crate::error::BridgeError;
use crate::producer::{HelloWorld, TextProducer};

/// String operations of a managed runtime (the JVM on Android)
pub trait ManagedStrings {
    /// Caller-owned text handle passed into the bridge
    type Input: ?Sized;
    /// Newly allocated text handle handed back to the caller
    type Output;

    /// Decode the caller's text. A null handle is `InvalidArgument`.
    /// Any runtime-side pinning must be released before this returns.
    fn read(&mut self, text: &Self::Input) -> Result<String, BridgeError>;

    /// Allocate a new managed string holding `text`
    fn create(&mut self, text: &str) -> Result<Self::Output, BridgeError>;
}

/// Bridge from managed strings to a native text producer
#[derive(Debug, Clone, Default)]
pub struct StringBridge<P = HelloWorld> {
    producer: P,
}

impl<P: TextProducer> StringBridge<P> {
    /// Create a bridge delegating to `producer`
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    /// Greet `name` through the producer and return the managed result
    pub fn greet<M: ManagedStrings>(
        &self,
        runtime: &mut M,
        name: &M::Input,
    ) -> Result<M::Output, BridgeError> {
        let name = runtime.read(name)?;

        let produced = {
            let native = NativeBuffer::new(&name);
            self.producer.produce(native.as_c_str())?
        };

        tracing::debug!(
            input_len = name.len(),
            output_len = produced.len(),
            "greet completed"
        );

        runtime.create(&produced)
    }
}
