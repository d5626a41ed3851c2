//! JNI bindings for `io.ganita.android.akriti.HelloWorld`

use std::panic::{self, AssertUnwindSafe};

use jni::objects::{JClass, JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::bridge::{ManagedStrings, StringBridge};
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::logging;
use crate::producer::HelloWorld;

/// JVM strings accessed through a `JNIEnv`
pub struct JniStrings<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
}

impl<'a, 'local> JniStrings<'a, 'local> {
    pub fn new(env: &'a mut JNIEnv<'local>) -> Self {
        Self { env }
    }
}

impl<'a, 'local> ManagedStrings for JniStrings<'a, 'local> {
    type Input = JString<'local>;
    type Output = JString<'local>;

    fn read(&mut self, text: &JString<'local>) -> Result<String, BridgeError> {
        if text.as_raw().is_null() {
            return Err(BridgeError::InvalidArgument("name is null".to_string()));
        }
        // The pinned UTF chars are released when the JavaStr is dropped here
        let chars = self.env.get_string(text)?;
        Ok(chars.into())
    }

    fn create(&mut self, text: &str) -> Result<JString<'local>, BridgeError> {
        Ok(self.env.new_string(text)?)
    }
}

/// Report `error` to Java unless an exception is already pending
fn throw(env: &mut JNIEnv, error: &BridgeError) {
    tracing::warn!("{}", error);
    if env.exception_check().unwrap_or(false) {
        return;
    }
    let _ = env.throw_new(error.exception_class(), error.to_string());
}

/// Configure logging from a JSON string. Null configures the defaults.
#[no_mangle]
pub extern "system" fn Java_io_ganita_android_akriti_HelloWorld_init(
    mut env: JNIEnv,
    _class: JClass,
    config_json: JString,
) {
    let result = panic::catch_unwind(AssertUnwindSafe(|| -> Result<(), BridgeError> {
        let config = if config_json.as_raw().is_null() {
            BridgeConfig::default()
        } else {
            let config_str: String = env.get_string(&config_json)?.into();
            BridgeConfig::from_json(&config_str)?
        };
        logging::init(&config);
        Ok(())
    }));

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => throw(&mut env, &e),
        Err(_) => throw(&mut env, &BridgeError::Native("panic in init".to_string())),
    }
}

/// Greet `name`. Returns null with a pending exception on failure.
#[no_mangle]
pub extern "system" fn Java_io_ganita_android_akriti_HelloWorld_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _instance: JObject<'local>,
    name: JString<'local>,
) -> jstring {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let bridge = StringBridge::new(HelloWorld);
        let mut strings = JniStrings::new(&mut env);
        bridge.greet(&mut strings, &name)
    }));

    match result {
        Ok(Ok(greeting)) => greeting.into_raw(),
        Ok(Err(e)) => {
            throw(&mut env, &e);
            std::ptr::null_mut()
        }
        Err(_) => {
            throw(&mut env, &BridgeError::Native("panic in stringFromJNI".to_string()));
            std::ptr::null_mut()
        }
    }
}
