//! Shared helpers for WASM API operations
//!
//! Console logging, serde <-> JsValue conversion and input decoding used by
//! every exported function.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::arpeggios::ArpeggioKind;
use crate::error::TabsError;
use crate::tabs::OverbendNotation;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        to_js_error(TabsError::Serialization(format!("{}: {}", error_context, e)))
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        to_js_error(TabsError::Serialization(format!("{}: {}", error_context, e)))
    })
}

// ============================================================================
// Input Decoding
// ============================================================================

pub fn parse_notation(notation: &str) -> Result<OverbendNotation, JsValue> {
    notation.parse::<OverbendNotation>().map_err(to_js_error)
}

/// Decode requested arpeggio kinds; unknown names are skipped with a warning
pub fn parse_arpeggio_kinds(names: &[String]) -> Vec<ArpeggioKind> {
    names
        .iter()
        .filter_map(|name| match name.parse::<ArpeggioKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                wasm_warn!("{}", e);
                None
            }
        })
        .collect()
}

/// Convert a crate error to a JsValue, logging it to the console
pub fn to_js_error(err: TabsError) -> JsValue {
    let msg = err.to_string();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
