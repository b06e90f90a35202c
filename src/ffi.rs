//! FFI bindings for Workout Flux
//!
//! This module provides C-compatible functions for calling Flux from other languages.
//! All functions use C strings (null-terminated) and return allocated memory that
//! must be freed by the caller using `workout_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::encoder::render;
use crate::error::WorkoutError;
use crate::pipeline::training_info;
use crate::types::TrainingInfo;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Decode the code and JSON readings array, then compute the summary.
unsafe fn summary_from_raw(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> Result<TrainingInfo, String> {
    let code = cstr_to_string(workout_type)
        .ok_or("Invalid workout_type string pointer")?;
    let data_str = cstr_to_string(data_json)
        .ok_or("Invalid data string pointer")?;

    let data: Vec<f64> = serde_json::from_str(&data_str)
        .map_err(|e| WorkoutError::JsonError(e).to_string())?;

    training_info(&code, &data).map_err(|e| e.to_string())
}

// ============================================================================
// Summary API
// ============================================================================

/// Process a sensor package and return the rendered summary line.
///
/// `data_json` is a JSON array of numbers, e.g. `[15000, 1, 75]`.
///
/// # Safety
/// - `workout_type` and `data_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `workout_free_string`.
/// - Returns NULL on error; call `workout_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn workout_read_package(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    match summary_from_raw(workout_type, data_json) {
        Ok(info) => string_to_cstr(&render(&info)),
        Err(msg) => {
            set_last_error(&msg);
            ptr::null_mut()
        }
    }
}

/// Process a sensor package and return the summary as a JSON object.
///
/// # Safety
/// - `workout_type` and `data_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `workout_free_string`.
/// - Returns NULL on error; call `workout_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn workout_training_info_json(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let info = match summary_from_raw(workout_type, data_json) {
        Ok(info) => info,
        Err(msg) => {
            set_last_error(&msg);
            return ptr::null_mut();
        }
    };

    match serde_json::to_string(&info) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&WorkoutError::EncodingError(e.to_string()).to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by Flux functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a Flux function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn workout_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - The returned pointer is valid until the next Flux function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn workout_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn workout_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
