use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::path::Path;
use std::sync::OnceLock;

use tracing::error;

use crate::convert_file;

static VERSION: OnceLock<CString> = OnceLock::new();

const OK: c_int = 0;
const INVALID_PATH: c_int = -1;
const CONVERT_FAILED: c_int = -2;

#[no_mangle]
pub extern "C" fn ffi_version() -> *const c_char {
    VERSION
        .get_or_init(|| CString::new(env!("CARGO_PKG_VERSION")).unwrap_or_default())
        .as_ptr()
}

/// Converts the sprite file at `sprite_file_path`.
///
/// Returns 0 on success, -1 if the path is null or not UTF-8 and -2 if the
/// conversion itself failed.
///
/// # Safety
///
/// `sprite_file_path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ffi_convert(sprite_file_path: *const c_char) -> c_int {
    if sprite_file_path.is_null() {
        return INVALID_PATH;
    }
    let c_str = CStr::from_ptr(sprite_file_path);
    let Ok(path) = c_str.to_str() else {
        return INVALID_PATH;
    };

    match convert_file(Path::new(path)) {
        Ok(_) => OK,
        Err(e) => {
            error!("Failed to convert {:?}: {}", path, e);
            CONVERT_FAILED
        }
    }
}
