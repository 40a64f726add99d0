//! Foreign Function Interface for libthai
//!
//! A C-compatible API for native input method frontends. The frontend owns
//! the text field and exposes it through a table of callbacks; the engine
//! calls back into it to read surrounding text, delete and commit.

use crate::config::EngineConfig;
use crate::engine::{EditAction, Host, KeyEvent, ModifierState, SurroundingText, ThaiEngine, ThaiSession};
use crate::grammar::Strictness;
use crate::keymap::{self, KeyboardLayout, ShiftLevel};
use crate::types::KeySym;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::{c_char, c_int, c_uint};
use std::ptr;
use std::sync::Mutex;

pub const LIBTHAI_MOD_SHIFT: c_uint = 1;
pub const LIBTHAI_MOD_ALT_SHIFT: c_uint = 1 << 1;
pub const LIBTHAI_MOD_CTRL: c_uint = 1 << 2;
pub const LIBTHAI_MOD_ALT: c_uint = 1 << 3;
pub const LIBTHAI_MOD_SUPER: c_uint = 1 << 4;
pub const LIBTHAI_MOD_CAPS_LOCK: c_uint = 1 << 5;
pub const LIBTHAI_MOD_NUM_LOCK: c_uint = 1 << 6;

/// Opaque handle to an engine instance
pub struct EngineHandle {
    engine: ThaiEngine,
}

/// Opaque handle to one input session
pub struct SessionHandle {
    session: Mutex<ThaiSession>,
    host: CallbackHost,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum LibThaiResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorEngineFailure = -3,
    ErrorUtf8Conversion = -4,
    ErrorConfig = -5,
}

/// Text field callbacks supplied by the frontend.
///
/// `get_surrounding_text` stores a pointer to NUL-terminated UTF-8 owned by
/// the frontend (valid until the callback returns to the engine) and the
/// cursor position in characters, and returns non-zero on success.
#[repr(C)]
pub struct LibThaiHostCallbacks {
    pub user_data: *mut c_void,
    pub supports_surrounding_text: Option<extern "C" fn(user_data: *mut c_void) -> c_int>,
    pub get_surrounding_text: Option<
        extern "C" fn(user_data: *mut c_void, text: *mut *const c_char, cursor: *mut c_int) -> c_int,
    >,
    pub delete_surrounding_text: Option<extern "C" fn(user_data: *mut c_void, offset: c_int, len: c_int)>,
    pub commit_text: Option<extern "C" fn(user_data: *mut c_void, text: *const c_char)>,
}

struct CallbackHost {
    callbacks: LibThaiHostCallbacks,
}

impl Host for CallbackHost {
    fn supports_surrounding_text(&self) -> bool {
        match self.callbacks.supports_surrounding_text {
            Some(f) => f(self.callbacks.user_data) != 0,
            None => false,
        }
    }

    fn surrounding_text(&self) -> Option<SurroundingText> {
        let f = self.callbacks.get_surrounding_text?;
        let mut text: *const c_char = ptr::null();
        let mut cursor: c_int = 0;
        if f(self.callbacks.user_data, &mut text, &mut cursor) == 0 || text.is_null() {
            return None;
        }
        let text = unsafe { CStr::from_ptr(text) }.to_str().ok()?.to_string();
        Some(SurroundingText {
            text,
            cursor: usize::try_from(cursor).ok()?,
        })
    }

    fn delete_surrounding_text(&mut self, offset: isize, len: usize) {
        if let Some(f) = self.callbacks.delete_surrounding_text {
            f(self.callbacks.user_data, offset as c_int, len as c_int);
        }
    }

    fn commit_text(&mut self, text: &str) {
        let Some(f) = self.callbacks.commit_text else {
            return;
        };
        match CString::new(text) {
            Ok(c_string) => f(self.callbacks.user_data, c_string.as_ptr()),
            Err(_) => log::warn!("Cannot pass commit text with NUL to host"),
        }
    }
}

/// Output from processing a key event
#[repr(C)]
pub struct ProcessKeyOutput {
    /// Whether the frontend must skip its default handling (0=false, 1=true)
    pub consumed: c_int,
    /// Action type: 0=None, 1=Commit, 2=DeleteAndCommit
    pub action_type: c_int,
    /// Number of characters deleted before the cursor
    pub delete_count: c_int,
    /// Committed text (UTF-8, null-terminated), free with `libthai_free_string`
    pub text: *mut c_char,
}

fn c_str<'a>(s: *const c_char) -> Result<&'a str, LibThaiResult> {
    if s.is_null() {
        return Err(LibThaiResult::ErrorInvalidParameter);
    }
    unsafe { CStr::from_ptr(s) }
        .to_str()
        .map_err(|_| LibThaiResult::ErrorUtf8Conversion)
}

fn modifiers_from_bits(bits: c_uint) -> ModifierState {
    ModifierState {
        shift: bits & LIBTHAI_MOD_SHIFT != 0,
        alt_shift: bits & LIBTHAI_MOD_ALT_SHIFT != 0,
        ctrl: bits & LIBTHAI_MOD_CTRL != 0,
        alt: bits & LIBTHAI_MOD_ALT != 0,
        super_key: bits & LIBTHAI_MOD_SUPER != 0,
        caps_lock: bits & LIBTHAI_MOD_CAPS_LOCK != 0,
        num_lock: bits & LIBTHAI_MOD_NUM_LOCK != 0,
    }
}

/// Creates an engine with default settings
#[no_mangle]
pub extern "C" fn libthai_engine_new() -> *mut EngineHandle {
    Box::into_raw(Box::new(EngineHandle {
        engine: ThaiEngine::default(),
    }))
}

/// Creates an engine backed by a configuration file; a missing or invalid
/// file yields the defaults.
#[no_mangle]
pub extern "C" fn libthai_engine_new_with_config(path: *const c_char) -> *mut EngineHandle {
    let Ok(path) = c_str(path) else {
        return ptr::null_mut();
    };
    Box::into_raw(Box::new(EngineHandle {
        engine: ThaiEngine::with_config_file(path),
    }))
}

/// Frees an engine instance. Sessions created from it stay usable.
#[no_mangle]
pub extern "C" fn libthai_engine_free(handle: *mut EngineHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Replaces the whole configuration
#[no_mangle]
pub extern "C" fn libthai_engine_set_config(
    handle: *mut EngineHandle,
    keyboard_layout: *const c_char,
    correction: c_int,
    strictness: *const c_char,
) -> LibThaiResult {
    if handle.is_null() {
        return LibThaiResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &*handle };

    let parse = || -> Result<EngineConfig, LibThaiResult> {
        let keyboard_layout: KeyboardLayout = c_str(keyboard_layout)?
            .parse()
            .map_err(|_| LibThaiResult::ErrorConfig)?;
        let strictness: Strictness = c_str(strictness)?
            .parse()
            .map_err(|_| LibThaiResult::ErrorConfig)?;
        Ok(EngineConfig {
            keyboard_layout,
            correction: correction != 0,
            strictness,
        })
    };

    match parse() {
        Ok(config) => {
            handle.engine.set_config(config);
            LibThaiResult::Success
        }
        Err(e) => e,
    }
}

/// Applies the keys present in an INI fragment
#[no_mangle]
pub extern "C" fn libthai_engine_apply_config(
    handle: *mut EngineHandle,
    ini_text: *const c_char,
) -> LibThaiResult {
    if handle.is_null() {
        return LibThaiResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &*handle };
    let text = match c_str(ini_text) {
        Ok(text) => text,
        Err(e) => return e,
    };
    match handle.engine.apply_config_text(text) {
        Ok(_) => LibThaiResult::Success,
        Err(e) => {
            log::warn!("Rejected configuration update: {}", e);
            LibThaiResult::ErrorConfig
        }
    }
}

/// Re-reads the configuration file
#[no_mangle]
pub extern "C" fn libthai_engine_reload_config(handle: *mut EngineHandle) -> LibThaiResult {
    if handle.is_null() {
        return LibThaiResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &*handle };
    handle.engine.reload_config();
    LibThaiResult::Success
}

/// Writes the configuration file
#[no_mangle]
pub extern "C" fn libthai_engine_save_config(handle: *mut EngineHandle) -> LibThaiResult {
    if handle.is_null() {
        return LibThaiResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &*handle };
    match handle.engine.save_config() {
        Ok(()) => LibThaiResult::Success,
        Err(e) => {
            log::warn!("Failed to save configuration: {}", e);
            LibThaiResult::ErrorEngineFailure
        }
    }
}

/// Creates a session for a text field
#[no_mangle]
pub extern "C" fn libthai_session_new(
    handle: *mut EngineHandle,
    callbacks: LibThaiHostCallbacks,
) -> *mut SessionHandle {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let handle = unsafe { &*handle };
    let host = CallbackHost { callbacks };
    let session = handle.engine.create_session(&host);
    Box::into_raw(Box::new(SessionHandle {
        session: Mutex::new(session),
        host,
    }))
}

/// Frees a session
#[no_mangle]
pub extern "C" fn libthai_session_free(handle: *mut SessionHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Processes a key event.
///
/// `keycode` is the X11 keycode (evdev + 8), `modifiers` a combination of the
/// `LIBTHAI_MOD_*` bits.
#[no_mangle]
pub extern "C" fn libthai_session_process_key(
    handle: *mut SessionHandle,
    keysym: c_uint,
    keycode: c_uint,
    modifiers: c_uint,
    is_release: c_int,
    output: *mut ProcessKeyOutput,
) -> LibThaiResult {
    if handle.is_null() {
        return LibThaiResult::ErrorInvalidHandle;
    }
    if output.is_null() {
        return LibThaiResult::ErrorInvalidParameter;
    }
    let handle = unsafe { &mut *handle };
    let output = unsafe { &mut *output };
    output.consumed = 0;
    output.action_type = 0;
    output.delete_count = 0;
    output.text = ptr::null_mut();

    let Ok(keycode) = u16::try_from(keycode) else {
        return LibThaiResult::ErrorInvalidParameter;
    };
    let mut event = KeyEvent::new(KeySym(keysym), keycode, modifiers_from_bits(modifiers));
    event.is_release = is_release != 0;

    let result = match handle.session.lock() {
        Ok(mut session) => session.on_key_event(&mut handle.host, &event),
        Err(_) => return LibThaiResult::ErrorEngineFailure,
    };

    output.consumed = if result.consumed { 1 } else { 0 };
    match result.action {
        EditAction::None => {}
        EditAction::Commit(text) => {
            output.action_type = 1;
            output.text = CString::new(text).map_or(ptr::null_mut(), CString::into_raw);
        }
        EditAction::DeleteAndCommit(count, text) => {
            output.action_type = 2;
            output.delete_count = count as c_int;
            output.text = CString::new(text).map_or(ptr::null_mut(), CString::into_raw);
        }
    }
    LibThaiResult::Success
}

fn with_session(handle: *mut SessionHandle, f: impl FnOnce(&mut ThaiSession, &CallbackHost)) -> LibThaiResult {
    if handle.is_null() {
        return LibThaiResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &*handle };
    match handle.session.lock() {
        Ok(mut session) => {
            f(&mut session, &handle.host);
            LibThaiResult::Success
        }
        Err(_) => LibThaiResult::ErrorEngineFailure,
    }
}

/// Clears the session's composition context
#[no_mangle]
pub extern "C" fn libthai_session_reset(handle: *mut SessionHandle) -> LibThaiResult {
    with_session(handle, |session, host| session.on_reset(host))
}

#[no_mangle]
pub extern "C" fn libthai_session_activate(handle: *mut SessionHandle) -> LibThaiResult {
    with_session(handle, |session, host| session.on_activate(host))
}

#[no_mangle]
pub extern "C" fn libthai_session_deactivate(handle: *mut SessionHandle) -> LibThaiResult {
    with_session(handle, |session, _| session.on_deactivate())
}

/// Frees a string allocated by the engine
#[no_mangle]
pub extern "C" fn libthai_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Looks up the Unicode code point a layout produces for an evdev keycode,
/// or 0 when the key is unmapped.
#[no_mangle]
pub extern "C" fn libthai_keycode_to_char(
    keyboard_layout: *const c_char,
    keycode: c_uint,
    shift_level: c_uint,
) -> c_uint {
    let Some(layout) = c_str(keyboard_layout)
        .ok()
        .and_then(|name| name.parse::<KeyboardLayout>().ok())
    else {
        return 0;
    };
    let Ok(level) = ShiftLevel::try_from(shift_level.min(u8::MAX as c_uint) as u8) else {
        return 0;
    };
    u16::try_from(keycode)
        .ok()
        .and_then(|keycode| keymap::map(layout, keycode, level))
        .and_then(|c| c.to_char())
        .map_or(0, |c| c as c_uint)
}

/// Gets the library version
#[no_mangle]
pub extern "C" fn libthai_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
