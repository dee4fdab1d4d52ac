//! fretlib — scale generation and left-handed fretboard layout for FretLib.
//!
//! Builds a scale from a root and a scale type, finds every place its notes
//! occur on the fretboard, and lays them out on a mirrored (left-handed)
//! neck where the nut is on the right and string 1 is on top.
//!
//! # Example
//! ```
//! use fretlib::{generate_scale, PitchClass, ScaleType};
//!
//! let scale = generate_scale(PitchClass::C, ScaleType::Major, 12);
//! assert_eq!(scale.name, "C Major");
//! assert_eq!(scale.notes.len(), 7);
//! ```

pub mod error;
pub mod labels;
pub mod markers;
pub mod model;
pub mod renderer;
pub mod theory;

#[cfg(target_os = "android")]
pub mod android;

use log::warn;

pub use error::{FretError, Result};
pub use labels::{label_for, solfege};
pub use markers::{generate_marker_map, marker_map_to_json, MarkerMap};
pub use model::*;
pub use renderer::geometry::{map_to_canvas, CanvasParams, FretboardGeometry, Padding, Point};
pub use renderer::{compute_note_markers, render_scale_to_svg, NoteMarker};
pub use theory::{
    find_positions, formula_of, generate_scale, generate_scale_for, generate_scale_notes, note_at,
    parse_and_generate, CHROMATIC, STANDARD_TUNING,
};

/// Selection made in a host UI, as raw identifiers.
struct Selection {
    scale: Scale,
    instrument: InstrumentConfig,
    canvas: CanvasParams,
    mode: DisplayMode,
}

fn resolve_selection(root: &str, scale_type: &str, guitar_type: &str, mode: &str) -> Result<Selection> {
    let root: PitchClass = root.parse()?;
    let scale_type: ScaleType = scale_type.parse()?;
    let guitar: GuitarType = guitar_type.parse()?;
    let mode: DisplayMode = mode.parse()?;

    let instrument = InstrumentConfig::for_guitar(guitar);
    Ok(Selection {
        scale: generate_scale_for(root, scale_type, &instrument),
        canvas: CanvasParams::for_guitar(guitar),
        instrument,
        mode,
    })
}

/// Convert a scale to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn scale_to_json(scale: &Scale) -> Result<String> {
    Ok(serde_json::to_string_pretty(scale)?)
}

/// Generate and render a scale from UI identifiers in one call.
///
/// `guitar_type` picks the fret count and canvas shape; the neck is always
/// in standard tuning.
pub fn render_selection_to_svg(root: &str, scale_type: &str, guitar_type: &str, mode: &str) -> Result<String> {
    let sel = resolve_selection(root, scale_type, guitar_type, mode)?;
    Ok(render_scale_to_svg(&sel.scale, &sel.instrument, &sel.canvas, sel.mode))
}

/// Generate a scale from UI identifiers and return its marker map as JSON.
pub fn selection_marker_map_json(root: &str, scale_type: &str, guitar_type: &str, mode: &str) -> Result<String> {
    let sel = resolve_selection(root, scale_type, guitar_type, mode)?;
    marker_map_to_json(&generate_marker_map(&sel.scale, &sel.instrument, &sel.canvas, sel.mode))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string argument as UTF-8; `None` for null or invalid input.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn c_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(result: Result<String>, what: &str) -> *mut c_char {
    match result {
        Ok(s) => match CString::new(s) {
            Ok(c) => c.into_raw(),
            Err(e) => {
                warn!("[fretlib] {what} output contains an interior NUL: {e}");
                std::ptr::null_mut()
            }
        },
        Err(e) => {
            warn!("[fretlib] {what} rejected: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a scale selection to SVG and return it as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
/// Returns null if any identifier is not recognised.
///
/// # Safety
/// All arguments must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_scale(
    root: *const c_char,
    scale_type: *const c_char,
    guitar_type: *const c_char,
    mode: *const c_char,
) -> *mut c_char {
    let args = unsafe { (c_arg(root), c_arg(scale_type), c_arg(guitar_type), c_arg(mode)) };
    let (Some(root), Some(scale_type), Some(guitar_type), Some(mode)) = args else {
        return std::ptr::null_mut();
    };
    into_c_string(render_selection_to_svg(root, scale_type, guitar_type, mode), "render")
}

/// Generate a scale on the standard tuning and return it as JSON.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `root` and `scale_type` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_scale_json(
    root: *const c_char,
    scale_type: *const c_char,
    max_fret: u8,
) -> *mut c_char {
    let (Some(root), Some(scale_type)) = (unsafe { c_arg(root) }, unsafe { c_arg(scale_type) }) else {
        return std::ptr::null_mut();
    };
    let json = parse_and_generate(root, scale_type, max_fret).and_then(|s| scale_to_json(&s));
    into_c_string(json, "scale")
}

/// Return the marker map for a scale selection as JSON.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// All arguments must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn fretlib_marker_map(
    root: *const c_char,
    scale_type: *const c_char,
    guitar_type: *const c_char,
    mode: *const c_char,
) -> *mut c_char {
    let args = unsafe { (c_arg(root), c_arg(scale_type), c_arg(guitar_type), c_arg(mode)) };
    let (Some(root), Some(scale_type), Some(guitar_type), Some(mode)) = args else {
        return std::ptr::null_mut();
    };
    into_c_string(selection_marker_map_json(root, scale_type, guitar_type, mode), "marker map")
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
