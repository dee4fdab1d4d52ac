//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use log::warn;

use crate::{render_selection_to_svg, selection_marker_map_json, Result};

fn read_args(env: &mut JNIEnv, args: [&JString; 4]) -> Option<[String; 4]> {
    let mut out: [String; 4] = Default::default();
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = env.get_string(arg).ok()?.into();
    }
    Some(out)
}

fn to_jstring(env: &mut JNIEnv, result: Result<String>) -> jstring {
    match result {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            warn!("[fretlib] JNI call rejected: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a scale selection to SVG.
///
/// Called from Kotlin as:
///   external fun renderScale(root: String, scaleType: String, guitarType: String, mode: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderScale(
    mut env: JNIEnv,
    _class: JClass,
    root: JString,
    scale_type: JString,
    guitar_type: JString,
    mode: JString,
) -> jstring {
    let Some([root, scale_type, guitar_type, mode]) =
        read_args(&mut env, [&root, &scale_type, &guitar_type, &mode])
    else {
        return std::ptr::null_mut();
    };
    let svg = render_selection_to_svg(&root, &scale_type, &guitar_type, &mode);
    to_jstring(&mut env, svg)
}

/// Marker map for a scale selection, as JSON.
///
/// Called from Kotlin as:
///   external fun markerMap(root: String, scaleType: String, guitarType: String, mode: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_markerMap(
    mut env: JNIEnv,
    _class: JClass,
    root: JString,
    scale_type: JString,
    guitar_type: JString,
    mode: JString,
) -> jstring {
    let Some([root, scale_type, guitar_type, mode]) =
        read_args(&mut env, [&root, &scale_type, &guitar_type, &mode])
    else {
        return std::ptr::null_mut();
    };
    let json = selection_marker_map_json(&root, &scale_type, &guitar_type, &mode);
    to_jstring(&mut env, json)
}
