use winpos_core::{WindowError, WindowResult};

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;
use windows::core::BOOL;

use crate::window::Window;

/// Returns every top-level window, in the order `EnumWindows` reports them.
///
/// `EnumWindows` pushes each handle into a callback. We collect them all into
/// a `Vec` before returning, so callers work with a finished sequence and no
/// state survives the call.
pub fn top_level_windows() -> WindowResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). The callback
    // casts it back to &mut Vec<Window> to collect results. This is safe
    // because EnumWindows runs synchronously and the Vec outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )
        .map_err(WindowError::platform)?;
    }

    tracing::trace!(count = windows.len(), "enumerated top-level windows");
    Ok(windows)
}

/// Returns every visible top-level window that has a non-empty title.
pub fn visible_titled_windows() -> WindowResult<Vec<Window>> {
    Ok(top_level_windows()?
        .into_iter()
        .filter(is_visible_with_title)
        .collect())
}

/// Whether a window is a lookup candidate: shown, and titled.
pub(crate) fn is_visible_with_title(window: &Window) -> bool {
    window.is_visible() && !window.title().is_empty()
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Always returns `TRUE`, so enumeration runs to completion.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Window>, cast from top_level_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };
    windows.push(Window::new(hwnd));

    BOOL(1)
}
