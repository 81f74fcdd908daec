use tracing::debug;
use winpos_core::{Rect, WindowError, WindowHandle, WindowResult};

use windows::Win32::UI::WindowsAndMessaging::{SW_NORMAL, SWP_NOZORDER, SetWindowPos, ShowWindow};

use crate::window::Window;

/// Returns the window's bounding rectangle in screen coordinates.
///
/// The handle is not validated; an invalid one surfaces as the OS error.
pub fn get_window_pos(hwnd: WindowHandle) -> WindowResult<Rect> {
    Window::from_handle(hwnd).rect()
}

/// Restores the window to its normal state, then moves and resizes it to
/// the given edges.
///
/// Z-order is left unchanged. Width and height are `right - left` and
/// `bottom - top`, passed through unvalidated. The OS may enforce a minimum
/// tracking size, in which case a following [`get_window_pos`] reports the
/// clamped rectangle rather than the requested one.
pub fn set_window_pos(
    hwnd: WindowHandle,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
) -> WindowResult<()> {
    let target = Rect::new(left, top, right, bottom);
    let window = Window::from_handle(hwnd);

    debug!(%hwnd, %target, "set_window_pos");

    // SAFETY: ShowWindow and SetWindowPos accept any HWND; an invalid one
    // makes SetWindowPos fail. ShowWindow's BOOL is the previous visibility,
    // not an error.
    unsafe {
        let _ = ShowWindow(window.hwnd(), SW_NORMAL);
        SetWindowPos(
            window.hwnd(),
            None,
            target.left,
            target.top,
            target.width(),
            target.height(),
            SWP_NOZORDER,
        )
        .map_err(WindowError::platform)
    }
}
