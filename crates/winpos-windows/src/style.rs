//! Read-modify-write toggles on `GWL_STYLE`.
//!
//! None of these validate the handle or check whether the write took.
//! Each returns the style it wrote.

use tracing::debug;
use winpos_core::{WindowHandle, WindowStyle};

use crate::window::Window;

/// Sets the resizable border bit.
pub fn make_resizable(hwnd: WindowHandle) -> WindowStyle {
    update_style(hwnd, WindowStyle::with_resizable)
}

/// Sets caption, system menu, and both minimize/maximize boxes.
pub fn show_title_bar(hwnd: WindowHandle) -> WindowStyle {
    update_style(hwnd, WindowStyle::with_title_bar)
}

/// Clears the caption bit only. System menu and minimize/maximize bits are
/// left as they were.
pub fn hide_title_bar(hwnd: WindowHandle) -> WindowStyle {
    update_style(hwnd, WindowStyle::without_caption)
}

fn update_style(
    hwnd: WindowHandle,
    change: impl FnOnce(WindowStyle) -> WindowStyle,
) -> WindowStyle {
    let window = Window::from_handle(hwnd);
    let old = window.style();
    let new = change(old);

    debug!(%hwnd, %old, %new, "set window style");
    window.set_style(new);
    new
}
