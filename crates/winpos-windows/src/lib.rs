//! Win32 implementation of the winpos lookups, geometry, and style toggles.
//!
//! Every function is a thin synchronous wrapper over `user32` and the
//! ToolHelp process snapshot. Nothing is cached; each call re-queries the OS.

#![cfg(windows)]

/// Top-level window enumeration.
pub mod enumerate;

/// Reading and setting a window's rectangle.
pub mod geometry;

/// Process and window lookups.
pub mod lookup;

/// Process snapshot walking.
pub mod process;

/// Style bit toggles (resizable border, title bar).
pub mod style;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::{top_level_windows, visible_titled_windows};
pub use geometry::{get_window_pos, set_window_pos};
pub use lookup::{
    get_hwnd_from_exe, get_hwnd_from_pid, get_hwnd_from_title, get_pid_from_exe,
    get_title_from_hwnd,
};
pub use process::{ProcessEntry, processes};
pub use style::{hide_title_bar, make_resizable, show_title_bar};
pub use window::Window;
