use tracing::debug;
use winpos_core::{ProcessId, WindowError, WindowHandle, WindowResult};

use windows::Win32::UI::WindowsAndMessaging::FindWindowW;
use windows::core::PCWSTR;

use crate::enumerate::{is_visible_with_title, top_level_windows};
use crate::process::Snapshot;
use crate::window::Window;

/// Returns the first running process whose executable name is `exe_name`.
///
/// The match is exact and case-sensitive against the snapshot's base name
/// (`notepad.exe`, not a path). With several matches, the first one in
/// snapshot order wins.
///
/// # Errors
///
/// [`WindowError::NoMatchingProcess`] if nothing matches, or a platform
/// error if the snapshot cannot be taken.
pub fn get_pid_from_exe(exe_name: &str) -> WindowResult<ProcessId> {
    let snapshot = Snapshot::processes()?;
    let pids: Vec<ProcessId> = snapshot
        .entries()
        .filter(|entry| entry.exe == exe_name)
        .map(|entry| entry.pid)
        .collect();

    debug!(exe = exe_name, matches = pids.len(), "process lookup");

    pids.first()
        .copied()
        .ok_or_else(|| WindowError::NoMatchingProcess {
            exe: exe_name.to_string(),
        })
}

/// Returns the first visible, titled top-level window owned by `pid`.
///
/// The process is not checked for existence; an unknown `pid` simply owns
/// no windows.
///
/// # Errors
///
/// [`WindowError::NoMatchingWindow`] if no window qualifies, or a platform
/// error if enumeration fails.
pub fn get_hwnd_from_pid(pid: ProcessId) -> WindowResult<WindowHandle> {
    let candidates: Vec<Window> = top_level_windows()?
        .into_iter()
        .filter(|window| window.process_id() == pid && is_visible_with_title(window))
        .collect();

    debug!(%pid, matches = candidates.len(), "window lookup");

    candidates
        .first()
        .map(Window::handle)
        .ok_or(WindowError::NoMatchingWindow { pid })
}

/// [`get_pid_from_exe`] followed by [`get_hwnd_from_pid`].
///
/// # Errors
///
/// Whatever either stage returns, unchanged: [`WindowError::NoMatchingProcess`]
/// when no process runs `exe_name`, [`WindowError::NoMatchingWindow`] when it
/// owns no visible titled window, or a platform error.
pub fn get_hwnd_from_exe(exe_name: &str) -> WindowResult<WindowHandle> {
    get_hwnd_from_pid(get_pid_from_exe(exe_name)?)
}

/// Finds a top-level window by its exact title.
///
/// Returns [`WindowHandle::NULL`] when no window has that title. This never
/// fails: a missing title is a valid, empty answer.
pub fn get_hwnd_from_title(title: &str) -> WindowHandle {
    let wide: Vec<u16> = title.encode_utf16().chain(Some(0)).collect();

    // SAFETY: `wide` is null-terminated and outlives the call.
    let found = unsafe { FindWindowW(PCWSTR::null(), PCWSTR(wide.as_ptr())) };
    let handle = found
        .map(|hwnd| Window::new(hwnd).handle())
        .unwrap_or(WindowHandle::NULL);

    debug!(title, %handle, "title lookup");
    handle
}

/// Returns the window's title text, or an empty string if it has none.
pub fn get_title_from_hwnd(hwnd: WindowHandle) -> String {
    Window::from_handle(hwnd).title()
}
