use winpos_core::{ProcessId, Rect, WindowError, WindowHandle, WindowResult, WindowStyle};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, GetWindowLongW, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindowVisible, SetWindowLongW,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the OS.
/// This struct holds that handle and queries the OS on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a platform-agnostic handle.
    pub fn from_handle(handle: WindowHandle) -> Self {
        Self {
            hwnd: HWND(handle.raw() as *mut _),
        }
    }

    /// Returns the platform-agnostic handle for this window.
    pub fn handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.hwnd.0 as usize)
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the window title, or an empty string if it has none.
    pub fn title(&self) -> String {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW only read window
        // text. An invalid HWND yields a length of zero.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return String::new();
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    /// Returns the identifier of the process that created this window.
    pub fn process_id(&self) -> ProcessId {
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes one u32 through the
        // pointer, which refers to a live local.
        unsafe {
            let _ = GetWindowThreadProcessId(self.hwnd, Some(&mut pid as *mut u32));
        }
        ProcessId::new(pid)
    }

    /// Returns whether the window has the `WS_VISIBLE` style.
    ///
    /// A visible window can still be covered or off-screen.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    /// Returns the bounding rectangle in screen coordinates.
    ///
    /// This is the full window rect, invisible resize borders included.
    pub fn rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect writes into a stack-allocated RECT.
        unsafe { GetWindowRect(self.hwnd, &mut rect) }.map_err(WindowError::platform)?;
        Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
    }

    /// Reads `GWL_STYLE`. Zero if the handle is invalid.
    pub fn style(&self) -> WindowStyle {
        // SAFETY: GetWindowLongW reads a window attribute.
        let bits = unsafe { GetWindowLongW(self.hwnd, GWL_STYLE) };
        WindowStyle::from_bits(bits as u32)
    }

    /// Writes `GWL_STYLE`. The result of the write is not checked.
    pub fn set_style(&self, style: WindowStyle) {
        // SAFETY: SetWindowLongW replaces a window attribute; an invalid
        // HWND makes it fail without side effects.
        unsafe {
            let _ = SetWindowLongW(self.hwnd, GWL_STYLE, style.bits() as i32);
        }
    }
}
