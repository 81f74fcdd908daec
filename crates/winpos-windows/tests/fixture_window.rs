//! Integration tests against a real top-level window.
//!
//! Each test creates its own window in this process (predefined `STATIC`
//! class, no message loop needed for same-thread calls) and destroys it on
//! drop. They need an interactive desktop session, so they are ignored by
//! default: run with `cargo test -p winpos-windows -- --ignored`.

#![cfg(windows)]

use std::sync::Mutex;

use winpos_core::{ProcessId, Rect, WindowHandle, WindowStyle};
use winpos_windows::{
    Window, get_hwnd_from_pid, get_hwnd_from_title, get_title_from_hwnd, get_window_pos,
    hide_title_bar, make_resizable, set_window_pos, show_title_bar, visible_titled_windows,
};

// ---------------------------------------------------------------------------
// Win32 FFI
// ---------------------------------------------------------------------------

#[allow(non_snake_case)]
mod win32 {
    use std::ffi::c_void;

    pub type HWND = *mut c_void;

    pub const WS_POPUP: u32 = 0x8000_0000;
    pub const WS_VISIBLE: u32 = 0x1000_0000;
    pub const WS_CAPTION: u32 = 0x00C0_0000;
    pub const WS_OVERLAPPEDWINDOW: u32 = 0x00CF_0000;

    #[link(name = "user32")]
    unsafe extern "system" {
        pub fn CreateWindowExW(
            ex_style: u32,
            class: *const u16,
            title: *const u16,
            style: u32,
            x: i32,
            y: i32,
            width: i32,
            height: i32,
            parent: HWND,
            menu: *mut c_void,
            instance: *mut c_void,
            param: *const c_void,
        ) -> HWND;
        pub fn DestroyWindow(hwnd: HWND) -> i32;
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every fixture window belongs to this process, so tests that look windows
/// up by PID must not overlap.
static DESKTOP: Mutex<()> = Mutex::new(());

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(Some(0)).collect()
}

/// A visible top-level window owned by the test thread.
struct FixtureWindow {
    hwnd: win32::HWND,
}

impl FixtureWindow {
    fn create(title: &str, style: u32) -> Self {
        let class = wide("STATIC");
        let title = wide(title);
        let hwnd = unsafe {
            win32::CreateWindowExW(
                0,
                class.as_ptr(),
                title.as_ptr(),
                style | win32::WS_VISIBLE,
                100,
                100,
                640,
                480,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null(),
            )
        };
        assert!(!hwnd.is_null(), "CreateWindowExW failed");
        Self { hwnd }
    }

    fn handle(&self) -> WindowHandle {
        WindowHandle::from_raw(self.hwnd as usize)
    }

    fn style(&self) -> WindowStyle {
        Window::from_handle(self.handle()).style()
    }
}

impl Drop for FixtureWindow {
    fn drop(&mut self) {
        unsafe {
            win32::DestroyWindow(self.hwnd);
        }
    }
}

fn own_pid() -> ProcessId {
    ProcessId::new(std::process::id())
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[test]
#[ignore = "needs an interactive desktop session"]
fn pid_lookup_returns_the_only_titled_window() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    // Arrange
    let fixture = FixtureWindow::create("winpos fixture: pid lookup", win32::WS_OVERLAPPEDWINDOW);

    // Act
    let found = get_hwnd_from_pid(own_pid()).expect("fixture window should be found");

    // Assert
    assert_eq!(found, fixture.handle());
}

#[test]
#[ignore = "needs an interactive desktop session"]
fn pid_lookup_skips_untitled_windows() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    // Arrange
    let _untitled = FixtureWindow::create("", win32::WS_OVERLAPPEDWINDOW);

    // Act
    let err = get_hwnd_from_pid(own_pid()).unwrap_err();

    // Assert
    assert!(err.is_out_of_range());
}

#[test]
#[ignore = "needs an interactive desktop session"]
fn title_lookup_finds_exact_title() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    // Arrange
    let title = "winpos fixture: title lookup";
    let fixture = FixtureWindow::create(title, win32::WS_OVERLAPPEDWINDOW);

    // Act
    let exact = get_hwnd_from_title(title);
    let partial = get_hwnd_from_title("winpos fixture: title");

    // Assert
    assert_eq!(exact, fixture.handle());
    assert!(partial.is_null());
    assert_eq!(get_title_from_hwnd(exact), title);
}

#[test]
#[ignore = "needs an interactive desktop session"]
fn fixture_shows_up_in_visible_titled_windows() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    let fixture = FixtureWindow::create("winpos fixture: list", win32::WS_OVERLAPPEDWINDOW);

    let windows = visible_titled_windows().unwrap();

    assert!(windows.iter().any(|w| w.handle() == fixture.handle()));
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

#[test]
#[ignore = "needs an interactive desktop session"]
fn set_then_get_window_pos_round_trips() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    // Arrange
    let fixture = FixtureWindow::create("winpos fixture: geometry", win32::WS_OVERLAPPEDWINDOW);

    // Act
    set_window_pos(fixture.handle(), 10, 20, 310, 420).unwrap();
    let rect = get_window_pos(fixture.handle()).unwrap();

    // Assert: 300x400 is above any minimum tracking size, so no clamping.
    assert_eq!(rect, Rect::new(10, 20, 310, 420));
}

#[test]
#[ignore = "needs an interactive desktop session"]
fn geometry_on_destroyed_window_is_a_platform_error() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    let handle =
        FixtureWindow::create("winpos fixture: stale", win32::WS_OVERLAPPEDWINDOW).handle();

    let read = get_window_pos(handle).unwrap_err();
    let write = set_window_pos(handle, 0, 0, 100, 100).unwrap_err();

    assert_eq!(read.kind(), winpos_core::ErrorKind::Platform);
    assert_eq!(write.kind(), winpos_core::ErrorKind::Platform);
}

// ---------------------------------------------------------------------------
// Style toggles
// ---------------------------------------------------------------------------

#[test]
#[ignore = "needs an interactive desktop session"]
fn make_resizable_twice_equals_once() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    let fixture = FixtureWindow::create(
        "winpos fixture: resizable",
        win32::WS_POPUP | win32::WS_CAPTION,
    );

    make_resizable(fixture.handle());
    let once = fixture.style();
    make_resizable(fixture.handle());
    let twice = fixture.style();

    assert!(once.contains(WindowStyle::SIZEBOX));
    assert_eq!(once, twice);
}

#[test]
#[ignore = "needs an interactive desktop session"]
fn hide_then_show_restores_caption_but_adds_affordances() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    // Arrange: caption without system menu or minimize/maximize boxes.
    let fixture = FixtureWindow::create(
        "winpos fixture: title bar",
        win32::WS_POPUP | win32::WS_CAPTION,
    );
    let before = fixture.style();

    // Act
    hide_title_bar(fixture.handle());
    let hidden = fixture.style();
    show_title_bar(fixture.handle());
    let shown = fixture.style();

    // Assert
    assert!(!hidden.contains(WindowStyle::CAPTION));
    assert!(shown.contains(WindowStyle::CAPTION));
    assert_ne!(shown, before);
    assert_eq!(
        shown & !before,
        WindowStyle::SYSMENU | WindowStyle::MINIMIZEBOX | WindowStyle::MAXIMIZEBOX
    );
}

#[test]
#[ignore = "needs an interactive desktop session"]
fn hide_title_bar_leaves_system_menu_set() {
    let _desktop = DESKTOP.lock().unwrap_or_else(|e| e.into_inner());

    let fixture = FixtureWindow::create("winpos fixture: hide", win32::WS_OVERLAPPEDWINDOW);

    let written = hide_title_bar(fixture.handle());

    assert_eq!(fixture.style(), written);
    assert!(written.contains(WindowStyle::SYSMENU));
    assert!(written.contains(WindowStyle::MINIMIZEBOX | WindowStyle::MAXIMIZEBOX));
}
