use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An opaque identifier for one top-level window.
///
/// The OS owns the window; this is only a number that names it, valid for as
/// long as the window exists. Platform crates convert it to and from their
/// native handle type (`HWND` on Windows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowHandle(usize);

impl WindowHandle {
    /// The sentinel returned when a lookup finds nothing without failing.
    pub const NULL: Self = Self(0);

    /// Wraps a raw pointer-sized handle value.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw pointer-sized handle value.
    pub const fn raw(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Parses a handle from decimal or `0x`-prefixed hex text.
impl FromStr for WindowHandle {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let raw = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => usize::from_str_radix(hex, 16)?,
            None => s.parse()?,
        };
        Ok(Self(raw))
    }
}

/// An opaque identifier for one running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(u32);

impl ProcessId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProcessId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_handles() {
        assert_eq!("4242".parse(), Ok(WindowHandle::from_raw(4242)));
        assert_eq!("0x1A2B".parse(), Ok(WindowHandle::from_raw(0x1A2B)));
        assert_eq!("0X1a2b".parse(), Ok(WindowHandle::from_raw(0x1A2B)));
    }

    #[test]
    fn rejects_garbage_handles() {
        assert!("0x".parse::<WindowHandle>().is_err());
        assert!("notepad".parse::<WindowHandle>().is_err());
        assert!("-5".parse::<WindowHandle>().is_err());
    }

    #[test]
    fn handle_displays_as_hex() {
        assert_eq!(WindowHandle::from_raw(0x30A4E).to_string(), "0x30A4E");
        assert_eq!(WindowHandle::NULL.to_string(), "0x0");
    }

    #[test]
    fn null_sentinel() {
        assert!(WindowHandle::NULL.is_null());
        assert!(WindowHandle::default().is_null());
        assert!(!WindowHandle::from_raw(1).is_null());
    }

    #[test]
    fn parses_process_id() {
        assert_eq!(" 1234 ".parse(), Ok(ProcessId::new(1234)));
        assert!("0x10".parse::<ProcessId>().is_err());
    }
}
