use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A window style bitmask (`GWL_STYLE`).
///
/// Only the chrome bits below are named. Every other bit belongs to the
/// application that owns the window and is carried through untouched; each
/// transformation changes exactly the bits it names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowStyle(u32);

impl WindowStyle {
    /// `WS_MAXIMIZEBOX`
    pub const MAXIMIZEBOX: Self = Self(0x0001_0000);
    /// `WS_MINIMIZEBOX`
    pub const MINIMIZEBOX: Self = Self(0x0002_0000);
    /// `WS_SIZEBOX` (also known as `WS_THICKFRAME`), the resizable border.
    pub const SIZEBOX: Self = Self(0x0004_0000);
    /// `WS_SYSMENU`
    pub const SYSMENU: Self = Self(0x0008_0000);
    /// `WS_CAPTION` (`WS_BORDER | WS_DLGFRAME`).
    pub const CAPTION: Self = Self(0x00C0_0000);

    /// Everything `show_title_bar` turns on.
    pub const TITLE_BAR: Self = Self(
        Self::CAPTION.0 | Self::SYSMENU.0 | Self::MINIMIZEBOX.0 | Self::MAXIMIZEBOX.0,
    );

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the resizable border bit.
    #[must_use]
    pub const fn with_resizable(self) -> Self {
        Self(self.0 | Self::SIZEBOX.0)
    }

    /// Sets caption, system menu, and both minimize/maximize boxes together.
    #[must_use]
    pub const fn with_title_bar(self) -> Self {
        Self(self.0 | Self::TITLE_BAR.0)
    }

    /// Clears the caption bit only.
    ///
    /// System menu and minimize/maximize bits stay as they were, so this is
    /// not the inverse of [`with_title_bar`](Self::with_title_bar).
    #[must_use]
    pub const fn without_caption(self) -> Self {
        Self(self.0 & !Self::CAPTION.0)
    }
}

impl BitOr for WindowStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for WindowStyle {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for WindowStyle {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Display for WindowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
