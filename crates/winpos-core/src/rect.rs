use std::fmt;

/// A window's bounding rectangle in screen coordinates.
///
/// Stored as edges, the way Win32 reports it. `right >= left` and
/// `bottom >= top` by convention only; nothing here enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left`, wrapping on overflow. Edges are caller input and
    /// are passed to the OS unvalidated.
    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    /// `bottom - top`, wrapping on overflow.
    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
