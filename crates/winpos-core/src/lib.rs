pub mod config;
pub mod error;
pub mod handle;
pub mod log;
pub mod rect;
pub mod style;

pub use error::{ErrorKind, WindowError, WindowResult};
pub use handle::{ProcessId, WindowHandle};
pub use rect::Rect;
pub use style::WindowStyle;
