use clap::Args;

use winpos_core::{ProcessId, WindowHandle};

/// Which window a command acts on. Exactly one selector is required.
#[derive(Args, Debug, Clone)]
#[cfg_attr(not(windows), allow(dead_code))]
#[group(required = true, multiple = false)]
pub struct Target {
    /// Window handle (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: Option<WindowHandle>,
    /// First visible titled window of this process
    #[arg(long)]
    pid: Option<ProcessId>,
    /// First visible titled window of the first process running this executable
    #[arg(long)]
    exe: Option<String>,
    /// Window with exactly this title
    #[arg(long)]
    title: Option<String>,
}

#[cfg(windows)]
impl Target {
    /// Looks the window up. A title that matches nothing is an error here,
    /// even though the underlying lookup returns a null handle.
    pub fn resolve(&self) -> Result<WindowHandle, Box<dyn std::error::Error>> {
        let handle = if let Some(hwnd) = self.hwnd {
            hwnd
        } else if let Some(pid) = self.pid {
            winpos_windows::get_hwnd_from_pid(pid)?
        } else if let Some(exe) = &self.exe {
            winpos_windows::get_hwnd_from_exe(exe)?
        } else if let Some(title) = &self.title {
            let handle = winpos_windows::get_hwnd_from_title(title);
            if handle.is_null() {
                return Err(format!("no window titled {title:?}").into());
            }
            handle
        } else {
            return Err("no window selector given".into());
        };

        tracing::debug!(%handle, "resolved target");
        Ok(handle)
    }
}
