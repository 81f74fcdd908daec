use std::mem;

use winpos_core::{ProcessId, WindowError, WindowResult};

use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
    TH32CS_SNAPPROCESS,
};

/// One record from a process snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: ProcessId,
    /// Executable base name, e.g. `notepad.exe`.
    pub exe: String,
}

impl From<&PROCESSENTRY32W> for ProcessEntry {
    fn from(entry: &PROCESSENTRY32W) -> Self {
        let name = &entry.szExeFile;
        let len = name.iter().position(|&c| c == 0).unwrap_or(name.len());
        Self {
            pid: ProcessId::new(entry.th32ProcessID),
            exe: String::from_utf16_lossy(&name[..len]),
        }
    }
}

/// An open ToolHelp process snapshot.
///
/// The handle is closed when the guard drops, so every exit path of the
/// caller releases it, early returns and `?` included.
pub(crate) struct Snapshot {
    handle: HANDLE,
}

impl Snapshot {
    /// Captures the list of running processes.
    pub(crate) fn processes() -> WindowResult<Self> {
        // SAFETY: CreateToolhelp32Snapshot has no preconditions; the
        // returned handle is owned by the guard from here on.
        let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
            .map_err(WindowError::platform)?;
        Ok(Self { handle })
    }

    /// Walks the snapshot from the first record. Can be called again to
    /// restart.
    pub(crate) fn entries(&self) -> Entries<'_> {
        Entries {
            snapshot: self,
            entry: PROCESSENTRY32W {
                dwSize: mem::size_of::<PROCESSENTRY32W>() as u32,
                ..Default::default()
            },
            started: false,
            finished: false,
        }
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // SAFETY: the handle came from CreateToolhelp32Snapshot and is
        // closed exactly once, here.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Iterator over the records of a [`Snapshot`].
pub(crate) struct Entries<'a> {
    snapshot: &'a Snapshot,
    entry: PROCESSENTRY32W,
    started: bool,
    finished: bool,
}

impl Iterator for Entries<'_> {
    type Item = ProcessEntry;

    fn next(&mut self) -> Option<ProcessEntry> {
        if self.finished {
            return None;
        }

        // SAFETY: `entry` is a live PROCESSENTRY32W with dwSize set, and the
        // snapshot handle stays open for the borrow's lifetime.
        let advanced = unsafe {
            if self.started {
                Process32NextW(self.snapshot.handle, &mut self.entry)
            } else {
                Process32FirstW(self.snapshot.handle, &mut self.entry)
            }
        };
        self.started = true;

        // Both calls fail with ERROR_NO_MORE_FILES at the end of the list.
        if advanced.is_err() {
            self.finished = true;
            return None;
        }

        Some(ProcessEntry::from(&self.entry))
    }
}

/// Lists every running process, in snapshot order.
pub fn processes() -> WindowResult<Vec<ProcessEntry>> {
    let snapshot = Snapshot::processes()?;
    Ok(snapshot.entries().collect())
}
