use winpos_core::{WindowHandle, WindowStyle};

use super::CliResult;
use super::target::Target;

pub fn resizable(target: &Target) -> CliResult {
    restyle(target, winpos_windows::make_resizable)
}

pub fn show_title_bar(target: &Target) -> CliResult {
    restyle(target, winpos_windows::show_title_bar)
}

pub fn hide_title_bar(target: &Target) -> CliResult {
    restyle(target, winpos_windows::hide_title_bar)
}

fn restyle(target: &Target, apply: fn(WindowHandle) -> WindowStyle) -> CliResult {
    let handle = target.resolve()?;
    let style = apply(handle);
    println!("Window {handle} style is now {style}");
    Ok(())
}
