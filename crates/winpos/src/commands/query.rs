use super::CliResult;
use super::target::Target;

pub fn pid(exe: &str) -> CliResult {
    println!("{}", winpos_windows::get_pid_from_exe(exe)?);
    Ok(())
}

pub fn find(target: &Target) -> CliResult {
    println!("{}", target.resolve()?);
    Ok(())
}

pub fn title(target: &Target) -> CliResult {
    println!("{}", winpos_windows::get_title_from_hwnd(target.resolve()?));
    Ok(())
}

pub fn pos(target: &Target) -> CliResult {
    println!("{}", winpos_windows::get_window_pos(target.resolve()?)?);
    Ok(())
}
