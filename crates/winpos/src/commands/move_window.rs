use clap::Args;

use super::CliResult;
use super::target::Target;

/// Arguments for the `move` subcommand.
#[derive(Args)]
#[cfg_attr(not(windows), allow(dead_code))]
pub struct MoveArgs {
    #[command(flatten)]
    target: Target,
    /// Left edge in screen pixels
    #[arg(long, allow_hyphen_values = true)]
    left: i32,
    /// Top edge in screen pixels
    #[arg(long, allow_hyphen_values = true)]
    top: i32,
    /// Right edge in screen pixels
    #[arg(long, allow_hyphen_values = true)]
    right: i32,
    /// Bottom edge in screen pixels
    #[arg(long, allow_hyphen_values = true)]
    bottom: i32,
}

#[cfg(windows)]
pub fn execute(args: &MoveArgs) -> CliResult {
    use winpos_core::Rect;

    let handle = args.target.resolve()?;
    let requested = Rect::new(args.left, args.top, args.right, args.bottom);

    println!("Moving window {handle} to {requested}");
    winpos_windows::set_window_pos(handle, args.left, args.top, args.right, args.bottom)?;

    let actual = winpos_windows::get_window_pos(handle)?;
    if actual != requested {
        eprintln!("Warning: the window settled at {actual} (minimum size or constraints applied)");
    }
    println!("Done.");
    Ok(())
}
