mod commands;

use clap::{Parser, Subcommand};

use commands::target::Target;

#[derive(Parser)]
#[command(
    name = "winpos",
    version,
    about = "Find, move, and restyle top-level windows on Windows"
)]
struct Cli {
    /// Log every lookup and style write
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Print the ID of the first process running an executable
    Pid {
        /// Executable file name, e.g. notepad.exe (case-sensitive)
        exe: String,
    },
    /// Print the handle of a window
    Find(Target),
    /// Print a window's title
    Title(Target),
    /// Print a window's rectangle as (left, top, right, bottom)
    Pos(Target),
    /// Restore a window and move it to the given edges
    Move(commands::move_window::MoveArgs),
    /// Give a window a resizable border
    Resizable(Target),
    /// Show or hide a window's title bar
    TitleBar {
        #[command(subcommand)]
        action: TitleBarCommands,
    },
    /// List visible titled windows (or running processes)
    List {
        /// List running processes instead of windows
        #[arg(long)]
        processes: bool,
    },
}

#[derive(Subcommand)]
enum TitleBarCommands {
    /// Set caption, system menu, and minimize/maximize boxes
    Show(Target),
    /// Clear the caption only
    Hide(Target),
}

fn main() {
    let cli = Cli::parse();

    let config = winpos_core::config::load();
    winpos_core::log::init(&config.logging, cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        command => run(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run(command: Commands) -> commands::CliResult {
    match command {
        Commands::Init => commands::init::execute(),
        Commands::Pid { exe } => commands::query::pid(&exe),
        Commands::Find(target) => commands::query::find(&target),
        Commands::Title(target) => commands::query::title(&target),
        Commands::Pos(target) => commands::query::pos(&target),
        Commands::Move(args) => commands::move_window::execute(&args),
        Commands::Resizable(target) => commands::restyle::resizable(&target),
        Commands::TitleBar { action } => match action {
            TitleBarCommands::Show(target) => commands::restyle::show_title_bar(&target),
            TitleBarCommands::Hide(target) => commands::restyle::hide_title_bar(&target),
        },
        Commands::List { processes: true } => commands::list::processes(),
        Commands::List { processes: false } => commands::list::windows(),
    }
}

#[cfg(not(windows))]
fn run(_command: Commands) -> commands::CliResult {
    Err("winpos only supports Windows".into())
}
