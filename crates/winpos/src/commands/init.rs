use winpos_core::config;

use super::CliResult;

/// Creates `~/.config/winpos/config.toml` with commented defaults.
///
/// An existing file is left untouched.
pub fn execute() -> CliResult {
    let dir = config::config_dir().ok_or("could not determine home directory")?;
    std::fs::create_dir_all(&dir).map_err(|e| format!("could not create {}: {e}", dir.display()))?;

    let path = dir.join("config.toml");
    if path.exists() {
        println!("Already exists: {}", path.display());
        return Ok(());
    }

    std::fs::write(&path, config::template::generate_config())
        .map_err(|e| format!("could not write {}: {e}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
