/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `winpos init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# winpos configuration
# Location: ~/.config/winpos/config.toml

[logging]
# Minimum log level: "trace", "debug", "info", "warn", or "error".
# Passing --verbose on the command line forces "debug".
level = "warn"
# Also append log lines to ~/.config/winpos/logs/winpos.log.
file = false
"##
    .to_string()
}
