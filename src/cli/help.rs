//! CLI help and command-name contract for logging.

use crate::command::{PluginCommand, COMMANDS, MODULE};

/// Command name for log events (e.g. "generate", "jquery").
pub fn command_name(command: &str) -> &'static str {
    PluginCommand::parse(command).name()
}

/// Text printed by `--list-commands`.
pub fn command_listing() -> String {
    let mut out = format!("~ Commands provided by the {} module:\n", MODULE);
    for name in COMMANDS {
        let description = match PluginCommand::parse(name) {
            PluginCommand::Generate => "Generate Scala code (models, CRUD, tests)",
            PluginCommand::CopyAssets => "Copy the JQuery grid assets into the application",
            PluginCommand::Unrecognized => continue,
        };
        out.push_str(&format!("~   {:<20}{}\n", name, description));
    }
    out
}
