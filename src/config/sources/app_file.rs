//! Application config file source: conf/scalagen.toml and conf/scalagen.{env}.toml

use crate::process::{env_var, Environment};
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Environment variable selecting the env-specific file.
pub const ENV_VAR: &str = "SCALAGEN_ENV";

/// `SCALAGEN_ENV` from the captured environment, `dev` when unset or empty.
pub fn environment_name(env: &Environment) -> String {
    env_var(env, ENV_VAR)
        .filter(|name| !name.is_empty())
        .unwrap_or("dev")
        .to_string()
}

/// Base file then env-specific file, in precedence order.
pub fn app_config_paths(app_root: &Path, env_name: &str) -> [PathBuf; 2] {
    let conf_dir = app_root.join("conf");
    [
        conf_dir.join("scalagen.toml"),
        conf_dir.join(format!("scalagen.{}.toml", env_name)),
    ]
}

/// Add application config files to builder.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    app_root: &Path,
    env: &Environment,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for path in app_config_paths(app_root, &environment_name(env)) {
        if path.exists() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }
    Ok(builder)
}
