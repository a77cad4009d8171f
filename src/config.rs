//! Configuration System
//!
//! Layered configuration for the module commands: built-in defaults, the user's
//! global file, then the application's own `conf/scalagen*.toml` files. Tests included.

use crate::error::ScalagenError;
use crate::java::GENERATOR_CLASS;
use crate::logging::LoggingConfig;
use crate::process::Environment;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::app_file::{app_config_paths, environment_name};
pub use sources::global_file::global_config_path;

/// Environment variable naming the module resources directory.
pub const MODULE_ROOT_ENV: &str = "SCALAGEN_MODULE_ROOT";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalagenConfig {
    /// JVM launch settings
    #[serde(default)]
    pub java: JavaConfig,

    /// Where the bundled module resources live
    #[serde(default)]
    pub module: ModuleConfig,

    /// Play framework identity
    #[serde(default)]
    pub play: PlayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavaConfig {
    /// Runtime home; `bin/java` below it is launched. Falls back to `JAVA_HOME`.
    #[serde(default)]
    pub home: Option<PathBuf>,

    /// Extra JVM options, appended after the built-in ones
    #[serde(default)]
    pub options: Vec<String>,

    /// Extra classpath entries, appended after discovered jars
    #[serde(default)]
    pub classpath: Vec<PathBuf>,

    #[serde(default = "default_generator_class")]
    pub generator_class: String,
}

fn default_generator_class() -> String {
    GENERATOR_CLASS.to_string()
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            home: None,
            options: Vec::new(),
            classpath: Vec::new(),
            generator_class: default_generator_class(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl ModuleConfig {
    /// Configured root, else `SCALAGEN_MODULE_ROOT`, else the executable's directory.
    pub fn resolve_root(&self, env: &Environment) -> Result<PathBuf, ScalagenError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        if let Some(root) = env.get(OsStr::new(MODULE_ROOT_ENV)).filter(|r| !r.is_empty()) {
            return Ok(PathBuf::from(root));
        }
        let exe = std::env::current_exe().map_err(|e| ScalagenError::io("current_exe", e))?;
        exe.parent().map(PathBuf::from).ok_or_else(|| {
            ScalagenError::Config(format!(
                "Cannot determine module root from {}; set {}",
                exe.display(),
                MODULE_ROOT_ENV
            ))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Framework id passed as `-Dplay.id`
    #[serde(default)]
    pub id: String,
}

impl ScalagenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ScalagenError> {
        if self.java.generator_class.trim().is_empty() {
            return Err(ScalagenError::Config(
                "java.generator_class cannot be empty".to_string(),
            ));
        }
        if let Some(home) = &self.java.home {
            if home.as_os_str().is_empty() {
                return Err(ScalagenError::Config("java.home cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}
