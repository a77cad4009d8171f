//! Config loader facade: assembles sources in precedence order.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{app_file, global_file};
use super::ScalagenConfig;
use crate::error::ScalagenError;
use crate::process::Environment;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then the application's conf files.
    ///
    /// `env` selects the env-specific file through `SCALAGEN_ENV`.
    pub fn load(app_root: &Path, env: &Environment) -> Result<ScalagenConfig, ScalagenError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = app_file::add_to_builder(builder, app_root, env)?;
        let config: ScalagenConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(app_root = %app_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Defaults then a single explicit file; other sources are skipped.
    pub fn load_from_file(path: &Path) -> Result<ScalagenConfig, ScalagenError> {
        if !path.is_file() {
            return Err(ScalagenError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let config: ScalagenConfig = builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
