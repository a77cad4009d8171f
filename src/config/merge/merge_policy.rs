//! Merge rules: defaults, override order, conflict handling.

use crate::java::GENERATOR_CLASS;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("java.generator_class", GENERATOR_CLASS)?
        .set_default("play.id", "")
}
