//! JQuery grid assets bundled with the module.
//!
//! Each entry is overridden into the application at the same relative path it
//! has in the module resources. Order matters: copies run in list order and a
//! failure leaves earlier copies in place.

use crate::application::Application;
use crate::error::ScalagenError;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// One bundled file and where it lands inside the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetCopy {
    pub source: &'static str,
    pub destination: &'static str,
}

const fn same_path(path: &'static str) -> AssetCopy {
    AssetCopy {
        source: path,
        destination: path,
    }
}

pub const JQUERY_ASSETS: &[AssetCopy] = &[
    same_path("app/views/main.scala.html"),
    same_path("public/stylesheets/jqgrid.css"),
    same_path("public/stylesheets/main.css"),
    same_path("public/javascripts/jquery-1.5.2.min.js"),
    same_path("public/javascripts/jquery-ui-1.8.1.custom.min.js"),
    same_path("public/javascripts/jquery.custom.format.js"),
    same_path("public/javascripts/jquery.jqGrid.min.js"),
    same_path("public/javascripts/jquery.layout.js"),
    same_path("public/javascripts/i18n/grid.locale-en.js"),
    same_path("public/images/ui-icons_217bc0_256x240.png"),
    same_path("public/images/ui-icons_469bdd_256x240.png"),
];

pub const COPIED_JQUERY_FILES: &str = "~~~~~ Copied JQuery files";

/// Override every JQuery asset into the application, in order.
///
/// Returns the written destination paths. Stops at the first failure.
pub fn install_jquery_assets(
    app: &dyn Application,
    out: &mut dyn Write,
) -> Result<Vec<PathBuf>, ScalagenError> {
    let mut written = Vec::with_capacity(JQUERY_ASSETS.len());
    for asset in JQUERY_ASSETS {
        debug!(source = asset.source, destination = asset.destination, "Overriding asset");
        written.push(app.override_file(asset.source, asset.destination, out)?);
    }
    writeln!(out, "{}", COPIED_JQUERY_FILES).map_err(|e| ScalagenError::io("stdout", e))?;
    info!(count = written.len(), "JQuery assets installed");
    Ok(written)
}
