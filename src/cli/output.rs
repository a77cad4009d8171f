//! CLI output: error mapping from module errors to the CLI surface.

use crate::error::ScalagenError;

/// Map module errors to a string for CLI output.
pub fn map_error(e: &ScalagenError) -> String {
    match e {
        ScalagenError::JavaNotFound { .. } => e.to_string(),
        _ => format!("~ Error: {}", e),
    }
}
