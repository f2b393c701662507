//! Upload template
//!
//! The template is the canonical 14-column header row plus one example row.
//! It parses back into exactly one record, so it doubles as a smoke test of
//! the whole pipeline.

use crate::constants::{TEMPLATE_EXAMPLE_ROW, TEMPLATE_HEADERS};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Template text: header and example row joined by `\n`
pub fn template_csv() -> String {
    [TEMPLATE_HEADERS.join(","), TEMPLATE_EXAMPLE_ROW.join(",")].join("\n")
}

/// Write the template to `path`
pub fn write_template(path: &Path) -> Result<usize> {
    let content = template_csv();
    std::fs::write(path, &content)
        .map_err(|e| Error::io(format!("Failed to write template {}", path.display()), e))?;

    info!("Template written to {}", path.display());
    Ok(content.len())
}
