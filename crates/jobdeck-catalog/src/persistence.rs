//! Catalog persistence.
//!
//! Catalogs are written pretty-printed in a single all-or-nothing write:
//! the build reads every record first, then writes once. There is no
//! incremental patching.

use std::path::Path;

use jobdeck_core::util::files::ensure_dir;
use jobdeck_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize `catalog` as pretty JSON to `path`, creating the parent
/// directory on demand.
pub fn save_catalog<T: Serialize>(catalog: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)
        .map_err(|e| Error::serialization(format!("catalog: {e}")))?;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, json).map_err(|e| Error::io_with_path(e, path))?;

    Ok(())
}

/// Load a catalog back from a JSON file.
///
/// The site never reads catalogs through this crate; this exists for
/// round-trip tests and ad-hoc inspection.
pub fn load_catalog<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json =
        std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    serde_json::from_str(&json).map_err(|e| Error::parse(format!("catalog JSON: {e}")))
}
