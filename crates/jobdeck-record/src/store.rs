//! Record persistence.

use std::path::{Path, PathBuf};

use jobdeck_core::util::files::{allocate_unique_path, ensure_dir, write_file, RECORD_EXTENSION};
use jobdeck_core::Result;

use crate::frontmatter;

/// Render `fields` + `body` and write the record into `dir` under a
/// collision-free filename derived from `stem`.
///
/// Returns the path actually written (`{stem}.md`, or `{stem}-1.md` and
/// so on when earlier submissions already took the name). The directory
/// is created on demand.
pub fn write_record<'a, I>(dir: &Path, stem: &str, fields: I, body: &str) -> Result<PathBuf>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    ensure_dir(dir)?;
    let path = allocate_unique_path(dir, stem, RECORD_EXTENSION);
    write_file(&path, &frontmatter::render(fields, body))?;
    Ok(path)
}
