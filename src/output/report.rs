use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

/// Save rendered output to a file atomically
///
/// The file is either fully replaced or left as it was; a trailing newline
/// is added when missing.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(contents.as_bytes())
        .context("Failed to write report")?;
    if !contents.ends_with('\n') {
        file.write_all(b"\n").context("Failed to write report")?;
    }

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    Ok(())
}
