//! `.jack` file discovery (§6): a single file, or every top-level `.jack`
//! file in a directory (non-recursive).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if path.extension().and_then(|e| e.to_str()) != Some("jack") {
            bail!("{} is not a .jack file", path.display());
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(path)
            .with_context(|| format!("reading directory {}", path.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("jack"))
            .collect();
        files.sort();
        if files.is_empty() {
            bail!("no .jack files found in {}", path.display());
        }
        return Ok(files);
    }

    bail!("{} is neither a file nor a directory", path.display())
}
