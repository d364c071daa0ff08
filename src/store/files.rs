use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Get the sous directory - checks for local .sous first, then falls back to global ~/.sous
pub fn get_sous_dir() -> Result<PathBuf> {
    // Check for local .sous directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_sous = find_local_sous(&current_dir);

    if let Some(local_dir) = local_sous {
        return Ok(local_dir);
    }

    // Fall back to global ~/.sous
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".sous"))
}

/// Find local .sous directory by walking up the directory tree
fn find_local_sous(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let sous_dir = current.join(".sous");
        if sous_dir.exists() && sous_dir.is_dir() {
            return Some(sous_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the sous directory exists
pub fn ensure_sous_dir() -> Result<PathBuf> {
    let dir = get_sous_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .sous directory in the current directory
pub fn init_local_sous() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let sous_dir = current_dir.join(".sous");

    if sous_dir.exists() {
        anyhow::bail!("Sous directory already exists: {}", sous_dir.display());
    }

    fs::create_dir_all(&sous_dir)
        .with_context(|| format!("Failed to create directory: {}", sous_dir.display()))?;

    Ok(sous_dir)
}

/// Path of a stored plan document (<uuid>.json)
pub fn plan_file(dir: &Path, id: Uuid) -> PathBuf {
    dir.join(format!("{}.json", id))
}

/// All plan documents in a sous directory, sorted by filename
pub fn list_plan_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        // Only <uuid>.json documents count as plans; settings.json and
        // strays are skipped.
        if let Some(stem) = path.file_stem().and_then(|n| n.to_str()) {
            if path.extension().and_then(|e| e.to_str()) == Some("json")
                && Uuid::parse_str(stem).is_ok()
            {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Get path to settings.json (default plan and display options)
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
