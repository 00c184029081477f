// junit4-convert/src/utils/file_io.rs
//! Reading source files and writing converted ones back.

use anyhow::{Context, Result};
use junit4_convert_core::normalize_line_endings;
use log::debug;
use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TMP_SUFFIX: &str = ".tmp";

/// Reads a source file as UTF-8 text with line endings normalized to `\n`.
///
/// Files in any other encoding are rejected rather than decoded lossily, so
/// an in-place write can never replace bytes it could not read.
pub fn read_input_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let raw = String::from_utf8(bytes).map_err(|e| {
        let offset = e.utf8_error().valid_up_to();
        anyhow::Error::new(e).context(format!(
            "Input file {} is not valid UTF-8 (first invalid byte at offset {}); re-encode it as UTF-8 first",
            path.display(),
            offset
        ))
    })?;
    debug!("Read {} bytes from {}.", raw.len(), path.display());
    Ok(normalize_line_endings(&raw))
}

/// Sibling path used while writing `path`; renamed over it once complete.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}

/// Replaces the contents of `path` with `content`.
///
/// The text goes to a temporary sibling first, is synced to disk and renamed
/// over the original, so a failed write never leaves a half-written source
/// file. The original file's permissions carry over.
pub fn write_converted_file(path: &Path, content: &str) -> Result<()> {
    replace_file_with(path, |file| file.write_all(content.as_bytes()))?;
    debug!("Wrote {} bytes to {}.", content.len(), path.display());
    Ok(())
}

/// Stages `path`'s new contents through `fill` and swaps them in.
///
/// The temporary file is removed on every failure path.
fn replace_file_with<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let permissions = fs::metadata(path)
        .with_context(|| format!("Failed to stat output file: {}", path.display()))?
        .permissions();

    let tmp_path = tmp_path_for(path);
    let replaced = stage_tmp_file(&tmp_path, permissions, fill).and_then(|()| {
        fs::rename(&tmp_path, path).with_context(|| format!("Failed to replace {}", path.display()))
    });

    if replaced.is_err() && tmp_path.exists() {
        let _ = fs::remove_file(&tmp_path);
    }
    replaced
}

fn stage_tmp_file<F>(tmp_path: &Path, permissions: Permissions, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut tmp = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(tmp_path)
        .with_context(|| format!("Failed to create temporary file: {}", tmp_path.display()))?;

    fill(&mut tmp).with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    tmp.flush()?;
    tmp.set_permissions(permissions)
        .with_context(|| format!("Failed to set permissions on {}", tmp_path.display()))?;
    tmp.sync_all()
        .with_context(|| format!("Failed to sync {}", tmp_path.display()))?;
    Ok(())
}
