//! Blob reads, writes, and deletes.
//!
//! Writes replace the target: any existing file is deleted first, then the
//! new content is written in full. This is not atomic; a crash mid-write can
//! leave a truncated file. Parent directories are only created by
//! [`save_base64`] and [`upload_file`].

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use rand::Rng;

use crate::encoding::decode_base64;
use crate::generate::randomized_file_name;
use crate::path::join_path;
use crate::{BlobError, Result};

/// Replace the file at `path` with `content`.
///
/// If writing fails after the file was created, the partial file is removed.
pub fn try_write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| BlobError::io("delete", path, e))?;
    }

    let mut file = File::create(path).map_err(|e| BlobError::io("create", path, e))?;

    if let Err(e) = file.write_all(content).and_then(|()| file.flush()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(BlobError::io("write", path, e));
    }

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

pub fn write_bytes(path: &Path, content: &[u8]) -> bool {
    log_failure(try_write_bytes(path, content)).is_some()
}

/// Decode a base64 payload (data-URI prefix allowed) and write it to `path`.
pub fn try_write_base64(path: &Path, base64: &str) -> Result<()> {
    let bytes = decode_base64(base64)?;
    try_write_bytes(path, &bytes)
}

pub fn write_base64(path: &Path, base64: &str) -> bool {
    log_failure(try_write_base64(path, base64)).is_some()
}

/// Write a base64 payload as `folder/file_name`, creating `folder` if needed.
///
/// Returns the joined path that was written.
pub fn try_save_base64(folder: &str, file_name: &str, base64: &str) -> Result<String> {
    let bytes = decode_base64(base64)?;
    fs::create_dir_all(folder).map_err(|e| BlobError::io("create directory", folder, e))?;
    let full_path = join_path([folder, file_name]);
    try_write_bytes(Path::new(&full_path), &bytes)?;
    Ok(full_path)
}

pub fn save_base64(folder: &str, file_name: &str, base64: &str) -> bool {
    log_failure(try_save_base64(folder, file_name, base64)).is_some()
}

/// Read the whole file as UTF-8 text.
pub fn try_read_to_string(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| BlobError::io("open", path, e))?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| BlobError::io("read", path, e))?;
    Ok(text)
}

/// Read the whole file as text; empty on any failure.
pub fn read_to_string(path: &Path) -> String {
    log_failure(try_read_to_string(path)).unwrap_or_default()
}

pub fn try_read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| BlobError::io("read", path, e))
}

pub fn read_bytes(path: &Path) -> Option<Vec<u8>> {
    log_failure(try_read_bytes(path))
}

/// Remove the file at `path`.
///
/// Returns `Ok(false)` when there was nothing to remove.
pub fn try_delete(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| BlobError::io("delete", path, e))?;
    Ok(true)
}

/// `true` only when a file existed and was removed.
pub fn delete(path: &Path) -> bool {
    log_failure(try_delete(path)).unwrap_or(false)
}

/// Copy `source` into `folder` under a random name that keeps its extension.
///
/// Returns the new file name (not the full path).
pub fn try_upload_file<R: Rng + ?Sized>(
    rng: &mut R,
    folder: &Path,
    source: &Path,
) -> Result<String> {
    if !source.is_file() {
        return Err(BlobError::NotFound {
            path: source.to_path_buf(),
        });
    }
    let source_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .ok_or_else(|| BlobError::MissingExtension {
            name: source_name.clone(),
        })?;

    fs::create_dir_all(folder).map_err(|e| BlobError::io("create directory", folder, e))?;

    let file_name = randomized_file_name(rng, &format!("upload.{extension}"))
        .ok_or(BlobError::MissingExtension { name: source_name })?;
    let target = folder.join(&file_name);
    fs::copy(source, &target).map_err(|e| BlobError::io("copy", &target, e))?;

    tracing::info!("Uploaded {} as {}", source.display(), target.display());
    Ok(file_name)
}

/// Lenient form of [`try_upload_file`]; empty string on failure.
pub fn upload_file<R: Rng + ?Sized>(rng: &mut R, folder: &Path, source: &Path) -> String {
    log_failure(try_upload_file(rng, folder, source)).unwrap_or_default()
}

fn log_failure<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    }
}
