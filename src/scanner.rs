//! Input collection
//!
//! Turns the CLI's path arguments (files and/or folders) into validation
//! candidates. Folders are scanned one level deep and sorted by file
//! name; files are taken as given and left to the validator to judge.

use crate::error::{LivestockAiError, Result};
use livestock_ai_common::validator::{mime_from_extension, sniff_mime, CandidateFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file queued for validation, with the metadata the validator needs.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub candidate: CandidateFile,
}

/// Collect candidates from a mix of file and folder paths.
pub fn collect(paths: &[PathBuf]) -> Result<Vec<ImageEntry>> {
    let mut entries = Vec::new();

    for path in paths {
        if path.is_dir() {
            entries.extend(scan_folder(path)?);
        } else if path.is_file() {
            entries.push(entry_for(path)?);
        } else {
            return Err(LivestockAiError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(entries)
}

/// Scan a folder (non-recursive) for files, sorted by file name.
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageEntry>> {
    if !folder.exists() {
        return Err(LivestockAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        entries.push(entry_for(path)?);
    }

    entries.sort_by(|a, b| a.candidate.name.cmp(&b.candidate.name));
    Ok(entries)
}

fn entry_for(path: &Path) -> Result<ImageEntry> {
    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    // Extension first; fall back to sniffing the magic bytes so images
    // without a telling extension still pass validation.
    let mime = match mime_from_extension(path) {
        Some(mime) => Some(mime.to_string()),
        None => {
            let mut header = [0u8; 32];
            let read = read_header(path, &mut header).unwrap_or(0);
            sniff_mime(&header[..read]).map(str::to_string)
        }
    };

    Ok(ImageEntry {
        path: path.to_path_buf(),
        candidate: CandidateFile {
            name,
            mime,
            size: metadata.len(),
        },
    })
}

fn read_header(path: &Path, buf: &mut [u8]) -> std::io::Result<usize> {
    use std::io::Read;
    let mut file = std::fs::File::open(path)?;
    file.read(buf)
}
