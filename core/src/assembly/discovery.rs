use crate::error::Result;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Lists DICOM files under `root`
///
/// Files are recognized by their Part 10 signature, never by extension.
/// Hidden files are included. A path to a single DICOM file yields that
/// file. The result is sorted by path.
pub fn list_dicom_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(if is_dicom_file(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut files = Vec::new();
    collect_dicom_files(root, recursive, &mut files)?;
    files.sort();

    info!("Found {} DICOM files in {}", files.len(), root.display());
    Ok(files)
}

fn collect_dicom_files(directory: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();

        if path.is_dir() {
            if recursive {
                collect_dicom_files(&path, recursive, files)?;
            }
        } else if path.is_file() {
            if is_dicom_file(&path) {
                files.push(path);
            } else {
                debug!("Skipping non-DICOM file: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Checks if a file has a DICOM Part 10 header
///
/// DICOM files have a 128-byte preamble followed by the 4-byte "DICM" magic.
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}
