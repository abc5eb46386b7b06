use crate::utils::error::{FetchError, Result};
use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Unpacks the archive into `output_dir` and returns the number of regular
/// files written. Entries are processed sequentially with one open file at a
/// time; each handle is closed before the next entry is read. Any failure is
/// reported as a single extraction error, except entry names that would
/// escape the output directory, which keep their own variant.
pub fn extract_archive<R: Read + Seek>(reader: R, output_dir: &Path) -> Result<usize> {
    extract_entries(reader, output_dir).map_err(|e| match e {
        unsafe_path @ FetchError::UnsafeEntryPath { .. } => unsafe_path,
        other => FetchError::ExtractionError {
            message: other.to_string(),
        },
    })
}

fn extract_entries<R: Read + Seek>(reader: R, output_dir: &Path) -> Result<usize> {
    fs::create_dir_all(output_dir)?;

    let mut archive = ZipArchive::new(reader)?;
    let mut files_written = 0;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        // Rejects absolute paths and parent-directory segments.
        let relative_path = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => {
                return Err(FetchError::UnsafeEntryPath {
                    name: entry.name().to_string(),
                })
            }
        };
        let target = output_dir.join(relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&target)?;
        std::io::copy(&mut entry, &mut file)?;
        files_written += 1;

        tracing::debug!("Extracted {}", target.display());
    }

    Ok(files_written)
}
