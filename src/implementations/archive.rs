use std::fs::{ self, File };
use std::io;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::errors::RunnerResult;

/// Archive a composite project directory into a zip payload.
pub fn zip_directory(dir: &Path) -> RunnerResult<Vec<u8>> {
    zip_directory_in(dir, &std::env::temp_dir())
}

/// Staging-directory variant of [`zip_directory`].
///
/// The archive is staged through a named temp file inside `staging` that is
/// unlinked when this function returns, on success and on every error path.
pub fn zip_directory_in(dir: &Path, staging: &Path) -> RunnerResult<Vec<u8>> {
    let staging_file = NamedTempFile::new_in(staging)?;
    let mut writer = ZipWriter::new(staging_file.reopen()?);

    add_directory(&mut writer, dir, dir, FileOptions::default())?;
    writer.finish()?;

    let payload = fs::read(staging_file.path())?;
    debug!("Archived {} into {} zipped bytes", dir.display(), payload.len());
    Ok(payload)
}

/// Entries are added in sorted order so the same directory always produces
/// the same archive layout.
fn add_directory(
    writer: &mut ZipWriter<File>,
    root: &Path,
    dir: &Path,
    options: FileOptions
) -> RunnerResult<()> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry_name(root, &path);

        if path.is_dir() {
            writer.add_directory(name, options)?;
            add_directory(writer, root, &path, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut file = File::open(&path)?;
            io::copy(&mut file, writer)?;
        }
    }

    Ok(())
}

/// Archive entry names are root-relative with forward slashes on every
/// platform.
fn entry_name(root: &Path, path: &Path) -> String {
    path
        .strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
