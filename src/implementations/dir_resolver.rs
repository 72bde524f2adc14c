use std::fs;
use std::path::{ Path, PathBuf };

use log::debug;

use crate::config::RECIPE_PROPERTIES_FILE;
use crate::errors::RunnerResult;
use crate::traits::resolver::FileSetResolver;

/// Default file-set resolver: lists the recipe root in lexicographic order.
///
/// Immediate subdirectories are yielded as composite-project entries and not
/// descended into; their contents travel inside the submitted archive. The
/// run-properties file is not an artifact and is skipped silently.
#[derive(Debug, Default, Clone)]
pub struct DirectoryResolver;

impl FileSetResolver for DirectoryResolver {
    fn resolve(&self, root: &Path) -> RunnerResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(root)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        let mut paths = Vec::new();
        for entry in entries {
            if entry.file_name() == RECIPE_PROPERTIES_FILE {
                continue;
            }
            paths.push(PathBuf::from(entry.file_name()));
        }

        debug!("Resolved {} entries under {}", paths.len(), root.display());
        Ok(paths)
    }
}
