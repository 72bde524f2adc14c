use std::path::{ Path, PathBuf };

use crate::errors::RunnerResult;

/// The file-set collaborator: produces the ordered list of artifact paths,
/// relative to the recipe root, that a run will process.
///
/// Ordering must be deterministic; the generated report preserves it.
pub trait FileSetResolver {
    fn resolve(&self, root: &Path) -> RunnerResult<Vec<PathBuf>>;
}
