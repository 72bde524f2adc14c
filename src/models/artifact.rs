use std::path::{ Path, PathBuf };

/// The submission protocol that applies to one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A JSON-encoded declarative test recipe.
    RecipeJson,
    /// An XML-encoded test project, submitted verbatim.
    ProjectXml,
    /// A project directory, archived and submitted as a composite bundle.
    CompositeDirectory,
}

/// One unit of work: a path relative to the recipe root plus its classified
/// kind. Immutable once classified.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl Artifact {
    /// Classify a resolved entry by case-insensitive extension match.
    ///
    /// Returns `None` for unrecognized entries; the caller warns and moves
    /// on. An unrecognized file never aborts the run.
    pub fn classify(root: &Path, relative: &Path) -> Option<Artifact> {
        if root.join(relative).is_dir() {
            return Some(Artifact {
                path: relative.to_path_buf(),
                kind: ArtifactKind::CompositeDirectory,
            });
        }

        let extension = relative.extension()?.to_str()?.to_lowercase();
        let kind = match extension.as_str() {
            "json" => ArtifactKind::RecipeJson,
            "xml" => ArtifactKind::ProjectXml,
            _ => {
                return None;
            }
        };

        Some(Artifact {
            path: relative.to_path_buf(),
            kind,
        })
    }

    /// Display name used in logs and as the report case name.
    pub fn name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn absolute_path(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}
