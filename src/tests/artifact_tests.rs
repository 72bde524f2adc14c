#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::models::artifact::{ Artifact, ArtifactKind };

    #[test]
    fn json_extension_classifies_as_recipe() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("smoke.json"), "{}").unwrap();

        let artifact = Artifact::classify(dir.path(), Path::new("smoke.json")).unwrap();

        assert_eq!(artifact.kind, ArtifactKind::RecipeJson);
        assert_eq!(artifact.name(), "smoke.json");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LOUD.JSON"), "{}").unwrap();
        fs::write(dir.path().join("Project.Xml"), "<project/>").unwrap();

        let recipe = Artifact::classify(dir.path(), Path::new("LOUD.JSON")).unwrap();
        let project = Artifact::classify(dir.path(), Path::new("Project.Xml")).unwrap();

        assert_eq!(recipe.kind, ArtifactKind::RecipeJson);
        assert_eq!(project.kind, ArtifactKind::ProjectXml);
    }

    #[test]
    fn directories_classify_as_composite() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("bundle")).unwrap();

        let artifact = Artifact::classify(dir.path(), Path::new("bundle")).unwrap();

        assert_eq!(artifact.kind, ArtifactKind::CompositeDirectory);
    }

    #[test]
    fn unrecognized_extensions_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "scratch").unwrap();
        fs::write(dir.path().join("no-extension"), "").unwrap();

        assert!(Artifact::classify(dir.path(), Path::new("notes.txt")).is_none());
        assert!(Artifact::classify(dir.path(), Path::new("no-extension")).is_none());
    }
}
