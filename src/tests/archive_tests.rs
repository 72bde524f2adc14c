#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::implementations::archive::zip_directory_in;

    fn staging_entry_count(staging: &TempDir) -> usize {
        fs::read_dir(staging.path()).unwrap().count()
    }

    #[test]
    fn archives_nested_directory_into_zip_payload() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("settings.xml"), "<settings/>").unwrap();
        fs::create_dir(project.path().join("tests")).unwrap();
        fs::write(project.path().join("tests").join("smoke.xml"), "<test/>").unwrap();

        let staging = TempDir::new().unwrap();
        let payload = zip_directory_in(project.path(), staging.path()).unwrap();

        // Zip local file header magic.
        assert_eq!(&payload[0..4], b"PK\x03\x04");
        assert!(!payload.is_empty());
    }

    #[test]
    fn staging_file_is_removed_after_success() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("recipe.json"), "{}").unwrap();

        let staging = TempDir::new().unwrap();
        zip_directory_in(project.path(), staging.path()).unwrap();

        assert_eq!(staging_entry_count(&staging), 0);
    }

    #[test]
    fn staging_file_is_removed_after_failure() {
        let staging = TempDir::new().unwrap();
        let missing = staging.path().join("does-not-exist");

        let result = zip_directory_in(&missing, staging.path());

        assert!(result.is_err());
        assert_eq!(staging_entry_count(&staging), 0);
    }
}
