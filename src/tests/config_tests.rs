#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::config::{ RunnerConfig, RECIPE_PROPERTIES_FILE };
    use crate::errors::RunnerError;

    fn valid_config() -> RunnerConfig {
        RunnerConfig {
            endpoint: "http://testengine.example.com:8080".to_string(),
            username: "admin".to_string(),
            password: "secret".to_string(),
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        valid_config().validate().unwrap();
    }

    #[test]
    fn missing_endpoint_is_a_configuration_error() {
        let config = RunnerConfig {
            endpoint: String::new(),
            ..valid_config()
        };

        assert!(matches!(config.validate(), Err(RunnerError::Config(_))));
    }

    #[test]
    fn malformed_endpoint_is_a_configuration_error() {
        let config = RunnerConfig {
            endpoint: "not a url".to_string(),
            ..valid_config()
        };

        assert!(matches!(config.validate(), Err(RunnerError::Config(_))));
    }

    #[test]
    fn missing_credentials_are_a_configuration_error() {
        let config = RunnerConfig {
            password: String::new(),
            ..valid_config()
        };

        assert!(matches!(config.validate(), Err(RunnerError::Config(_))));
    }

    #[test]
    fn run_properties_come_from_the_properties_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(RECIPE_PROPERTIES_FILE),
            "# defaults\nhost = staging.example.com\ntoken=abc\n! ignored\n"
        ).unwrap();

        let config = RunnerConfig {
            recipe_dir: dir.path().to_path_buf(),
            ..valid_config()
        };

        let properties = config.run_properties().unwrap();

        assert_eq!(properties.len(), 2);
        assert_eq!(properties["host"], "staging.example.com");
        assert_eq!(properties["token"], "abc");
    }

    #[test]
    fn explicit_properties_override_file_values() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(RECIPE_PROPERTIES_FILE), "host=from-file\nkept=yes\n").unwrap();

        let mut config = RunnerConfig {
            recipe_dir: dir.path().to_path_buf(),
            ..valid_config()
        };
        config.properties.insert("host".to_string(), "from-cli".to_string());

        let properties = config.run_properties().unwrap();

        assert_eq!(properties["host"], "from-cli");
        assert_eq!(properties["kept"], "yes");
    }

    #[test]
    fn missing_properties_file_yields_only_overrides() {
        let dir = TempDir::new().unwrap();

        let mut config = RunnerConfig {
            recipe_dir: dir.path().to_path_buf(),
            ..valid_config()
        };
        config.properties.insert("only".to_string(), "override".to_string());

        let properties = config.run_properties().unwrap();

        assert_eq!(properties.len(), 1);
        assert_eq!(properties["only"], "override");
    }

    #[test]
    fn config_loads_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testpilot.yaml");
        fs::write(
            &path,
            "endpoint: http://engine.example.com\nusername: ci\npassword: hunter2\nfail_on_failures: true\n"
        ).unwrap();

        let config = RunnerConfig::from_file(&path).unwrap();

        assert_eq!(config.endpoint, "http://engine.example.com");
        assert_eq!(config.username, "ci");
        assert!(config.fail_on_failures);
        // Unspecified fields keep their defaults.
        assert!(!config.disable_filtering);
    }

    #[test]
    fn unreadable_config_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let result = RunnerConfig::from_file(&dir.path().join("absent.yaml"));

        assert!(matches!(result, Err(RunnerError::Config(_))));
    }
}
