//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.wingskills`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert!(!config.settings.debug_mode);
        assert!(config.is_enabled("api_request"));
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [settings]
            debug_mode = true

            [skills]
            enabled = ["api_request", "nms_assistant"]

            [skills.custom.api_request]
            use_default_headers = true
            max_retries = 2
            request_timeout = 10
            retry_delay = 1

            [skills.custom.nms_assistant]
            base_url = "https://api.nmsassistant.com"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert!(config.settings.debug_mode);
        assert_eq!(config.skills.enabled.len(), 2);

        let api = config.skill_config("api_request");
        assert_eq!(api["use_default_headers"], true);
        assert_eq!(api["max_retries"], 2);
        assert_eq!(api["request_timeout"], 10);

        let nms = config.skill_config("nms_assistant");
        assert_eq!(nms["base_url"], "https://api.nmsassistant.com");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]").unwrap();
        writeln!(file, "debug_mode = true").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert!(config.settings.debug_mode);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/wingskills.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_nonexistent_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/wingskills.toml")).unwrap();
        assert!(config.is_enabled("api_request"));
    }

    #[test]
    fn test_load_or_default_propagates_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid = [unclosed").unwrap();
        assert!(ConfigLoader::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_wrong_type() {
        let content = r#"
            [settings]
            debug_mode = "yes"
        "#;
        assert!(ConfigLoader::load_str(content).is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("WINGSKILLS_TEST_BASE_URL", "http://localhost:9999");
        }
        let content = r#"
            [skills.custom.nms_assistant]
            base_url = "${WINGSKILLS_TEST_BASE_URL}"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(
            config.skill_config("nms_assistant")["base_url"],
            "http://localhost:9999"
        );
        unsafe {
            std::env::remove_var("WINGSKILLS_TEST_BASE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_WINGSKILLS_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/usr/local/etc/wingskills.toml";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/wingskills.toml");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/wingskills.toml"));
    }
}
