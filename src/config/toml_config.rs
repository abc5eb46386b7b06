use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub proxy: Option<ProxyConfig>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub url: String,
    pub project_key: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub include_manual: Option<bool>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FetchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values, leaving
    /// unset variables untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn server(&self) -> &str {
        &self.server.url
    }

    fn project_key(&self) -> &str {
        &self.server.project_key
    }

    fn username(&self) -> Option<&str> {
        self.server.username.as_deref()
    }

    fn password(&self) -> Option<&str> {
        self.server.password.as_deref()
    }

    fn include_manual(&self) -> bool {
        self.server.include_manual.unwrap_or(false)
    }

    fn proxy_url(&self) -> Option<&str> {
        self.proxy.as_ref().map(|p| p.url.as_str())
    }

    fn proxy_username(&self) -> Option<&str> {
        self.proxy.as_ref().and_then(|p| p.username.as_deref())
    }

    fn proxy_password(&self) -> Option<&str> {
        self.proxy.as_ref().and_then(|p| p.password.as_deref())
    }

    fn timeout_ms(&self) -> Option<u64> {
        self.server.timeout_ms
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.url", &self.server.url)?;
        validation::validate_project_key(&self.server.project_key)?;
        validation::validate_path("output.path", &self.output.path)?;

        if let Some(proxy) = &self.proxy {
            validation::validate_url("proxy.url", &proxy.url)?;
        }

        if let Some(timeout_ms) = self.server.timeout_ms {
            validation::validate_positive_number("server.timeout_ms", timeout_ms, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[server]
url = "https://issues.example.com"
project_key = "AB"

[output]
path = "./target/features"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.server(), "https://issues.example.com");
        assert_eq!(config.project_key(), "AB");
        assert!(!config.include_manual());
        assert!(config.proxy_url().is_none());
        assert_eq!(config.output_path(), "./target/features");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
url = "https://issues.example.com"
project_key = "PROJ"
username = "bot"
password = "secret"
include_manual = true
timeout_ms = 30000

[proxy]
url = "http://proxy.example.com:3128"
username = "proxyuser"
password = "proxypass"

[output]
path = "./target/features"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.username(), Some("bot"));
        assert!(config.include_manual());
        assert_eq!(config.timeout_ms(), Some(30_000));
        assert_eq!(config.proxy_url(), Some("http://proxy.example.com:3128"));
        assert_eq!(config.proxy_username(), Some("proxyuser"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FEATURE_FETCH_TEST_SERVER", "https://test.example.com");

        let toml_content = r#"
[server]
url = "${FEATURE_FETCH_TEST_SERVER}"
project_key = "AB"

[output]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server(), "https://test.example.com");

        std::env::remove_var("FEATURE_FETCH_TEST_SERVER");
    }

    #[test]
    fn test_config_validation_rejects_short_key() {
        let toml_content = r#"
[server]
url = "https://issues.example.com"
project_key = "A"

[output]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
url = "https://issues.example.com"
project_key = "AB"

[output]
path = "./output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project_key(), "AB");
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("not valid toml [").unwrap_err();
        assert!(matches!(err, FetchError::ConfigError { .. }));
    }
}
