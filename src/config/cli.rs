use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize, Parser)]
#[command(name = "feature-fetch")]
#[command(about = "Downloads generated Cucumber feature files from an issue tracker")]
pub struct CliConfig {
    #[arg(long, help = "Base URL of the issue tracker")]
    pub server: String,

    #[arg(long, help = "Project key, at least 2 characters")]
    pub project_key: String,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long, help = "Include scenarios marked as manual")]
    pub include_manual: bool,

    #[arg(long, help = "HTTP proxy server URL")]
    pub proxy_url: Option<String>,

    #[arg(long)]
    pub proxy_username: Option<String>,

    #[arg(long)]
    pub proxy_password: Option<String>,

    #[arg(long, help = "HTTP read timeout in milliseconds")]
    pub timeout_ms: Option<u64>,

    #[arg(long, default_value = "./generated-test-sources/features")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

// Password fields are redacted; the config is logged under --verbose.
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("server", &self.server)
            .field("project_key", &self.project_key)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("include_manual", &self.include_manual)
            .field("proxy_url", &self.proxy_url)
            .field("proxy_username", &self.proxy_username)
            .field("proxy_password", &self.proxy_password.as_ref().map(|_| "***"))
            .field("timeout_ms", &self.timeout_ms)
            .field("output_path", &self.output_path)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn server(&self) -> &str {
        &self.server
    }

    fn project_key(&self) -> &str {
        &self.project_key
    }

    fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    fn include_manual(&self) -> bool {
        self.include_manual
    }

    fn proxy_url(&self) -> Option<&str> {
        self.proxy_url.as_deref()
    }

    fn proxy_username(&self) -> Option<&str> {
        self.proxy_username.as_deref()
    }

    fn proxy_password(&self) -> Option<&str> {
        self.proxy_password.as_deref()
    }

    fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server", &self.server)?;
        validation::validate_project_key(&self.project_key)?;
        validation::validate_path("output_path", &self.output_path)?;

        if let Some(proxy_url) = &self.proxy_url {
            validation::validate_url("proxy_url", proxy_url)?;
        }

        if let Some(timeout_ms) = self.timeout_ms {
            validation::validate_positive_number("timeout_ms", timeout_ms, 1)?;
        }

        Ok(())
    }
}
