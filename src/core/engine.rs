use crate::core::{extract, request, status};
use crate::domain::model::FetchReport;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation;
use std::io::Cursor;
use std::path::Path;

/// Drives one fetch-and-extract run: validate, single GET, status mapping,
/// unpack into the output directory. No retries and no rollback; files
/// written before a failure stay on disk.
pub struct FetchEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> FetchEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<FetchReport> {
        validation::validate_project_key(self.config.project_key())?;

        let output_dir = Path::new(self.config.output_path());
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir)?;
        }

        let client = request::build_client(&self.config)?;
        let http_request = request::build_request(&client, &self.config);

        tracing::debug!(
            "Requesting feature archive for project {} from {}",
            self.config.project_key(),
            self.config.server()
        );
        let response = http_request.send().await?;

        tracing::debug!("Server responded with status {}", response.status());
        status::check_status(response.status())?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        let files_written = extract::extract_archive(Cursor::new(body), output_dir)?;

        tracing::info!("Successfully downloaded {} feature files", files_written);
        Ok(FetchReport { files_written })
    }
}
