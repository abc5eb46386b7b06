use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Proxy, RequestBuilder};
use std::time::Duration;

/// Builds the feature-archive endpoint URL. The project key is used verbatim;
/// callers are expected to supply an already URL-safe key.
pub fn feature_archive_url(server: &str, project_key: &str, include_manual: bool) -> String {
    format!(
        "{}/rest/cucumber/1.0/project/{}/features?manual={}",
        server, project_key, include_manual
    )
}

/// Builds the HTTP client from the immutable run configuration: proxy routing
/// and read timeout when configured, client defaults otherwise.
pub fn build_client(config: &impl ConfigProvider) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(proxy_url) = config.proxy_url() {
        let mut proxy = Proxy::all(proxy_url)?;
        if let Some(proxy_username) = config.proxy_username() {
            proxy = proxy.basic_auth(proxy_username, config.proxy_password().unwrap_or_default());
        }
        builder = builder.proxy(proxy);
    }

    if let Some(timeout_ms) = config.timeout_ms() {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }

    Ok(builder.build()?)
}

pub fn build_request(client: &Client, config: &impl ConfigProvider) -> RequestBuilder {
    let url = feature_archive_url(
        config.server(),
        config.project_key(),
        config.include_manual(),
    );

    let mut request = client
        .get(&url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/zip");

    if let Some(username) = config.username() {
        request = request.basic_auth(username, config.password());
    }

    request
}
