use bytes::Bytes;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::models::AssetConfig;

const USER_AGENT: &str = concat!("sai-charan-portfolio/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server responded with {0}")]
    Status(StatusCode),

    #[error("Invalid asset URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Read-only HTTP access to the static assets served next to the site
#[derive(Clone)]
pub struct AssetClient {
    client: Client,
    config: AssetConfig,
}

impl AssetClient {
    pub fn new(config: AssetConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Resolve `path` against the configured origin
    pub fn asset_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.config.origin)?.join(path)?)
    }

    /// Fetch a whole asset into memory.
    /// Any non-success status is an error and no body is returned.
    pub async fn fetch(&self, path: &str) -> Result<Bytes> {
        let url = self.asset_url(path)?;
        tracing::debug!(%url, "fetching asset");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(origin: &str) -> AssetClient {
        AssetClient::new(AssetConfig::default().with_origin(origin)).unwrap()
    }

    #[test]
    fn test_asset_url_is_rooted_at_origin() {
        let client = client_for("https://example.com/portfolio/");
        let url = client.asset_url("/resume.pdf").unwrap();
        assert_eq!(url.as_str(), "https://example.com/resume.pdf");
    }

    #[test]
    fn test_asset_url_rejects_bad_origin() {
        let client = client_for("not a url");
        assert!(matches!(
            client.asset_url("/resume.pdf"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/resume.pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body(b"%PDF-1.7 test")
            .create_async()
            .await;

        let body = client_for(&server.url()).fetch("/resume.pdf").await.unwrap();

        assert_eq!(&body[..], b"%PDF-1.7 test");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/resume.pdf")
            .with_status(404)
            .create_async()
            .await;

        let err = client_for(&server.url())
            .fetch("/resume.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status(StatusCode::NOT_FOUND)));
    }

    #[tokio::test]
    async fn test_fetch_reports_transport_failure() {
        // Nothing listens on port 1.
        let err = client_for("http://127.0.0.1:1/")
            .fetch("/resume.pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::RequestError(_)));
    }
}
