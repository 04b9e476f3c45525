// SPDX-License-Identifier: MPL-2.0
//! Typed reqwest client for the campaign backend.

use super::ApiError;
use crate::domain::{BaseImage, Brief, CampaignMap};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

const USER_AGENT: &str = concat!("CampaignStudio/", env!("CARGO_PKG_VERSION"));

/// Answer to a processed brief.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BriefOutcome {
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Builder for configuring a [`CampaignClient`].
#[derive(Debug)]
pub struct CampaignClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    client: Option<Client>,
}

impl CampaignClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            client: None,
        }
    }

    /// Sets a whole-request timeout. Requests wait indefinitely by default.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured reqwest client.
    #[must_use]
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<CampaignClient, ApiError> {
        Url::parse(&self.base_url)
            .map_err(|e| ApiError::Configuration(format!("invalid base URL: {e}")))?;

        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder()
                    .user_agent(USER_AGENT)
                    .redirect(reqwest::redirect::Policy::limited(10));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| ApiError::Configuration(e.to_string()))?
            }
        };

        Ok(CampaignClient {
            client,
            base_url: self.base_url,
        })
    }
}

/// HTTP client for listing campaigns, submitting briefs and fetching assets.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CampaignClient {
    client: Client,
    base_url: String,
}

impl CampaignClient {
    /// Creates a client with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        CampaignClientBuilder::new(base_url).build()
    }

    /// Wraps an existing reqwest client without validating `base_url`.
    pub fn from_parts(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn builder(base_url: impl Into<String>) -> CampaignClientBuilder {
        CampaignClientBuilder::new(base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves asset URLs; relative links are served by the backend itself.
    #[must_use]
    pub fn resolve(&self, url: &str) -> String {
        if Url::parse(url).is_ok() {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            format!("{}/{url}", self.base_url)
        }
    }

    /// Fetches every campaign and its assets.
    pub async fn list_campaigns(&self) -> Result<CampaignMap, ApiError> {
        let url = format!("{}/list-campaigns", self.base_url);
        tracing::debug!(%url, "listing campaigns");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let campaigns: CampaignMap = decode_json(response).await?;
        tracing::info!(count = campaigns.len(), "campaigns listed");
        Ok(campaigns)
    }

    /// Submits a brief with its optional base images.
    ///
    /// Images with an empty description are not sent; callers validate
    /// descriptions beforehand.
    pub async fn process_brief(
        &self,
        brief: &Brief,
        base_images: Vec<BaseImage>,
    ) -> Result<BriefOutcome, ApiError> {
        let url = format!("{}/process-brief", self.base_url);
        let form = build_brief_form(brief, base_images)?;
        tracing::info!(
            campaign = %brief.campaign_name,
            products = brief.products.len(),
            "submitting brief"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let outcome: BriefOutcome = decode_json(response).await?;
        tracing::info!(images = outcome.image_urls.len(), "brief processed");
        Ok(outcome)
    }

    /// Downloads an asset into memory (used for previews).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(self.resolve(url))
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(body.to_vec())
    }

    /// Streams an asset to `destination`, returning the number of bytes written.
    ///
    /// A partially written file is removed on failure.
    pub async fn download_to(&self, url: &str, destination: &Path) -> Result<u64, ApiError> {
        let response = self
            .client
            .get(self.resolve(url))
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let result = stream_to_file(response, destination).await;
        if result.is_err() {
            let _ = tokio::fs::remove_file(destination).await;
        }
        result
    }
}

async fn stream_to_file(response: Response, destination: &Path) -> Result<u64, ApiError> {
    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut file = tokio::fs::File::create(destination).await?;
    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ApiError::Connection(e.to_string()))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    tracing::info!(path = %destination.display(), bytes = written, "download complete");
    Ok(written)
}

/// Reads the body and decodes it, mapping non-success statuses to
/// [`ApiError::Http`].
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Connection(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::from_response(status.as_u16(), &body));
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn build_brief_form(brief: &Brief, base_images: Vec<BaseImage>) -> Result<Form, ApiError> {
    let brief_json = brief
        .to_json()
        .map_err(|e| ApiError::Configuration(e.to_string()))?;
    let mut form = Form::new().text("brief_data", brief_json);

    for image in base_images {
        if image.description.is_empty() {
            continue;
        }
        let mime = guess_image_mime(&image.file_name);
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime)
            .map_err(|e| ApiError::Configuration(e.to_string()))?;
        form = form
            .part(image.slot.file_field(), part)
            .text(image.slot.description_field(), image.description);
    }

    Ok(form)
}

fn guess_image_mime(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_trims_trailing_slash() {
        let client = CampaignClient::new("http://localhost:8000/").expect("valid client");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn builder_rejects_relative_base_url() {
        let err = CampaignClient::new("not a url").expect_err("invalid base url");
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn resolve_keeps_absolute_and_prefixes_relative() {
        let client = CampaignClient::new("http://localhost:8000").expect("valid client");
        assert_eq!(
            client.resolve("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(client.resolve("/files/a.png"), "http://localhost:8000/files/a.png");
        assert_eq!(client.resolve("files/a.png"), "http://localhost:8000/files/a.png");
    }

    #[test]
    fn mime_guess_is_case_insensitive() {
        assert_eq!(guess_image_mime("Dog.PNG"), "image/png");
        assert_eq!(guess_image_mime("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_image_mime("archive"), "application/octet-stream");
    }

    #[test]
    fn outcome_tolerates_missing_fields() {
        let outcome: BriefOutcome = serde_json::from_str("{}").expect("empty object decodes");
        assert!(outcome.image_urls.is_empty());
        assert!(outcome.message.is_none());
    }
}
