use crate::error::{Error, Result};
use crate::metadata::VideoMetadata;
use crate::poster::DEFAULT_IMAGE_BASE;

/**
    Default video metadata API.
*/
pub const DEFAULT_API_BASE: &str = "https://next-video.ft.com";

/**
    Hosts the component talks to.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Metadata API, queried at `{api_base}/api/{id}`.
    pub api_base: String,
    /// Image resizing service used for poster URLs.
    pub image_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }
}

/**
    Source of video metadata.
*/
#[allow(async_fn_in_trait)]
pub trait MetadataSource {
    async fn fetch(&self, id: &str) -> Result<VideoMetadata>;
}

/**
    HTTP client for the video metadata API.
*/
#[derive(Clone, Debug)]
pub struct MetadataClient {
    client: reqwest::Client,
    api_base: String,
}

impl MetadataClient {
    pub fn new() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }

    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, id: &str) -> String {
        format!("{}/api/{}", self.api_base, id)
    }
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for MetadataClient {
    /**
        Fetch metadata for `id`. A non-success status is an error carrying
        the id, status code and status text. No retries.
    */
    async fn fetch(&self, id: &str) -> Result<VideoMetadata> {
        let url = self.url_for(id);
        log::debug!("[fetch] GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[fetch] {} returned {}", url, status);
            return Err(Error::Status {
                id: id.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.json::<VideoMetadata>().await?)
    }
}
