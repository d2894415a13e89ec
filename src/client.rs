use crate::error::StabilityError;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::multipart;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::codec::{BytesCodec, FramedRead};
use url::Url;

const DEFAULT_API_URL: &str = "https://api.stability.ai/";

/// The main client for interacting with the Stability AI 3D API.
///
/// It holds the shared `reqwest::Client`, pre-configured with the bearer
/// authorization header, and the base URL for all API requests. It is
/// designed to be cloneable and safe to share across threads.
#[derive(Clone)]
pub struct StabilityClient {
    client: reqwest::Client,
    base_url: Url,
}

impl StabilityClient {
    /// Creates a new `StabilityClient`.
    ///
    /// This method initializes the client with an API key. It first checks
    /// for the `api_key` parameter. If it's `None`, it falls back to the
    /// `STABILITY_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// - `StabilityError::MissingApiKey` if the API key is not provided in either way.
    /// - `StabilityError::InvalidApiKey` if the key cannot be carried in a header.
    /// - `StabilityError::RequestFailed` if the internal HTTP client fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, StabilityError> {
        let api_key = api_key.or_else(|| env::var("STABILITY_API_KEY").ok());
        let Some(key) = api_key else {
            return Err(StabilityError::MissingApiKey);
        };
        Self::new_with_url(key, DEFAULT_API_URL)
    }

    /// Creates a new `StabilityClient` with a custom base URL.
    ///
    /// This is useful for testing or for connecting to a different API
    /// endpoint (e.g., a mock server).
    ///
    /// # Errors
    ///
    /// - `StabilityError::InvalidApiKey` if the key cannot be carried in a header.
    /// - `StabilityError::RequestFailed` if the internal HTTP client fails to build.
    /// - `StabilityError::UrlParseFailed` if the provided `base_url` is invalid.
    pub fn new_with_url(api_key: String, base_url: &str) -> Result<Self, StabilityError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", api_key)
            .parse()
            .map_err(|_| StabilityError::InvalidApiKey)?;
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Generates a 3D model from a local image via the Stable Fast 3D endpoint.
    ///
    /// The image is streamed as the `image` field of a multipart/form-data
    /// request; no other form fields are sent. Unlike the task-based
    /// endpoints of other vendors, Stable Fast 3D is synchronous: the
    /// response body of a 200 answer is the binary `.glb` artifact itself.
    ///
    /// # Arguments
    ///
    /// * `image_path` - The path to the local image file to use for generation.
    ///
    /// # Returns
    ///
    /// The raw bytes of the generated model.
    ///
    /// # Errors
    ///
    /// `StabilityError::ApiError` for any non-200 status, carrying the status
    /// code and the raw response text. No retry is attempted.
    pub async fn stable_fast_3d<P: AsRef<Path>>(
        &self,
        image_path: P,
    ) -> Result<Vec<u8>, StabilityError> {
        let image_path = image_path.as_ref();
        let url = self.base_url.join("v2beta/3d/stable-fast-3d")?;

        let file = fs::File::open(image_path).await?;
        let stream = FramedRead::new(file, BytesCodec::new());
        let file_body = reqwest::Body::wrap_stream(stream);

        let file_name = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StabilityError::IoError(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "Could not determine file name",
                ))
            })?
            .to_string();

        let mime_type = mime_guess::from_path(image_path)
            .first_or_octet_stream()
            .to_string();

        let image_part = multipart::Part::stream(file_body)
            .file_name(file_name)
            .mime_str(&mime_type)?;

        let form = multipart::Form::new().part("image", image_part);

        tracing::debug!(image = %image_path.display(), %url, "submitting generation request");
        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StabilityError::ApiError {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Generates a model from `input` and writes it into `dest_dir`.
    ///
    /// Both paths are validated before any network traffic: a missing input
    /// file or destination directory short-circuits with the corresponding
    /// error and no request is made. On success the artifact is written to
    /// `<dest_dir>/<input_stem>_3d.glb`, truncating any existing file at
    /// that path.
    ///
    /// # Returns
    ///
    /// The path of the written model file.
    pub async fn generate_to_dir<P, Q>(
        &self,
        input: P,
        dest_dir: Q,
    ) -> Result<PathBuf, StabilityError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        let dest_dir = dest_dir.as_ref();

        if !input.exists() {
            return Err(StabilityError::InputNotFound(input.to_path_buf()));
        }
        if !dest_dir.exists() {
            return Err(StabilityError::OutputDirNotFound(dest_dir.to_path_buf()));
        }

        let content = self.stable_fast_3d(input).await?;

        let file_path = dest_dir.join(model_file_name(input));
        let mut file = fs::File::create(&file_path).await?;
        file.write_all(&content).await?;

        tracing::debug!(output = %file_path.display(), bytes = content.len(), "model written");
        Ok(file_path)
    }
}

/// Derives the output filename from the input image path.
///
/// The final extension is stripped and `_3d.glb` appended, so `photo.png`
/// becomes `photo_3d.glb` and `a.b.png` becomes `a.b_3d.glb`.
fn model_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    format!("{}_3d.glb", stem)
}
