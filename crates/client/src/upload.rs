//! Image upload adapters
//!
//! Images never reach the application backend. A picked file is posted
//! straight to an image host, which answers with a public URL; that URL is
//! what the record form stores.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::config::UploadConfig;
use crate::error::ClientError;
use crate::transport::{FormPart, HttpRequest, Method, Transport};

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

// ============================================================================
// ImageFile
// ============================================================================

/// A local image ready to upload
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read a picked file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ClientError::UploadFailed(format!("could not read {}: {e}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }

    fn into_part(self, field: &str) -> FormPart {
        FormPart::File {
            name: field.to_string(),
            file_name: self.file_name,
            mime: self.mime,
            bytes: self.bytes,
        }
    }
}

/// Guess a MIME type from the file extension
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

// ============================================================================
// ImageHost
// ============================================================================

/// Exchanges one local file for a publicly resolvable URL
#[async_trait]
pub trait ImageHost: Send + Sync + std::fmt::Debug {
    /// Short host name for logs
    fn name(&self) -> &'static str;

    async fn upload(&self, file: ImageFile) -> Result<String, ClientError>;
}

/// Send the upload request and pull the URL out of the JSON answer
async fn post_upload(
    transport: &dyn Transport,
    host: &str,
    request: HttpRequest,
    url_paths: &[&[&str]],
) -> Result<String, ClientError> {
    let response = transport.send(request).await.map_err(|e| {
        error!(host, error = %e, "image upload request failed");
        ClientError::UploadFailed(e.to_string())
    })?;
    if !response.is_success() {
        error!(host, status = response.status, "image host rejected upload");
        return Err(ClientError::UploadFailed(format!(
            "{host} returned status {}",
            response.status
        )));
    }

    let value: Value = serde_json::from_str(&response.body)
        .map_err(|e| ClientError::UploadFailed(format!("{host} sent invalid JSON: {e}")))?;
    let url = url_paths
        .iter()
        .find_map(|path| lookup_str(&value, path).filter(|url| !url.is_empty()))
        .ok_or_else(|| ClientError::UploadFailed(format!("{host} response had no image URL")))?;

    info!(host, %url, "image uploaded");
    Ok(url.to_string())
}

fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(value, |current, key| current.get(*key))
        .and_then(Value::as_str)
}

// ============================================================================
// Host A
// ============================================================================

/// imgbb-style host: field `image`, key in the query string
#[derive(Debug, Clone)]
pub struct ImgbbHost {
    transport: Arc<dyn Transport>,
    endpoint: String,
    api_key: String,
}

impl ImgbbHost {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageHost for ImgbbHost {
    fn name(&self) -> &'static str {
        "imgbb"
    }

    async fn upload(&self, file: ImageFile) -> Result<String, ClientError> {
        let params = [("key", self.api_key.as_str())];
        let request = HttpRequest::with_query(Method::Post, &self.endpoint, &params)?
            .multipart(vec![file.into_part("image")]);

        post_upload(
            self.transport.as_ref(),
            self.name(),
            request,
            &[&["data", "url"], &["data", "display_url"]],
        )
        .await
    }
}

// ============================================================================
// Host B
// ============================================================================

/// Cloudinary unsigned upload
#[derive(Debug, Clone)]
pub struct CloudinaryHost {
    transport: Arc<dyn Transport>,
    cloud_name: String,
    upload_preset: String,
    api_key: Option<String>,
}

impl CloudinaryHost {
    pub fn new(
        transport: Arc<dyn Transport>,
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            transport,
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    fn name(&self) -> &'static str {
        "cloudinary"
    }

    async fn upload(&self, file: ImageFile) -> Result<String, ClientError> {
        let mut parts = vec![
            file.into_part("file"),
            FormPart::text("upload_preset", self.upload_preset.clone()),
        ];
        if let Some(key) = &self.api_key {
            parts.push(FormPart::text("api_key", key.clone()));
        }
        let request = HttpRequest::new(Method::Post, self.endpoint()).multipart(parts);

        post_upload(
            self.transport.as_ref(),
            self.name(),
            request,
            &[&["secure_url"]],
        )
        .await
    }
}

/// Build the configured image host
pub fn image_host(config: &UploadConfig, transport: Arc<dyn Transport>) -> Arc<dyn ImageHost> {
    match config {
        UploadConfig::Imgbb { api_key, endpoint } => {
            Arc::new(ImgbbHost::new(transport, endpoint.clone(), api_key.clone()))
        }
        UploadConfig::Cloudinary {
            cloud_name,
            upload_preset,
            api_key,
        } => Arc::new(CloudinaryHost::new(
            transport,
            cloud_name.clone(),
            upload_preset.clone(),
            api_key.clone(),
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Body, MockTransport};
    use serde_json::json;
    use std::io::Write;

    fn png() -> ImageFile {
        ImageFile::new("room.png", vec![0x89, b'P', b'N', b'G'])
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_for("a.JPG"), "image/jpeg");
        assert_eq!(mime_for("b.webp"), "image/webp");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"fake-png").unwrap();

        let image = ImageFile::from_path(file.path()).await.unwrap();
        assert_eq!(image.bytes, b"fake-png");
        assert_eq!(image.mime, "image/png");
        assert!(image.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageFile::from_path(dir.path().join("missing.jpg")).await.unwrap_err();
        assert!(matches!(err, ClientError::UploadFailed(_)));
    }

    #[tokio::test]
    async fn test_imgbb_upload() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"data": {"url": "https://i.ibb.co/abc/room.png"}}));

        let host = ImgbbHost::new(Arc::new(mock.clone()), "https://api.imgbb.com/1/upload", "k1");
        let url = host.upload(png()).await.unwrap();
        assert_eq!(url, "https://i.ibb.co/abc/room.png");

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://api.imgbb.com/1/upload?key=k1");
        match request.body {
            Body::Multipart(parts) => {
                assert_eq!(parts.len(), 1);
                assert_eq!(parts[0].name(), "image");
            }
            other => panic!("expected multipart, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_imgbb_display_url_fallback() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"data": {"display_url": "https://ibb.co/x"}}));
        let host = ImgbbHost::new(Arc::new(mock), "https://api.imgbb.com/1/upload", "k1");
        assert_eq!(host.upload(png()).await.unwrap(), "https://ibb.co/x");
    }

    #[tokio::test]
    async fn test_imgbb_empty_url_falls_back() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            &json!({"data": {"url": "", "display_url": "https://ibb.co/y"}}),
        );
        let host = ImgbbHost::new(Arc::new(mock), "https://api.imgbb.com/1/upload", "k1");
        assert_eq!(host.upload(png()).await.unwrap(), "https://ibb.co/y");
    }

    #[tokio::test]
    async fn test_imgbb_key_is_encoded() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"data": {"url": "https://i.ibb.co/z.png"}}));
        let host = ImgbbHost::new(
            Arc::new(mock.clone()),
            "https://api.imgbb.com/1/upload",
            "a&b=c d",
        );
        host.upload(png()).await.unwrap();
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://api.imgbb.com/1/upload?key=a%26b%3Dc+d"
        );
    }

    #[tokio::test]
    async fn test_cloudinary_upload_fields() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!({"secure_url": "https://res.cloudinary.com/h/x.png"}));

        let host = CloudinaryHost::new(Arc::new(mock.clone()), "haven", "unsigned", Some("key".into()));
        let url = host.upload(png()).await.unwrap();
        assert_eq!(url, "https://res.cloudinary.com/h/x.png");

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "https://api.cloudinary.com/v1_1/haven/image/upload");
        let Body::Multipart(parts) = request.body else {
            panic!("expected multipart");
        };
        let names: Vec<&str> = parts.iter().map(FormPart::name).collect();
        assert_eq!(names, ["file", "upload_preset", "api_key"]);
    }

    #[tokio::test]
    async fn test_upload_failures() {
        let mock = MockTransport::new();
        mock.respond(500, "error")
            .respond_json(200, &json!({"data": {}}))
            .fail("offline");
        let host = ImgbbHost::new(Arc::new(mock), "https://api.imgbb.com/1/upload", "k1");

        for _ in 0..3 {
            let err = host.upload(png()).await.unwrap_err();
            assert!(matches!(err, ClientError::UploadFailed(_)));
        }
    }
}
