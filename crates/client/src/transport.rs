//! HTTP transport seam
//!
//! Every outgoing call (backend CRUD, image uploads, federated sign-in)
//! goes through [`Transport`]. Production uses [`ReqwestTransport`]; tests
//! and offline previews use [`MockTransport`], which records each request
//! and replays scripted responses in order.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

// ============================================================================
// Request / Response
// ============================================================================

/// HTTP verbs used by the clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// One part of a multipart form
#[derive(Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FormPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

impl fmt::Debug for FormPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPart::Text { name, value } => write!(f, "Text({name}={value})"),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => write!(f, "File({name}: {file_name}, {mime}, {} bytes)", bytes.len()),
        }
    }
}

/// Request body
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

/// A transport-agnostic HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Request to `base` with `params` percent-encoded into the query string
    pub fn with_query(
        method: Method,
        base: &str,
        params: &[(&str, &str)],
    ) -> Result<Self, ClientError> {
        let url = reqwest::Url::parse_with_params(base, params)
            .map_err(|e| ClientError::Config(format!("invalid URL '{base}': {e}")))?;
        Ok(Self::new(method, url.to_string()))
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Body::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a multipart form body
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// JSON body, if any
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `ClientError::Status`
    pub fn error_for_status(self) -> Result<Self, ClientError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::from_status(self.status, &self.body))
        }
    }
}

// ============================================================================
// Transport trait
// ============================================================================

/// Sends one request and returns the raw response.
///
/// Network faults are `Err`; HTTP error statuses are `Ok` so callers decide
/// how to treat them.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

// ============================================================================
// reqwest
// ============================================================================

/// Production transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("haven/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    fn build_form(parts: Vec<FormPart>) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    mime,
                    bytes,
                } => {
                    let part = reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime)
                        .map_err(|e| ClientError::UploadFailed(format!("invalid MIME type: {e}")))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match request.body {
            Body::Empty => req,
            Body::Json(value) => req.json(&value),
            Body::Multipart(parts) => req.multipart(Self::build_form(parts)?),
        };

        let response = req
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Mock
// ============================================================================

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex, MutexGuard};

    use super::*;

    #[derive(Debug, Default)]
    struct MockState {
        routes: Vec<(String, HttpResponse)>,
        responses: VecDeque<Result<HttpResponse, String>>,
        requests: Vec<HttpRequest>,
    }

    /// In-memory transport that replays scripted responses.
    ///
    /// Clones share the same script and request log.
    #[derive(Debug, Clone, Default)]
    pub struct MockTransport {
        state: Arc<Mutex<MockState>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        fn lock(&self) -> MutexGuard<'_, MockState> {
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        /// Queue a response with a raw body
        pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
            self.lock()
                .responses
                .push_back(Ok(HttpResponse::new(status, body)));
            self
        }

        /// Queue a response with a JSON body
        pub fn respond_json(&self, status: u16, body: &Value) -> &Self {
            self.respond(status, body.to_string())
        }

        /// Always answer requests to `url` with this response, ahead of the queue
        pub fn route(&self, url: impl Into<String>, status: u16, body: impl Into<String>) -> &Self {
            self.lock()
                .routes
                .push((url.into(), HttpResponse::new(status, body)));
            self
        }

        /// Queue a network failure
        pub fn fail(&self, message: impl Into<String>) -> &Self {
            self.lock().responses.push_back(Err(message.into()));
            self
        }

        /// Every request sent so far, oldest first
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.lock().requests.clone()
        }

        pub fn request_count(&self) -> usize {
            self.lock().requests.len()
        }

        /// Most recent request
        pub fn last_request(&self) -> Option<HttpRequest> {
            self.lock().requests.last().cloned()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
            let mut state = self.lock();
            let routed = state
                .routes
                .iter()
                .find(|(url, _)| *url == request.url)
                .map(|(_, response)| response.clone());
            state.requests.push(request);
            if let Some(response) = routed {
                return Ok(response);
            }
            match state.responses.pop_front() {
                Some(Ok(response)) => Ok(response),
                Some(Err(message)) => Err(ClientError::Transport(message)),
                None => Err(ClientError::Transport("no scripted response".to_string())),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = HttpRequest::get("http://x").header("Idempotency-Key", "abc");
        assert_eq!(req.header_value("idempotency-key"), Some("abc"));
        assert_eq!(req.header_value("authorization"), None);
    }

    #[test]
    fn test_error_for_status() {
        assert!(HttpResponse::new(201, "{}").error_for_status().is_ok());
        let err = HttpResponse::new(500, "boom").error_for_status().unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mock = MockTransport::new();
        mock.respond_json(200, &json!([])).fail("offline");

        let first = mock.send(HttpRequest::get("http://x/a")).await.unwrap();
        assert_eq!(first.body, "[]");

        let second = mock.send(HttpRequest::get("http://x/b")).await;
        assert!(matches!(second, Err(ClientError::Transport(_))));

        let third = mock.send(HttpRequest::get("http://x/c")).await;
        assert!(third.is_err());
        assert_eq!(mock.request_count(), 3);
        assert_eq!(mock.requests()[1].url, "http://x/b");
    }
}
