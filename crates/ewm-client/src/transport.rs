//! Transport Client
//!
//! Issues single-attempt JSON requests against the configured origin.
//! Failures are logged here and handed back to the caller unchanged.

use std::rc::Rc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, ErrorPayload};

const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One call against the backend: verb, path relative to the origin,
/// query pairs and an optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Value of the first query pair named `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Anything that can carry an [`ApiRequest`] to the backend.
///
/// Futures are not `Send`: in the browser every request runs on the UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        (**self).send(request).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        (**self).send(request).await
    }
}

/// reqwest-backed transport (fetch on wasm32, hyper elsewhere)
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let method = request.method.as_str();
        let url = self.config.url(&request.path);
        tracing::debug!(method, path = %request.path, "sending request");

        let mut builder = self
            .client
            .request(request.method.to_reqwest(), &url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method, path = %request.path, error = %e, "request did not reach the backend");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::warn!(method, path = %request.path, error = %e, "failed to read response body");
            ApiError::Network(e.to_string())
        })?;

        if !status.is_success() {
            let payload = ErrorPayload::parse(&text);
            tracing::error!(
                method,
                path = %request.path,
                status = status.as_u16(),
                reason = payload.reason.as_deref().unwrap_or(""),
                message = payload.message.as_deref().unwrap_or(""),
                "API error"
            );
            return Err(ApiError::Backend {
                status: status.as_u16(),
                payload,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer it with `status` and `body`, and hand
    /// back the raw request text
    async fn serve_once(status: &'static str, body: &'static str) -> (ApiConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.expect("read request");
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.expect("write response");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (ApiConfig::new(format!("http://{addr}"), 1), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= head_end + 4 + content_length
    }

    #[tokio::test]
    async fn get_sends_json_headers_and_query() {
        let (config, server) = serve_once("200 OK", r#"[{"id":1,"name":"Music"}]"#).await;
        let transport = HttpTransport::new(config);

        let request = ApiRequest::get("/categories")
            .with_query(vec![("from".into(), "0".into()), ("size".into(), "10".into())]);
        let value = transport.send(request).await.expect("request succeeds");

        assert_eq!(value, json!([{"id": 1, "name": "Music"}]));
        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /categories?from=0&size=10 HTTP/1.1"), "{raw}");
        let lower = raw.to_ascii_lowercase();
        assert!(lower.contains("content-type: application/json"));
        assert!(lower.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn post_serializes_body() {
        let (config, server) = serve_once("201 Created", r#"{"id":5,"name":"Music"}"#).await;
        let transport = HttpTransport::new(config);

        let request = ApiRequest::post("/admin/categories")
            .with_body(&json!({"name": "Music"}))
            .unwrap();
        let value = transport.send(request).await.unwrap();

        assert_eq!(value["id"], 5);
        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /admin/categories HTTP/1.1"));
        assert!(raw.ends_with(r#"{"name":"Music"}"#), "{raw}");
    }

    #[tokio::test]
    async fn non_success_status_carries_backend_payload() {
        let (config, server) = serve_once(
            "404 Not Found",
            r#"{"status":"NOT_FOUND","reason":"The required object was not found.","message":"User with id=5 was not found","errors":[]}"#,
        )
        .await;
        let transport = HttpTransport::new(config);

        let err = transport
            .send(ApiRequest::delete("/admin/users/5"))
            .await
            .unwrap_err();

        match err {
            ApiError::Backend { status, payload } => {
                assert_eq!(status, 404);
                assert_eq!(payload.message.as_deref(), Some("User with id=5 was not found"));
            }
            other => panic!("expected backend error, got {other:?}"),
        }
        assert!(server.await.unwrap().starts_with("DELETE /admin/users/5 HTTP/1.1"));
    }

    #[tokio::test]
    async fn empty_success_body_is_null() {
        let (config, server) = serve_once("204 No Content", "").await;
        let transport = HttpTransport::new(config);

        let value = transport
            .send(ApiRequest::delete("/admin/categories/3"))
            .await
            .unwrap();

        assert_eq!(value, Value::Null);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(ApiConfig::new(format!("http://{addr}"), 1));
        let err = transport.send(ApiRequest::get("/categories")).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)), "{err:?}");
    }

    #[test]
    fn query_value_finds_first_pair() {
        let request = ApiRequest::get("/admin/events").with_query(vec![
            ("categories".into(), "1".into()),
            ("categories".into(), "2".into()),
        ]);
        assert_eq!(request.query_value("categories"), Some("1"));
        assert_eq!(request.query_value("paid"), None);
    }
}
