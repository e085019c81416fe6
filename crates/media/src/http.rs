use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::error::MediaError;
use crate::resolver::MediaResolver;
use crate::types::MediaObject;

/// Content type assumed when the remote server doesn't declare one.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// [`MediaResolver`] that fetches references over HTTP.
///
/// `resolve_reference` downloads the URL and records the response
/// `Content-Type`. `to_bytes` hands back the data only when the stored
/// content type already matches the requested one; this resolver does not
/// transcode between formats.
#[derive(Debug, Default, Clone)]
pub struct HttpMediaResolver {
    client: Client,
}

impl HttpMediaResolver {
    /// Create a resolver with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MediaResolver for HttpMediaResolver {
    async fn resolve_reference(&self, url: &str) -> Result<MediaObject, MediaError> {
        debug!(url, "fetching media reference");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Fetch(format!("HTTP {status} fetching {url}")));
        }

        // Strip any parameters (e.g. "; charset=...") from the declared type.
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map_or_else(|| FALLBACK_CONTENT_TYPE.to_owned(), |v| v.trim().to_owned());

        let data = response
            .bytes()
            .await
            .map_err(|e| MediaError::Fetch(e.to_string()))?;

        debug!(url, content_type, size = data.len(), "media reference resolved");
        Ok(MediaObject { content_type, data })
    }

    async fn to_bytes(
        &self,
        media: &MediaObject,
        content_type: &str,
    ) -> Result<Bytes, MediaError> {
        if content_type == "*/*" || media.content_type == content_type {
            return Ok(media.data.clone());
        }
        Err(MediaError::UnsupportedConversion {
            from: media.content_type.clone(),
            to: content_type.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal mock HTTP server built on tokio that returns canned responses.
    struct MockMediaServer {
        listener: tokio::net::TcpListener,
        base_url: String,
    }

    impl MockMediaServer {
        async fn start() -> Self {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("failed to bind mock server");
            let port = listener.local_addr().unwrap().port();
            let base_url = format!("http://127.0.0.1:{port}");
            Self { listener, base_url }
        }

        /// Accept one connection and respond with the given status code,
        /// content type and body, then shut down.
        async fn respond_once(self, status_code: u16, content_type: &str, body: &[u8]) {
            let (mut stream, _) = self.listener.accept().await.unwrap();

            use tokio::io::{AsyncReadExt, AsyncWriteExt};

            let mut buf = vec![0u8; 16384];
            let _ = stream.read(&mut buf).await.unwrap();

            let header = format!(
                "HTTP/1.1 {status_code} OK\r\n\
                 Content-Type: {content_type}\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\
                 \r\n",
                body.len()
            );
            stream.write_all(header.as_bytes()).await.unwrap();
            stream.write_all(body).await.unwrap();
            stream.shutdown().await.unwrap();
        }
    }

    #[tokio::test]
    async fn resolve_reference_returns_bytes_and_content_type() {
        let server = MockMediaServer::start().await;
        let url = format!("{}/snapshot.png", server.base_url);
        let png = [0x89u8, 0x50, 0x4E, 0x47];

        let server_handle =
            tokio::spawn(async move { server.respond_once(200, "image/png", &png).await });

        let resolver = HttpMediaResolver::new();
        let media = resolver.resolve_reference(&url).await.unwrap();
        server_handle.await.unwrap();

        assert_eq!(media.content_type, "image/png");
        assert_eq!(media.data.as_ref(), &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn resolve_reference_strips_content_type_parameters() {
        let server = MockMediaServer::start().await;
        let url = format!("{}/page", server.base_url);

        let server_handle = tokio::spawn(async move {
            server
                .respond_once(200, "text/html; charset=utf-8", b"<html></html>")
                .await;
        });

        let resolver = HttpMediaResolver::new();
        let media = resolver.resolve_reference(&url).await.unwrap();
        server_handle.await.unwrap();

        assert_eq!(media.content_type, "text/html");
    }

    #[tokio::test]
    async fn resolve_reference_non_success_status_fails() {
        let server = MockMediaServer::start().await;
        let url = format!("{}/missing.png", server.base_url);

        let server_handle =
            tokio::spawn(async move { server.respond_once(404, "text/plain", b"not found").await });

        let resolver = HttpMediaResolver::new();
        let result = resolver.resolve_reference(&url).await;
        server_handle.await.unwrap();

        assert!(matches!(result, Err(MediaError::Fetch(_))));
    }

    #[tokio::test]
    async fn resolve_reference_unreachable_host_fails() {
        // Port 1 on loopback; nothing listens there.
        let resolver = HttpMediaResolver::new();
        let result = resolver.resolve_reference("http://127.0.0.1:1/x.png").await;
        assert!(matches!(result, Err(MediaError::Fetch(_))));
    }

    #[tokio::test]
    async fn to_bytes_matching_type_returns_data() {
        let resolver = HttpMediaResolver::new();
        let media = MediaObject {
            content_type: "image/png".to_owned(),
            data: Bytes::from_static(b"png-bytes"),
        };
        let data = resolver.to_bytes(&media, "image/png").await.unwrap();
        assert_eq!(data.as_ref(), b"png-bytes");
    }

    #[tokio::test]
    async fn to_bytes_wildcard_returns_data() {
        let resolver = HttpMediaResolver::new();
        let media = MediaObject {
            content_type: "image/jpeg".to_owned(),
            data: Bytes::from_static(b"jpeg-bytes"),
        };
        let data = resolver.to_bytes(&media, "*/*").await.unwrap();
        assert_eq!(data.as_ref(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn to_bytes_mismatched_type_fails() {
        let resolver = HttpMediaResolver::new();
        let media = MediaObject {
            content_type: "image/jpeg".to_owned(),
            data: Bytes::from_static(b"jpeg-bytes"),
        };
        let result = resolver.to_bytes(&media, "image/png").await;
        match result {
            Err(MediaError::UnsupportedConversion { from, to }) => {
                assert_eq!(from, "image/jpeg");
                assert_eq!(to, "image/png");
            }
            other => panic!("expected UnsupportedConversion, got {other:?}"),
        }
    }
}
