// src/sources/http.rs

//! Remote dataset source.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::models::SourceConfig;
use crate::sources::DatasetSource;
use crate::utils::http::{create_async_client, fetch_text};

/// Dataset served over HTTP(S).
pub struct HttpSource {
    url: Url,
    client: Client,
}

impl HttpSource {
    /// Create a source with a client built from the source settings.
    pub fn new(url: Url, config: &SourceConfig) -> Result<Self> {
        let client = create_async_client(config)?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn location(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch(&self) -> Result<String> {
        log::info!("Fetching dataset from {}", self.url);
        fetch_text(&self.client, self.url.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::load_dataset;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request on a local port with a fixed response.
    async fn serve_once(status: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        Url::parse(&format!("http://{addr}/db.json")).unwrap()
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let url = serve_once(
            "200 OK",
            r#"{"posts":[{"url":"http://x/a.deb","archived_snapshots":{"closest":{"url":"http://a/a.deb","timestamp":"20120101000000"}}}]}"#,
        )
        .await;
        let source = HttpSource::new(url, &SourceConfig::default()).unwrap();

        let records = load_dataset(&source).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_available());
    }

    #[tokio::test]
    async fn test_error_status_is_load_error() {
        let url = serve_once("404 Not Found", r#"{"posts":[]}"#).await;
        let source = HttpSource::new(url.clone(), &SourceConfig::default()).unwrap();
        assert_eq!(source.location(), url.as_str());

        let err = load_dataset(&source).await.unwrap_err();
        assert!(err.is_load());
        assert!(err.to_string().contains("404"));
    }
}
