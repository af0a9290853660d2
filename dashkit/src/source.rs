use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::errors::DashError;
use crate::types::Document;

/// Where the precomputed summary comes from. Browser futures are not
/// `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait DocumentSource {
    async fn fetch_document(&self) -> Result<Document, DashError>;
}

/// Plain HTTP GET of the summary document.
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait(?Send)]
impl DocumentSource for HttpSource {
    async fn fetch_document(&self) -> Result<Document, DashError> {
        info!("Fetching interaction data from {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Received {} bytes of interaction data", body.len());
        Document::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned HTTP response on an ephemeral port.
    fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Url::parse(&format!("http://{}/output.json", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_parses_document() {
        let url = serve_once(
            "200 OK",
            r#"{ "by_date": { "2024-01-01": { "total_participants": 3 } } }"#,
        );
        let doc = HttpSource::new(url).fetch_document().await.unwrap();
        assert_eq!(doc.by_date["2024-01-01"].total_participants, 3);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_http_status() {
        let url = serve_once("500 Internal Server Error", "");
        let err = HttpSource::new(url).fetch_document().await.unwrap_err();
        assert!(matches!(err, DashError::HttpStatus(500)));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_fetch_garbage_body_is_parse_error() {
        let url = serve_once("200 OK", "<html>not json</html>");
        let err = HttpSource::new(url).fetch_document().await.unwrap_err();
        assert!(matches!(err, DashError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_refused_connection_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/output.json", addr)).unwrap();
        let err = HttpSource::new(url).fetch_document().await.unwrap_err();
        assert!(matches!(err, DashError::Fetch(_)));
    }
}
