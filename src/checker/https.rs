//! HTTP(S) GET checker.
//!
//! Sends exactly one GET per check. Redirects are not followed, so only a
//! direct 200 counts as accessible. There is no timeout: an endpoint that
//! never answers stalls the check indefinitely.

use crate::checker::traits::Checker;
use crate::error::{CheckError, CheckResult};
use crate::types::{AccessStatus, UrlTarget};
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};

/// Checker backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpsChecker {
    client: Client,
}

impl HttpsChecker {
    /// Create a checker with a client that does not follow redirects.
    pub fn new() -> CheckResult<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(CheckError::ClientBuild)?;

        Ok(Self { client })
    }

    /// Create a checker around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Issue the GET request and return the response status.
    pub async fn fetch_status(&self, url: &str) -> CheckResult<StatusCode> {
        let response = self.client.get(url).send().await?;
        Ok(response.status())
    }
}

/// Fold a request outcome into an access status.
pub fn classify(outcome: &CheckResult<StatusCode>) -> AccessStatus {
    match outcome {
        Ok(code) => AccessStatus::from_status_code(code.as_u16()),
        Err(_) => AccessStatus::Blocked,
    }
}

#[async_trait]
impl Checker for HttpsChecker {
    async fn check(&self, target: &UrlTarget) -> AccessStatus {
        let url = target.request_url();
        tracing::debug!(url, "sending GET request");

        let outcome = self.fetch_status(url).await;
        match &outcome {
            Ok(code) => tracing::debug!(url, status = code.as_u16(), "received response"),
            Err(e) => tracing::warn!(url, error = %e, "error checking URL"),
        }

        classify(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use tokio_test::assert_ok;

    /// Serve one canned response and hand back the request head.
    async fn serve_once(status_line: &'static str) -> (SocketAddr, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nlocation: http://{addr}/elsewhere\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();

            String::from_utf8_lossy(&request).into_owned()
        });

        (addr, handle)
    }

    #[tokio::test]
    async fn test_200_is_accessible() {
        let (addr, server) = serve_once("200 OK").await;
        let checker = HttpsChecker::new().unwrap();
        let target = UrlTarget::unchecked(format!("http://{addr}/status"));

        assert_eq!(checker.check(&target).await, AccessStatus::Accessible);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /status HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_404_is_blocked() {
        let (addr, server) = serve_once("404 Not Found").await;
        let checker = HttpsChecker::new().unwrap();
        let target = UrlTarget::unchecked(format!("http://{addr}/"));

        assert_eq!(checker.check(&target).await, AccessStatus::Blocked);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_other_2xx_is_blocked() {
        let (addr, server) = serve_once("204 No Content").await;
        let checker = HttpsChecker::new().unwrap();
        let target = UrlTarget::unchecked(format!("http://{addr}/"));

        assert_eq!(checker.check(&target).await, AccessStatus::Blocked);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_redirect_is_not_followed() {
        let (addr, server) = serve_once("301 Moved Permanently").await;
        let checker = HttpsChecker::new().unwrap();
        let target = UrlTarget::unchecked(format!("http://{addr}/"));

        let status = assert_ok!(checker.fetch_status(target.request_url()).await);
        assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_blocked() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let checker = HttpsChecker::new().unwrap();
        let target = UrlTarget::unchecked(format!("http://{addr}/"));

        assert!(checker.fetch_status(target.request_url()).await.is_err());
        assert_eq!(checker.check(&target).await, AccessStatus::Blocked);
    }

    #[tokio::test]
    async fn test_unparseable_url_is_blocked() {
        let checker = HttpsChecker::new().unwrap();
        let target = UrlTarget::unchecked("https://exa mple.com");

        assert_eq!(checker.check(&target).await, AccessStatus::Blocked);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&Ok(StatusCode::OK)), AccessStatus::Accessible);
        assert_eq!(classify(&Ok(StatusCode::FORBIDDEN)), AccessStatus::Blocked);
    }
}
