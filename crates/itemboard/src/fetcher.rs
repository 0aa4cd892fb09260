use crate::prelude::*;
use async_trait::async_trait;
use itemboard_core::error::FetchError;
use itemboard_core::record::Record;
use reqwest::Url;

/// Path of the record list, relative to the base URL
pub const ENDPOINT_PATH: &str = "hiring.json";

/// Source of the record list
///
/// One call issues one request. Implementations never retry.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self) -> std::result::Result<Vec<Record>, FetchError>;
}

/// Fetches the record list over HTTP with a plain `GET`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint_url(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Resolve `hiring.json` against `base_url`
///
/// A missing trailing slash is added first so the last path segment of the
/// base is kept, e.g. `http://host/api` resolves to `http://host/api/hiring.json`.
pub fn endpoint_url(base_url: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()).into());
    }
    if !base.path().ends_with('/') {
        let path = f!("{}/", base.path());
        base.set_path(&path);
    }

    Ok(base
        .join(ENDPOINT_PATH)
        .map_err(|e| invalid(e.to_string()))?)
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self) -> std::result::Result<Vec<Record>, FetchError> {
        log::debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{} returned HTTP {}", self.endpoint, status);
            return Err(FetchError::response(status.as_u16(), body));
        }

        let records: Vec<Record> = response
            .json()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        log::debug!("fetched {} records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    const PAYLOAD: &str = r#"[
        {"id": 4, "listId": 1, "name": "Item 4"},
        {"id": 10, "listId": 2, "name": null},
        {"id": 3, "listId": 2}
    ]"#;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn test_router() -> Router {
        Router::new()
            .route(
                "/ok/hiring.json",
                get(|| async {
                    (
                        [(axum::http::header::CONTENT_TYPE, "application/json")],
                        PAYLOAD,
                    )
                }),
            )
            .route(
                "/fail/hiring.json",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Error 500: Internal Server Error",
                    )
                }),
            )
            .route(
                "/empty/hiring.json",
                get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
            )
            .route(
                "/garbage/hiring.json",
                get(|| async { "definitely not json" }),
            )
    }

    #[test]
    fn test_endpoint_url_default_base() {
        let url = endpoint_url(crate::DEFAULT_BASE_URL).unwrap();

        assert_eq!(
            url.as_str(),
            "https://fetch-hiring.s3.amazonaws.com/hiring.json"
        );
    }

    #[test]
    fn test_endpoint_url_adds_trailing_slash() {
        let url = endpoint_url("http://localhost:8080/api").unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/api/hiring.json");
    }

    #[test]
    fn test_endpoint_url_invalid() {
        assert!(endpoint_url("not a url").is_err());
        assert!(endpoint_url("mailto:someone@example.com").is_err());
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = serve(test_router()).await;
        let fetcher = HttpFetcher::new(&format!("{base}/ok/")).unwrap();

        let records = fetcher.fetch().await.unwrap();

        assert_eq!(
            records,
            vec![
                Record::new(4, 1, Some("Item 4")),
                Record::new(10, 2, None),
                Record::new(3, 2, None),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_non_success_carries_body() {
        let base = serve(test_router()).await;
        let fetcher = HttpFetcher::new(&format!("{base}/fail")).unwrap();

        let err = fetcher.fetch().await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), "Error 500: Internal Server Error");
    }

    #[tokio::test]
    async fn test_fetch_non_success_empty_body() {
        let base = serve(test_router()).await;
        let fetcher = HttpFetcher::new(&format!("{base}/empty")).unwrap();

        let err = fetcher.fetch().await.unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.message(), "Unknown error");
    }

    #[tokio::test]
    async fn test_fetch_not_found_route() {
        let base = serve(test_router()).await;
        let fetcher = HttpFetcher::new(&format!("{base}/missing")).unwrap();

        let err = fetcher.fetch().await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_undecodable_body_is_transport_error() {
        let base = serve(test_router()).await;
        let fetcher = HttpFetcher::new(&format!("{base}/garbage")).unwrap();

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let fetcher = HttpFetcher::new(&format!("http://{addr}/")).unwrap();

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.message().is_empty());
    }
}
