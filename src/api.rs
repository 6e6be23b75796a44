use crate::error::FetchError;
use crate::models::review::Review;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;

pub type FetchResult = Result<Vec<Review>, FetchError>;

/// Something the feed can ask for the current review list.
///
/// Futures are `'static` so a poll can outlive the borrow of its source and
/// run on the browser's single-threaded executor.
pub trait ReviewSource {
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, FetchResult>;
}

/// Reads reviews with a plain `GET`, no headers or credentials.
#[derive(Debug, Clone)]
pub struct HttpReviewSource {
    endpoint: String,
}

impl HttpReviewSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReviewSource for HttpReviewSource {
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, FetchResult> {
        let endpoint = self.endpoint.clone();
        async move { get_reviews(&endpoint).await }.boxed_local()
    }
}

pub async fn get_reviews(endpoint: &str) -> FetchResult {
    let response = Request::get(endpoint).send().await?;
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    let body = response.text().await?;
    parse_reviews(&body)
}

/// Decodes a response body that must be a JSON array of reviews.
pub fn parse_reviews(body: &str) -> FetchResult {
    let reviews: Vec<Review> = serde_json::from_str(body)?;
    Ok(reviews)
}
