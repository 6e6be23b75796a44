use customer_voice::api::{FetchResult, ReviewSource};
use customer_voice::error::FetchError;
use customer_voice::models::review::{parse_timestamp, Review};
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Stand-in for the review service.
///
/// Scripted responses are served in order and the last one repeats once the
/// script runs out, like a backend whose data stopped changing.
pub struct MockReviewSource {
    script: RefCell<VecDeque<FetchResult>>,
    last: RefCell<Option<FetchResult>>,
    calls: Rc<Cell<usize>>,
    hang: bool,
}

impl MockReviewSource {
    pub fn scripted(responses: Vec<FetchResult>) -> Self {
        Self {
            script: RefCell::new(responses.into()),
            last: RefCell::new(None),
            calls: Rc::new(Cell::new(0)),
            hang: false,
        }
    }

    /// A service that accepts requests and never answers.
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::scripted(Vec::new())
        }
    }

    /// Shared request counter that stays readable after the feed is gone.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        self.calls.clone()
    }
}

impl ReviewSource for MockReviewSource {
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, FetchResult> {
        self.calls.set(self.calls.get() + 1);
        if self.hang {
            return future::pending().boxed_local();
        }

        let result = match self.script.borrow_mut().pop_front() {
            Some(next) => {
                *self.last.borrow_mut() = Some(next.clone());
                next
            }
            None => self.last.borrow().clone().unwrap_or_else(|| Ok(Vec::new())),
        };
        future::ready(result).boxed_local()
    }
}

pub fn review(id: i64, user_name: &str, product_name: &str, text: &str) -> Review {
    Review {
        id,
        user_name: user_name.into(),
        product_name: product_name.into(),
        product_review: text.into(),
        created_at: parse_timestamp("2024-01-01T10:00:00Z").unwrap(),
    }
}

pub fn network_error() -> FetchResult {
    Err(FetchError::Network("TypeError: Failed to fetch".into()))
}
