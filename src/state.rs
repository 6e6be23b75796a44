use crate::models::review::Review;

/// What the feed area should show for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedDisplay {
    /// First poll still outstanding and nothing to show yet.
    Pending,
    /// Polls have resolved and there are no reviews.
    Empty,
    /// One card per review.
    Cards,
}

/// Reviews on screen plus the loading flag, owned by one feed instance.
///
/// `loading` starts true and goes false the first time any poll settles.
/// `reviews` is only ever replaced wholesale by a successful poll that was
/// issued after the one currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    reviews: Vec<Review>,
    loading: bool,
    applied_seq: Option<u64>,
    failed_polls: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            loading: true,
            applied_seq: None,
            failed_polls: 0,
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of polls that ended in a fetch or decode failure.
    pub fn failed_polls(&self) -> u32 {
        self.failed_polls
    }

    /// Sequence number of the response currently shown, if any.
    pub fn applied_seq(&self) -> Option<u64> {
        self.applied_seq
    }

    pub fn display(&self) -> FeedDisplay {
        if !self.reviews.is_empty() {
            FeedDisplay::Cards
        } else if self.loading {
            FeedDisplay::Pending
        } else {
            FeedDisplay::Empty
        }
    }

    /// Replaces the reviews with the response of poll `seq`.
    ///
    /// Returns false, leaving the reviews alone, when a later-issued poll has
    /// already been applied.
    pub fn apply_success(&mut self, seq: u64, reviews: Vec<Review>) -> bool {
        self.loading = false;
        if self.applied_seq.is_some_and(|last| seq <= last) {
            return false;
        }
        self.reviews = reviews;
        self.applied_seq = Some(seq);
        true
    }

    pub fn apply_failure(&mut self) {
        self.loading = false;
        self.failed_polls = self.failed_polls.saturating_add(1);
    }
}
