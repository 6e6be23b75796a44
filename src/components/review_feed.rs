/// Live review feed: owns the view state and the poll timer for as long as
/// it is mounted.
use leptos::*;
use leptos::logging::{error, log};
use std::rc::Rc;
use crate::api::{HttpReviewSource, ReviewSource};
use crate::components::reviews_list::ReviewsGrid;
use crate::config::FeedConfig;
use crate::poller::{PollSchedule, Poller};
use crate::state::ViewState;

#[component]
pub fn ReviewFeed(
    /// Endpoint and interval; defaults to the hosted review service.
    #[prop(optional)]
    config: Option<FeedConfig>,
    /// Overrides the HTTP source, mainly for tests.
    #[prop(optional)]
    source: Option<Rc<dyn ReviewSource>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = create_rw_signal(ViewState::new());

    let source = source.unwrap_or_else(|| {
        Rc::new(HttpReviewSource::new(config.endpoint.clone())) as Rc<dyn ReviewSource>
    });
    let poller = Poller::new(source, state);

    match config.validate() {
        Ok(()) => {
            let period_ms = config.interval_millis();
            let endpoint = config.endpoint.clone();
            // Effects only run in the browser, so the server render stays in
            // the pending state and never fetches.
            create_effect(move |_| {
                log!("[FEED] Polling {}", endpoint);
                let schedule = PollSchedule::start(poller.clone(), period_ms);
                on_cleanup(move || drop(schedule));
            });
        }
        Err(err) => error!("[FEED] Review polling disabled: {}", err),
    }

    view! { <ReviewsGrid state=state /> }
}
