use leptos::*;
use crate::components::review_card::ReviewCard;
use crate::state::{FeedDisplay, ViewState};

pub const EMPTY_STATE_TEXT: &str = "No reviews yet. Waiting for WhatsApp messages...";

/// Grid of review cards, or the empty-state message once polling has
/// answered with nothing. Renders nothing while the first poll is pending.
#[component]
pub fn ReviewsGrid(#[prop(into)] state: Signal<ViewState>) -> impl IntoView {
    let display = create_memo(move |_| state.with(ViewState::display));

    view! {
        <div class="reviews-grid">
            {move || match display.get() {
                FeedDisplay::Pending => ().into_view(),
                FeedDisplay::Empty => view! {
                    <div class="empty-state">{ EMPTY_STATE_TEXT }</div>
                }.into_view(),
                FeedDisplay::Cards => view! {
                    <For
                        each=move || state.with(|view| view.reviews().to_vec())
                        // Whole record: ids are not stable across polls
                        key=|review| review.clone()
                        children=|review| view! { <ReviewCard review=review /> }
                    />
                }.into_view(),
            }}
        </div>
    }
}
