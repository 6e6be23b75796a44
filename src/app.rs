/// Root of the Customer Voice page: header with the live indicator, then the
/// polled review grid.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{feed_header::FeedHeader, review_feed::ReviewFeed};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/customer-voice.css" />
        <Title text="Customer Voice" />
        <Router>
            <main class="container">
                <Routes>
                    <Route path="" view=FeedPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn FeedPage() -> impl IntoView {
    view! {
        <FeedHeader />
        <ReviewFeed />
    }
}
