use leptos::*;
use crate::components::live_indicator::LiveIndicator;

pub const TITLE: &str = "📢 Customer Voice";
pub const SUBTITLE: &str = "Real-time feedback from WhatsApp";

#[component]
pub fn FeedHeader() -> impl IntoView {
    view! {
        <div class="header">
            <div>
                <h1 class="title">{ TITLE }</h1>
                <p class="subtitle">{ SUBTITLE }</p>
            </div>
            <LiveIndicator />
        </div>
    }
}
