use leptos::*;

#[component]
pub fn LiveIndicator() -> impl IntoView {
    view! {
        <div class="live-indicator">
            <span class="dot"></span>{ " Live Feed" }
        </div>
    }
}
