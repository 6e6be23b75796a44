use leptos::*;
use crate::models::review::Review;

/// One review: avatar bubble, author, time posted, product and quoted text.
#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let avatar = review.avatar_glyph();
    let posted_at = review.local_time_of_day();

    view! {
        <div class="review-card" data-review-id=review.id.to_string()>
            <div class="card-header">
                <div class="avatar">{ avatar }</div>
                <div>
                    <h3 class="user-name">{ review.user_name }</h3>
                    <span class="timestamp">{ posted_at }</span>
                </div>
            </div>

            <div class="product-tag">
                { "Purchased: " }<strong>{ review.product_name }</strong>
            </div>

            <p class="review-text">{ format!("\"{}\"", review.product_review) }</p>
        </div>
    }
}
