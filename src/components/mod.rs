pub mod feed_header;
pub mod live_indicator;
pub mod review_card;
pub mod review_feed;
pub mod reviews_list;
