pub mod review_source_mock;
