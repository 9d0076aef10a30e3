
pub mod fetcher_test;
