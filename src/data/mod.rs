//! Data ingestion layer.

pub mod newsapi;
