//! Headline sentiment explorer: NewsAPI search, VADER scoring, table and chart reporting.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
pub mod report;
