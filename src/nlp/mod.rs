//! Text scoring layer.

pub mod sentiment;

pub use sentiment::{analyze_sentiment, Sentiment, SentimentLabel};
