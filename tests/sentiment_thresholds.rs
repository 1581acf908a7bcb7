use news_sentiment::nlp::{analyze_sentiment, SentimentLabel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn label_follows_compound_thresholds(compound in -1.0f64..=1.0) {
        let label = SentimentLabel::from_compound(compound);
        prop_assert_eq!(label == SentimentLabel::Positive, compound >= 0.05);
        prop_assert_eq!(label == SentimentLabel::Negative, compound <= -0.05);
        prop_assert_eq!(label == SentimentLabel::Neutral, compound > -0.05 && compound < 0.05);
    }
}

#[test]
fn analyzer_label_matches_its_own_score() {
    for text in [
        "Great breakthrough in AI",
        "Market crash wipes out savings",
        "Council publishes meeting agenda",
    ] {
        let sentiment = analyze_sentiment(text);
        assert_eq!(sentiment.label, SentimentLabel::from_compound(sentiment.compound));
    }
}

#[test]
fn headline_direction() {
    assert_eq!(
        analyze_sentiment("Great breakthrough in AI").label,
        SentimentLabel::Positive
    );
    assert_eq!(
        analyze_sentiment("Terrible disaster leaves city in ruins").label,
        SentimentLabel::Negative
    );
}
