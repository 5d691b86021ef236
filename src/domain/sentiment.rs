//! Lexicon based sentiment scoring

use vader_sentiment::SentimentIntensityAnalyzer;

/// Bounds of the normalized sentiment score
pub const MIN_SCORE: i32 = -5;
pub const MAX_SCORE: i32 = 5;

/// VADER squashes the summed valence `s` into `s / sqrt(s^2 + alpha)`
const VADER_ALPHA: f64 = 15.0;

/// Something that can put a raw, unbounded valence on a piece of text
pub trait SentimentScorer {
    fn raw_score(&self, text: &str) -> i32;
}

/// Scores text with the VADER English lexicon.
///
/// The raw score is the summed word valence after VADER's negation, booster
/// and punctuation rules, recovered from its compound score and rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    /// Invert the compound normalization back to a valence sum
    fn valence_sum(compound: f64) -> f64 {
        let compound = compound.clamp(-1.0, 1.0);
        let spread = (1.0 - compound * compound).sqrt();
        if spread <= f64::EPSILON {
            return compound.signum() * f64::from(MAX_SCORE);
        }
        compound * VADER_ALPHA.sqrt() / spread
    }
}

impl SentimentScorer for VaderScorer {
    fn raw_score(&self, text: &str) -> i32 {
        if text.trim().is_empty() {
            return 0;
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().unwrap_or(0.0);
        Self::valence_sum(compound).round() as i32
    }
}

/// Score text with the given scorer, clamped to `[-5, 5]`
pub fn score_sentiment_with(scorer: &dyn SentimentScorer, text: &str) -> i32 {
    scorer.raw_score(text).clamp(MIN_SCORE, MAX_SCORE)
}

/// Score text with the built-in lexicon, clamped to `[-5, 5]`
pub fn score_sentiment(text: &str) -> i32 {
    score_sentiment_with(&VaderScorer, text)
}
