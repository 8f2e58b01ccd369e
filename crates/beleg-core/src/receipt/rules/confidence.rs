//! Confidence aggregation over recognition token scores.

use tracing::warn;

use crate::models::receipt::RecognitionToken;

/// Reduce per-token recognition scores to a single overall confidence.
///
/// Scores of exactly 0 mean "no score available" and are excluded from the
/// unweighted mean, not counted as zeros. Returns 0.0 when no usable score
/// exists.
pub fn aggregate_confidence(tokens: &[RecognitionToken]) -> f32 {
    if tokens.is_empty() {
        return 0.0;
    }

    let mut total = 0.0f32;
    let mut count = 0u32;
    for token in tokens {
        if token.score > 0.0 {
            total += token.score;
            count += 1;
        }
    }

    if count == 0 {
        warn!("no usable recognition scores in {} tokens", tokens.len());
        return 0.0;
    }

    total / count as f32
}
