//! Cosine similarity over dense embedding vectors

use crate::error::{MatcherError, Result};

/// Cosine similarity between two equal-length vectors:
/// dot(a, b) / (‖a‖ · ‖b‖).
///
/// Mathematically the result lies in [-1, 1] for real vectors; no clamping
/// is applied. A zero-norm vector on either side yields 0.0 rather than a
/// division by zero. Mismatched lengths are a hard error: silently padding
/// or truncating would compare vectors across embedding spaces.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(MatcherError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}
