//! Word-embedding coordinates scaled to fixed point
//!
//! Interest embeddings arrive as unit-range floats from whatever model the
//! caller uses. They are scaled and rounded once, up front, so the engine
//! works on integers only.

use crate::profile::EmbeddingPoint;

/// Scaling factor applied to raw embedding coordinates; also the bound on
/// each scaled coordinate
pub const EMBEDDING_SCALE: i64 = 1000;

/// Scale a raw 2-D embedding to the integer plane the engine matches on
pub fn scale_embedding(x: f64, y: f64) -> EmbeddingPoint {
    EmbeddingPoint {
        x: (x * EMBEDDING_SCALE as f64).round() as i64,
        y: (y * EMBEDDING_SCALE as f64).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_rounds_to_nearest() {
        let p = scale_embedding(0.0421, -0.5555);
        assert_eq!(p, EmbeddingPoint { x: 42, y: -556 });
    }

    #[test]
    fn test_unit_vector_hits_bound() {
        let p = scale_embedding(1.0, -1.0);
        assert_eq!(p, EmbeddingPoint { x: 1000, y: -1000 });
    }
}
