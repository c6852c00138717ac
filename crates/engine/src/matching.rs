//! Ad/profile match scoring
//!
//! The score is a weighted sum of absolute per-attribute differences; lower
//! is better and 0 is a perfect match. L1 distance over integers keeps the
//! outcome exactly reproducible inside a serialized execution environment --
//! no floating point, no square roots.

use admatch_common::{TargetingVector, UserProfile};

/// Default weight applied to the age difference
pub const DEFAULT_AGE_WEIGHT: u64 = 100;

/// Default weight applied to the salary difference
pub const DEFAULT_SALARY_WEIGHT: u64 = 10;

/// Default per-unit weight applied to embedding coordinate differences
pub const DEFAULT_EMBEDDING_WEIGHT: u64 = 1;

/// Default per-unit weight applied to location coordinate differences
pub const DEFAULT_LOCATION_WEIGHT: u64 = 1;

/// Per-attribute weights for match scoring
///
/// Age and salary weights are pinned by the deployed contract; the embedding
/// and location weights are calibration points and default to 1 per unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    pub age: u64,
    pub salary: u64,
    pub embedding: u64,
    pub location: u64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE_WEIGHT,
            salary: DEFAULT_SALARY_WEIGHT,
            embedding: DEFAULT_EMBEDDING_WEIGHT,
            location: DEFAULT_LOCATION_WEIGHT,
        }
    }
}

/// Score one ad's targeting vector against one requester profile
///
/// Deterministic, pure and total: any pair of in-range vectors scores
/// without failing. The sum is accumulated in 128 bits and saturated at
/// `u64::MAX`, which cannot occur for validated inputs.
pub fn match_score(
    targeting: &TargetingVector,
    profile: &UserProfile,
    weights: &MatchWeights,
) -> u64 {
    let mut total: u128 = 0;

    total += u128::from(weights.age) * u128::from(targeting.age.abs_diff(profile.age));
    total += u128::from(weights.salary) * u128::from(targeting.salary.abs_diff(profile.salary));

    let embedding_l1 = u128::from(targeting.embedding.x.abs_diff(profile.embedding.x))
        + u128::from(targeting.embedding.y.abs_diff(profile.embedding.y));
    total += u128::from(weights.embedding) * embedding_l1;

    let location_l1 = u128::from(targeting.location.x.abs_diff(profile.location.x))
        + u128::from(targeting.location.y.abs_diff(profile.location.y))
        + u128::from(targeting.location.z.abs_diff(profile.location.z));
    total += u128::from(weights.location) * location_l1;

    u64::try_from(total).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use admatch_common::{EmbeddingPoint, LocationPoint};

    fn targeting(age: u64, salary: u64) -> TargetingVector {
        TargetingVector {
            age,
            salary,
            embedding: EmbeddingPoint { x: 42, y: 42 },
            location: LocationPoint {
                x: 42,
                y: 42,
                z: 42,
            },
        }
    }

    fn profile(age: u64, salary: u64) -> UserProfile {
        UserProfile {
            age,
            salary,
            embedding: EmbeddingPoint { x: 42, y: 42 },
            location: LocationPoint {
                x: 42,
                y: 42,
                z: 42,
            },
            is_active: true,
        }
    }

    #[test]
    fn test_identical_vectors_score_zero() {
        let score = match_score(
            &targeting(42, 4200),
            &profile(42, 4200),
            &MatchWeights::default(),
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn test_age_and_salary_diff_scores_13200() {
        // Age diff 12 at weight 100, salary diff 1200 at weight 10.
        let score = match_score(
            &targeting(30, 3000),
            &profile(42, 4200),
            &MatchWeights::default(),
        );
        assert_eq!(score, 13200);
    }

    #[test]
    fn test_embedding_and_location_contribute_per_unit() {
        let mut ad = targeting(42, 4200);
        ad.embedding = EmbeddingPoint { x: 45, y: 40 };
        ad.location = LocationPoint { x: 41, y: 43, z: 42 };
        // Embedding L1 = 3 + 2, location L1 = 1 + 1 + 0, both at weight 1.
        let score = match_score(&ad, &profile(42, 4200), &MatchWeights::default());
        assert_eq!(score, 7);
    }

    #[test]
    fn test_negative_coordinates_use_absolute_difference() {
        let mut ad = targeting(42, 4200);
        ad.embedding = EmbeddingPoint { x: -42, y: 42 };
        let score = match_score(&ad, &profile(42, 4200), &MatchWeights::default());
        assert_eq!(score, 84);
    }

    #[test]
    fn test_custom_weights_override_defaults() {
        let weights = MatchWeights {
            age: 1,
            salary: 1,
            embedding: 0,
            location: 0,
        };
        let score = match_score(&targeting(30, 3000), &profile(42, 4200), &weights);
        assert_eq!(score, 12 + 1200);
    }
}
