use crate::embedding::EMBEDDING_SCALE;
use crate::error::{Error, Result};
use crate::geo::SPHERE_RADIUS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalogued ad, assigned sequentially at insertion
/// and immutable afterwards
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AdId(pub u64);

impl AdId {
    /// Get the raw id value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in the 2-D word-embedding plane, pre-scaled to integers
/// (see [`crate::embedding::scale_embedding`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    pub x: i64,
    pub y: i64,
}

/// A point on the locality sphere (see [`crate::geo::lat_lon_to_cartesian`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Audience attributes an advertiser attaches to an ad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingVector {
    /// Target age in years
    pub age: u64,

    /// Target salary (income bracket)
    pub salary: u64,

    /// Target interest embedding
    pub embedding: EmbeddingPoint,

    /// Target locality on the sphere
    pub location: LocationPoint,
}

/// Requester attributes, supplied per serve request and never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Requester age in years
    pub age: u64,

    /// Requester salary (income bracket)
    pub salary: u64,

    /// Requester interest embedding
    pub embedding: EmbeddingPoint,

    /// Requester locality on the sphere
    pub location: LocationPoint,

    /// Gates eligibility to request a match
    pub is_active: bool,
}

/// A catalogued ad and its remaining impression budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRecord {
    /// Sequential id, immutable once created
    pub id: AdId,

    /// Audience the advertiser paid to reach
    pub targeting: TargetingVector,

    /// Opaque reference to externally hosted content; never interpreted
    pub content_ref: String,

    /// Prepaid impressions left; 0 means the ad is retired from matching
    pub impressions_remaining: u64,
}

impl AdRecord {
    /// Whether this record is still eligible for candidate scans
    pub fn is_active(&self) -> bool {
        self.impressions_remaining > 0
    }
}

fn check_bounds(
    kind: &str,
    axis: &str,
    value: i64,
    bound: i64,
) -> Result<()> {
    if value < -bound || value > bound {
        return Err(Error::InvalidProfile(format!(
            "{} {} coordinate {} outside [{}, {}]",
            kind, axis, value, -bound, bound
        )));
    }
    Ok(())
}

fn validate_attributes(embedding: &EmbeddingPoint, location: &LocationPoint) -> Result<()> {
    check_bounds("embedding", "x", embedding.x, EMBEDDING_SCALE)?;
    check_bounds("embedding", "y", embedding.y, EMBEDDING_SCALE)?;
    check_bounds("location", "x", location.x, SPHERE_RADIUS)?;
    check_bounds("location", "y", location.y, SPHERE_RADIUS)?;
    check_bounds("location", "z", location.z, SPHERE_RADIUS)?;
    Ok(())
}

impl TargetingVector {
    /// Check attribute ranges before the vector enters the catalogue
    ///
    /// Embedding coordinates must lie within the scaling constant and
    /// location coordinates within the sphere radius.
    pub fn validate(&self) -> Result<()> {
        validate_attributes(&self.embedding, &self.location)
    }
}

impl UserProfile {
    /// Check attribute ranges before the profile is scored
    pub fn validate(&self) -> Result<()> {
        validate_attributes(&self.embedding, &self.location)
    }
}
