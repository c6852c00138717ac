pub mod embedding;
pub mod error;
pub mod geo;
pub mod profile;

pub use embedding::{scale_embedding, EMBEDDING_SCALE};
pub use error::{Error, Result};
pub use geo::{lat_lon_to_cartesian, SPHERE_RADIUS};
pub use profile::{AdId, AdRecord, EmbeddingPoint, LocationPoint, TargetingVector, UserProfile};
