//! Confidential ad catalogue and matching core
//!
//! Advertisers prepay for a fixed impression budget; at request time every
//! active ad is scored against the requester's private profile and the best
//! match is served, consuming one impression. The engine is synchronous,
//! integer-only and deterministic: identical catalogue state and profile
//! always select the same ad. Hosts serialize requests around it.

pub mod catalogue;
pub mod coordinator;
pub mod matching;
pub mod pricing;

pub use catalogue::Catalogue;
pub use coordinator::{AdEngine, ServedAd};
pub use matching::{match_score, MatchWeights};
pub use pricing::PriceSchedule;
