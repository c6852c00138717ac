//! Request and response models for the serving surface

use admatch_common::{AdId, AdRecord, TargetingVector, UserProfile};
use serde::{Deserialize, Serialize};

/// Request to post a paid ad
#[derive(Debug, Deserialize)]
pub struct PostAdRequest {
    /// Audience the ad targets
    pub targeting: TargetingVector,

    /// Opaque reference to the externally hosted creative
    pub content_ref: String,

    /// Impressions to prepay for
    pub impressions: u64,

    /// Payment transferred with the request, in base units; must cover the
    /// quoted price, excess is retained
    pub payment: u64,
}

/// Response from posting
#[derive(Debug, Serialize)]
pub struct PostAdResponse {
    /// Id assigned to the stored ad
    pub ad_id: AdId,
}

/// Request to serve the best-matching ad
#[derive(Debug, Deserialize)]
pub struct ServeAdRequest {
    /// Requester attributes; scored against every active ad and discarded
    pub profile: UserProfile,
}

/// Response from serving
#[derive(Debug, Serialize)]
pub struct ServeAdResponse {
    /// Content reference of the served ad
    pub content_ref: String,
}

/// Price quote for an impression count
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// Requested impression count
    pub impressions: u64,

    /// Required payment in base units
    pub price: u64,
}

/// A catalogued record
#[derive(Debug, Serialize)]
pub struct AdResponse {
    pub ad: AdRecord,
}

/// The id the next posted ad will receive
#[derive(Debug, Serialize)]
pub struct NextAdIdResponse {
    pub next_ad_id: AdId,
}
