//! Serving coordinator
//!
//! Orchestrates the two caller-facing operations: payment-gated posting and
//! scan/score/commit serving. The engine is synchronous and single-owner;
//! hosts serialize requests around it so each call applies atomically and in
//! a total order, matching the transactional semantics of the environment
//! the catalogue was designed for.

use crate::catalogue::Catalogue;
use crate::matching::{match_score, MatchWeights};
use crate::pricing::PriceSchedule;
use admatch_common::{AdId, AdRecord, Error, Result, TargetingVector, UserProfile};
use tracing::{debug, info};

/// Outcome of a successful serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedAd {
    /// Id of the ad that won the match
    pub ad_id: AdId,

    /// Content reference to hand back to the requester
    pub content_ref: String,

    /// The winning score; 0 is a perfect match
    pub score: u64,
}

/// The ad catalogue together with the pure modules that serve from it
#[derive(Debug, Default)]
pub struct AdEngine {
    catalogue: Catalogue,
    schedule: PriceSchedule,
    weights: MatchWeights,
}

impl AdEngine {
    /// Create an engine with an explicit price schedule and match weights
    pub fn new(schedule: PriceSchedule, weights: MatchWeights) -> Self {
        Self {
            catalogue: Catalogue::new(),
            schedule,
            weights,
        }
    }

    /// Required payment for the given impression count
    pub fn quote(&self, impressions: u64) -> Result<u64> {
        self.schedule.quote(impressions)
    }

    /// Look up a record by id
    pub fn ad(&self, id: AdId) -> Result<AdRecord> {
        self.catalogue.get(id).cloned()
    }

    /// The id the next posted ad will receive
    pub fn next_ad_id(&self) -> AdId {
        self.catalogue.next_id()
    }

    /// Number of ads still holding impressions
    pub fn active_count(&self) -> usize {
        self.catalogue.active_count()
    }

    /// Register a paid ad: quote, verify payment, insert
    ///
    /// The offered payment must cover the quoted price; any excess is
    /// retained, the quote is a minimum. Validation and payment checks run
    /// before the insert, so a failed post stores nothing.
    pub fn post_ad(
        &mut self,
        targeting: TargetingVector,
        content_ref: String,
        impressions: u64,
        payment: u64,
    ) -> Result<AdId> {
        targeting.validate()?;
        let required = self.schedule.quote(impressions)?;
        if payment < required {
            return Err(Error::InsufficientPayment {
                required,
                offered: payment,
            });
        }

        let id = self.catalogue.insert(targeting, content_ref, impressions);
        info!("Posted ad {} with {} prepaid impressions", id, impressions);
        Ok(id)
    }

    /// Serve the best-matching active ad to a requester
    ///
    /// Scans active candidates, scores each against the profile and commits
    /// one impression on the minimum-score candidate; ties go to the lowest
    /// id, so re-execution over identical catalogue state picks the same ad.
    /// A candidate found exhausted at commit time is skipped and the
    /// next-best one is tried; when every scanned candidate is gone the
    /// request fails with `NoInventory`.
    pub fn serve_ad(&mut self, profile: &UserProfile) -> Result<ServedAd> {
        if !profile.is_active {
            return Err(Error::InactiveUser);
        }
        profile.validate()?;

        let mut ranked: Vec<(u64, AdId)> = self
            .catalogue
            .active_candidates()
            .map(|record| (match_score(&record.targeting, profile, &self.weights), record.id))
            .collect();
        if ranked.is_empty() {
            return Err(Error::NoInventory);
        }
        ranked.sort();

        for (score, id) in ranked {
            match self.catalogue.decrement(id) {
                Ok(()) => {
                    let record = self.catalogue.get(id)?;
                    debug!("Served ad {} at score {}", id, score);
                    return Ok(ServedAd {
                        ad_id: id,
                        content_ref: record.content_ref.clone(),
                        score,
                    });
                }
                Err(Error::Exhausted(_)) => continue,
                Err(err) => return Err(err),
            }
        }

        Err(Error::NoInventory)
    }
}
