//! Append-only ad catalogue
//!
//! Exclusive owner of every `AdRecord`. Ids are assigned sequentially and
//! all mutation funnels through `insert` and `decrement`, which preserves
//! the invariant that a counter only ever moves down and never below zero.
//! Exhausted records are retired in place, never deleted, so history stays
//! auditable while candidate scans skip them.

use admatch_common::{AdId, AdRecord, Error, Result, TargetingVector};
use std::collections::BTreeMap;

/// Append-only store of ad records keyed by sequential id
#[derive(Debug, Default)]
pub struct Catalogue {
    records: BTreeMap<u64, AdRecord>,
    next_id: u64,
}

impl Catalogue {
    /// Create an empty catalogue; the first insert receives id 0
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next insert will be assigned
    pub fn next_id(&self) -> AdId {
        AdId(self.next_id)
    }

    /// Number of records ever inserted, active or retired
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records still holding impressions
    pub fn active_count(&self) -> usize {
        self.records.values().filter(|r| r.is_active()).count()
    }

    /// Store a new record with a freshly assigned id and a counter equal to
    /// the requested impression count
    ///
    /// Payment is verified by the serving coordinator before this is called;
    /// the catalogue itself never re-checks it.
    pub fn insert(
        &mut self,
        targeting: TargetingVector,
        content_ref: String,
        impressions: u64,
    ) -> AdId {
        let id = AdId(self.next_id);
        self.next_id += 1;
        self.records.insert(
            id.value(),
            AdRecord {
                id,
                targeting,
                content_ref,
                impressions_remaining: impressions,
            },
        );
        id
    }

    /// Look up a record by id
    pub fn get(&self, id: AdId) -> Result<&AdRecord> {
        self.records.get(&id.value()).ok_or(Error::NotFound(id))
    }

    /// All records still holding impressions, in ascending id order
    pub fn active_candidates(&self) -> impl Iterator<Item = &AdRecord> {
        self.records.values().filter(|r| r.is_active())
    }

    /// Consume one impression from a record
    ///
    /// # Returns
    /// * `Ok(())` - the counter moved down by exactly 1
    /// * `Err(Error::Exhausted)` - the counter was already 0
    /// * `Err(Error::NotFound)` - the id was never assigned
    pub fn decrement(&mut self, id: AdId) -> Result<()> {
        let record = self
            .records
            .get_mut(&id.value())
            .ok_or(Error::NotFound(id))?;
        if record.impressions_remaining == 0 {
            return Err(Error::Exhausted(id));
        }
        record.impressions_remaining -= 1;
        Ok(())
    }
}
