//! End-to-end scenarios for the catalogue, pricing and serving flow

use admatch_common::{AdId, EmbeddingPoint, Error, LocationPoint, TargetingVector, UserProfile};
use admatch_engine::AdEngine;

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
fn test_post_and_read_back_impression_budget() {
    let mut engine = AdEngine::default();
    let price = engine.quote(100).unwrap();

    let id = engine.next_ad_id();
    let posted = engine
        .post_ad(targeting(42, 4200), "https://example.com".into(), 100, price)
        .unwrap();
    assert_eq!(posted, id);

    let record = engine.ad(id).unwrap();
    assert_eq!(record.impressions_remaining, 100);
}

#[test]
fn test_perfect_match_serves_and_decrements() {
    let mut engine = AdEngine::default();
    let price = engine.quote(100).unwrap();
    let id = engine
        .post_ad(targeting(42, 4200), "https://x.example".into(), 100, price)
        .unwrap();

    let served = engine.serve_ad(&profile(42, 4200)).unwrap();
    assert_eq!(served.score, 0);
    assert_eq!(served.content_ref, "https://x.example");
    assert_eq!(engine.ad(id).unwrap().impressions_remaining, 99);
}

#[test]
fn test_mismatched_profile_scores_13200() {
    let mut engine = AdEngine::default();
    let price = engine.quote(100).unwrap();
    engine
        .post_ad(targeting(30, 3000), "https://example.com".into(), 100, price)
        .unwrap();

    let served = engine.serve_ad(&profile(42, 4200)).unwrap();
    assert_eq!(served.score, 13200);
}

#[test]
fn test_single_ad_serves_exactly_its_budget() {
    let budget = 5;
    let mut engine = AdEngine::default();
    let price = engine.quote(budget).unwrap();
    let id = engine
        .post_ad(targeting(42, 4200), "https://example.com".into(), budget, price)
        .unwrap();

    for remaining in (0..budget).rev() {
        let served = engine.serve_ad(&profile(42, 4200)).unwrap();
        assert_eq!(served.ad_id, id);
        assert_eq!(engine.ad(id).unwrap().impressions_remaining, remaining);
    }

    assert!(matches!(
        engine.serve_ad(&profile(42, 4200)),
        Err(Error::NoInventory)
    ));
    // The record survives exhaustion for audit, retired from matching.
    assert_eq!(engine.ad(id).unwrap().impressions_remaining, 0);
}

#[test]
fn test_insufficient_payment_leaves_catalogue_unchanged() {
    let mut engine = AdEngine::default();
    let price = engine.quote(100).unwrap();

    let err = engine
        .post_ad(targeting(42, 4200), "https://example.com".into(), 100, price / 2)
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientPayment { .. }));

    assert_eq!(engine.next_ad_id(), AdId(0));
    assert!(matches!(engine.ad(AdId(0)), Err(Error::NotFound(_))));
}

#[test]
fn test_zero_impression_post_is_rejected() {
    let mut engine = AdEngine::default();
    assert!(matches!(engine.quote(0), Err(Error::InvalidQuantity)));
    assert!(matches!(
        engine.post_ad(targeting(42, 4200), "https://example.com".into(), 0, 1_000_000),
        Err(Error::InvalidQuantity)
    ));
}

#[test]
fn test_serving_is_deterministic_across_engines() {
    let build = || {
        let mut engine = AdEngine::default();
        for (age, salary, url) in [
            (25u64, 2500u64, "https://a.example"),
            (35, 3500, "https://b.example"),
            (45, 4500, "https://c.example"),
        ] {
            let price = engine.quote(10).unwrap();
            engine
                .post_ad(targeting(age, salary), url.into(), 10, price)
                .unwrap();
        }
        engine
    };

    let mut left = build();
    let mut right = build();
    for _ in 0..10 {
        let a = left.serve_ad(&profile(40, 4000)).unwrap();
        let b = right.serve_ad(&profile(40, 4000)).unwrap();
        assert_eq!(a, b);
    }
}
