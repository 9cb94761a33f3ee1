//! 进阶引擎集成测试
//!
//! 覆盖等级推导与兴趣匹配的公开接口，以及基于随机数据的性质检查。

mod common;

use common::{random_listing, random_profile, seeded_rng};
use progression_engine::{
    CategorySource, CompatibilityTable, EventCategory, EventFilter, InterestMatcher, InterestSet,
    InterestTag, ProgressionEngine, ProgressionError, RankEngine, RankLadder, RankTier,
};
use rand::Rng;
use std::sync::Arc;
use std::thread;

fn bronze_silver_gold() -> RankEngine {
    RankEngine::new(
        RankLadder::new(vec![
            RankTier::new("Bronze", 0),
            RankTier::new("Silver", 25_000),
            RankTier::new("Gold", 50_000),
        ])
        .unwrap(),
    )
}

fn tags(values: &[&str]) -> InterestSet {
    InterestSet::from_raw(values.iter().copied())
}

// ==================== 等级场景 ====================

#[test]
fn test_tier_boundaries_on_three_tier_ladder() {
    let engine = bronze_silver_gold();

    assert_eq!(engine.current_tier(24_999).unwrap().name, "Bronze");
    assert_eq!(engine.current_tier(25_000).unwrap().name, "Silver");
    assert_eq!(engine.next_tier(25_000).unwrap().unwrap().name, "Gold");

    let progress = engine.progress(25_000).unwrap();
    assert_eq!(progress.percent, 0.0);
    assert_eq!(progress.points_remaining, 25_000);
}

#[test]
fn test_top_tier_on_three_tier_ladder() {
    let engine = bronze_silver_gold();

    assert_eq!(engine.current_tier(50_000).unwrap().name, "Gold");
    assert!(engine.next_tier(50_000).unwrap().is_none());

    let progress = engine.progress(50_000).unwrap();
    assert_eq!(progress.percent, 100.0);
    assert_eq!(progress.points_remaining, 0);
}

#[test]
fn test_negative_points_is_invalid_input() {
    let engine = bronze_silver_gold();
    assert!(matches!(
        engine.current_tier(-5),
        Err(ProgressionError::InvalidInput { points: -5 })
    ));
}

// ==================== 匹配场景 ====================

#[test]
fn test_plantation_drive_scenarios() {
    let matcher = InterestMatcher::default();
    assert!(matcher.is_match(&tags(&["Gardening"]), "Plantation Drive"));
    assert!(!matcher.is_match(&tags(&["Photography"]), "Plantation Drive"));
}

#[test]
fn test_rank_by_relevance_scenarios() {
    let matcher = InterestMatcher::default();

    let ranked = matcher.rank_by_relevance(
        vec![("E1", "Book Reading"), ("E2", "Hospital Visit")],
        &tags(&["Healthcare & Medical"]),
    );
    assert_eq!(ranked, vec!["E2", "E1"]);

    // catX 匹配、catY 不匹配时 [A, B, C] -> [A, C, B]
    let ranked = matcher.rank_by_relevance(
        vec![("A", "Hospital Visit"), ("B", "Book Reading"), ("C", "Hospital Visit")],
        &tags(&["Healthcare & Medical"]),
    );
    assert_eq!(ranked, vec!["A", "C", "B"]);
}

// ==================== 随机性质检查 ====================

#[test]
fn test_current_tier_is_maximal_for_random_points() {
    let engine = RankEngine::default();
    let mut rng = seeded_rng(7);

    for _ in 0..2_000 {
        let points: i64 = rng.random_range(0..=150_000);
        let current = engine.current_tier(points).unwrap();
        assert!(current.threshold <= points as u64);

        let higher_fits = engine
            .ladder()
            .tiers()
            .iter()
            .any(|t| t.threshold > current.threshold && t.threshold <= points as u64);
        assert!(!higher_fits, "points = {}", points);

        if let Some(next) = engine.next_tier(points).unwrap() {
            assert!(next.threshold > points as u64);
            assert_ne!(next, current);
        }
    }
}

#[test]
fn test_progress_is_monotonic_within_tier() {
    let engine = RankEngine::default();
    let tiers = engine.ladder().tiers().to_vec();

    for pair in tiers.windows(2) {
        let (low, high) = (pair[0].threshold as i64, pair[1].threshold as i64);
        let mut previous = -1.0;
        for points in (low..high).step_by(250) {
            let progress = engine.progress(points).unwrap();
            assert!((0.0..100.0).contains(&progress.percent));
            assert!(progress.percent >= previous);
            assert_eq!(progress.points_remaining, (high - points) as u64);
            previous = progress.percent;
        }
        // 到达下一门槛即进入新等级，进度归零
        assert_eq!(engine.progress(high).unwrap().percent, if high == 100_000 { 100.0 } else { 0.0 });
    }
}

#[test]
fn test_rank_by_relevance_is_stable_partition_for_random_feeds() {
    let matcher = InterestMatcher::default();
    let mut rng = seeded_rng(42);

    for round in 0..200 {
        let profile = random_profile(&mut rng, round);
        let events: Vec<_> = (0..rng.random_range(0..20))
            .map(|i| random_listing(&mut rng, i))
            .collect();

        let ranked = matcher.rank_events(events.clone(), &profile.interest_tags);
        assert_eq!(ranked.len(), events.len());

        let split = ranked
            .iter()
            .position(|e| !matcher.is_match(&profile.interest_tags, e.category()))
            .unwrap_or(ranked.len());

        // 分区之后不再出现匹配项
        assert!(ranked[split..]
            .iter()
            .all(|e| !matcher.is_match(&profile.interest_tags, e.category())));

        // 分区内部保持原始相对顺序
        let expected_matched: Vec<_> = events
            .iter()
            .filter(|e| matcher.is_match(&profile.interest_tags, e.category()))
            .map(|e| e.id.clone())
            .collect();
        let actual_matched: Vec<_> = ranked[..split].iter().map(|e| e.id.clone()).collect();
        assert_eq!(actual_matched, expected_matched);

        // 重复排序结果不变
        let reranked = matcher.rank_events(ranked.clone(), &profile.interest_tags);
        assert_eq!(reranked, ranked);
    }
}

#[test]
fn test_reverse_lookup_agrees_with_matcher() {
    for table in [CompatibilityTable::organizer(), CompatibilityTable::volunteer()] {
        let matcher = InterestMatcher::new(table.clone());
        for tag in InterestTag::PRESETS {
            let single = InterestSet::from([tag.clone()]);
            assert_eq!(table.categories_for(&tag), matcher.matching_categories(&single));
        }
    }
}

#[test]
fn test_unknown_category_matches_nothing_for_random_tags() {
    let matcher = InterestMatcher::default();
    let mut rng = seeded_rng(3);
    for round in 0..200 {
        let profile = random_profile(&mut rng, round);
        assert!(!matcher.is_match(&profile.interest_tags, "Community Kitchen"));
    }
}

// ==================== 组合流程 ====================

#[test]
fn test_filter_then_rank_feed() {
    let engine = ProgressionEngine::default();
    let mut rng = seeded_rng(11);
    let profile = random_profile(&mut rng, 0);

    let events: Vec<_> = (0..30).map(|i| random_listing(&mut rng, i)).collect();
    let filter = EventFilter::new().with_category(EventCategory::HospitalVisit);
    let filtered = filter.apply(events);
    assert!(filtered.iter().all(|e| e.category == "Hospital Visit"));

    let feed = engine.personalize_feed(&profile, filtered.clone());
    assert_eq!(feed.len(), filtered.len());
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = Arc::new(ProgressionEngine::default());
    let expected = engine.ranks().current_tier(65_000).unwrap().name.clone();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let tier = engine.ranks().current_tier(65_000).unwrap().name.clone();
                let matched = engine
                    .matcher()
                    .is_match(&InterestSet::from([InterestTag::ElderCare]), "Old Home Visit");
                (tier, matched)
            })
        })
        .collect();

    for handle in handles {
        let (tier, matched) = handle.join().unwrap();
        assert_eq!(tier, expected);
        assert!(matched);
    }
}
