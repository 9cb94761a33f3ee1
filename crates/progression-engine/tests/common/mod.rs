//! 集成测试共用的数据生成器

#![allow(dead_code)]

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use progression_engine::{EventCategory, EventListing, InterestSet, InterestTag, ParticipantProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 固定种子的随机源，保证失败可复现
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 随机兴趣集合（可能为空，偶尔包含自填兴趣）
pub fn random_interests(rng: &mut StdRng) -> InterestSet {
    let count = rng.random_range(0..=4);
    let mut set = InterestSet::new();
    for _ in 0..count {
        if rng.random_bool(0.1) {
            set.insert(InterestTag::Custom(format!("Custom {}", rng.random_range(0..5))));
        } else {
            let index = rng.random_range(0..InterestTag::PRESETS.len());
            set.insert(InterestTag::PRESETS[index].clone());
        }
    }
    set
}

/// 随机活动类型字符串，约一成为代码未收录的类型
pub fn random_category(rng: &mut StdRng) -> String {
    if rng.random_bool(0.1) {
        "Community Kitchen".to_string()
    } else {
        let index = rng.random_range(0..EventCategory::ALL.len());
        EventCategory::ALL[index].as_str().to_string()
    }
}

pub fn random_profile(rng: &mut StdRng, id: usize) -> ParticipantProfile {
    let mut profile = ParticipantProfile::new(
        format!("vet-{}", id),
        rng.random_range(0..=120_000),
        random_interests(rng),
    );
    profile.full_name = Name().fake();
    profile.city = Some(CityName().fake());
    profile
}

pub fn random_listing(rng: &mut StdRng, id: usize) -> EventListing {
    let title: String = Sentence(2..5).fake();
    let city: String = CityName().fake();
    EventListing::new(
        format!("event-{}", id),
        title,
        random_category(rng),
        city,
        Utc::now() + Duration::days(rng.random_range(1..60)),
    )
}
