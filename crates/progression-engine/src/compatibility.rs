//! 活动类型与兴趣标签的匹配表
//!
//! 组织方（为活动挑选老兵）与老兵（浏览活动）两侧使用的映射并不对称，
//! 两张表按原样保留，默认使用组织方的表。

use crate::taxonomy::{EventCategory, InterestSet, InterestTag};
use std::collections::BTreeMap;
use tracing::warn;
use veteran_shared::config::{CompatibilityPreset, CompatibilitySetting};

/// 组织方匹配表的版本
pub const ORGANIZER_TABLE_VERSION: u32 = 1;
/// 老兵侧匹配表的版本
pub const VOLUNTEER_TABLE_VERSION: u32 = 1;

/// 匹配表
///
/// 每个活动类型都有条目（可能为空）。构建后只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityTable {
    version: u32,
    entries: BTreeMap<EventCategory, InterestSet>,
}

impl CompatibilityTable {
    /// 用给定条目构建匹配表，缺失的活动类型补空条目
    pub fn from_entries<I>(version: u32, entries: I) -> Self
    where
        I: IntoIterator<Item = (EventCategory, InterestSet)>,
    {
        let mut table: BTreeMap<EventCategory, InterestSet> = EventCategory::ALL
            .into_iter()
            .map(|c| (c, InterestSet::new()))
            .collect();
        table.extend(entries);

        Self {
            version,
            entries: table,
        }
    }

    /// 组织方视角：活动类型 -> 相关兴趣
    pub fn organizer() -> Self {
        use EventCategory::*;
        use InterestTag::*;

        Self::from_entries(
            ORGANIZER_TABLE_VERSION,
            [
                (PublicTalk, InterestSet::from([PublicSpeaking, TeachingMentoring])),
                (
                    MotivationalTalk,
                    InterestSet::from([PublicSpeaking, MotivationalSpeaking, TeachingMentoring]),
                ),
                (
                    ProfessionalTalk,
                    InterestSet::from([ProfessionalTraining, TeachingMentoring, Consulting]),
                ),
                (
                    ProfessionalTask,
                    InterestSet::from([ProfessionalTraining, Consulting, Technology]),
                ),
                (
                    PlantationDrive,
                    InterestSet::from([PlantationEnvironment, Gardening, Volunteering]),
                ),
                (
                    OrphanageVisit,
                    InterestSet::from([SocialService, Volunteering, TeachingMentoring]),
                ),
                (
                    HospitalVisit,
                    InterestSet::from([HealthcareMedical, SocialService, Volunteering]),
                ),
                (RecreationalVisit, InterestSet::from([RecreationTravel, Photography])),
                (
                    OldHomeVisit,
                    InterestSet::from([ElderCare, SocialService, Volunteering]),
                ),
                (
                    BookReading,
                    InterestSet::from([BookReadingDiscussion, Writing, TeachingMentoring]),
                ),
            ],
        )
    }

    /// 老兵视角：兴趣 -> 活动类型，按活动类型倒排存储
    pub fn volunteer() -> Self {
        use EventCategory::*;
        use InterestTag::*;

        let by_interest: [(InterestTag, &[EventCategory]); 6] = [
            (PublicSpeaking, &[PublicTalk, MotivationalTalk]),
            (ProfessionalTraining, &[ProfessionalTalk, ProfessionalTask]),
            (PlantationEnvironment, &[PlantationDrive]),
            (SocialService, &[OrphanageVisit, HospitalVisit, OldHomeVisit]),
            (BookReadingDiscussion, &[BookReading]),
            (RecreationTravel, &[RecreationalVisit]),
        ];

        Self::from_interest_index(VOLUNTEER_TABLE_VERSION, by_interest)
    }

    /// 从“兴趣 -> 活动类型”形式的索引构建
    pub fn from_interest_index<'a, I>(version: u32, index: I) -> Self
    where
        I: IntoIterator<Item = (InterestTag, &'a [EventCategory])>,
    {
        let mut entries: BTreeMap<EventCategory, InterestSet> = BTreeMap::new();
        for (tag, categories) in index {
            for category in categories {
                entries.entry(*category).or_default().insert(tag.clone());
            }
        }
        Self::from_entries(version, entries)
    }

    /// 按配置构建：先选预置表，再用配置条目覆盖
    ///
    /// 代码尚未收录的活动类型会被跳过并记录告警。
    pub fn from_setting(setting: &CompatibilitySetting) -> Self {
        let base = match setting.preset {
            CompatibilityPreset::Organizer => Self::organizer(),
            CompatibilityPreset::Volunteer => Self::volunteer(),
        };

        let version = setting.version.unwrap_or(base.version);
        let mut entries = base.entries;

        for item in &setting.categories {
            let Some(category) = EventCategory::parse(&item.category) else {
                warn!(category = %item.category, "匹配表配置中存在未知活动类型，已跳过");
                continue;
            };
            entries.insert(category, InterestSet::from_raw(&item.interests));
        }

        Self::from_entries(version, entries)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// 某活动类型的相关兴趣
    pub fn interests_for(&self, category: EventCategory) -> &InterestSet {
        // from_entries 保证每个活动类型都有条目
        &self.entries[&category]
    }

    /// 反向查询：某兴趣相关的活动类型
    ///
    /// 由同一张表推导，两个方向不会出现偏差。
    pub fn categories_for(&self, tag: &InterestTag) -> Vec<EventCategory> {
        self.entries
            .iter()
            .filter(|(_, interests)| interests.contains(tag))
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventCategory, &InterestSet)> {
        self.entries.iter().map(|(c, i)| (*c, i))
    }
}

impl Default for CompatibilityTable {
    fn default() -> Self {
        Self::organizer()
    }
}
