//! 活动类型与兴趣标签定义
//!
//! 活动类型是封闭枚举；兴趣标签允许用户自填，未知文本落入 `Custom`。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// 活动类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "Public Talk")]
    PublicTalk,
    #[serde(rename = "Motivational Talk")]
    MotivationalTalk,
    #[serde(rename = "Professional Talk")]
    ProfessionalTalk,
    #[serde(rename = "Professional Task")]
    ProfessionalTask,
    #[serde(rename = "Plantation Drive")]
    PlantationDrive,
    #[serde(rename = "Orphanage Visit")]
    OrphanageVisit,
    #[serde(rename = "Hospital Visit")]
    HospitalVisit,
    #[serde(rename = "Recreational Visit")]
    RecreationalVisit,
    #[serde(rename = "Old Home Visit")]
    OldHomeVisit,
    #[serde(rename = "Book Reading")]
    BookReading,
}

impl EventCategory {
    /// 全部活动类型，按展示顺序排列
    pub const ALL: [EventCategory; 10] = [
        Self::PublicTalk,
        Self::MotivationalTalk,
        Self::ProfessionalTalk,
        Self::ProfessionalTask,
        Self::PlantationDrive,
        Self::OrphanageVisit,
        Self::HospitalVisit,
        Self::RecreationalVisit,
        Self::OldHomeVisit,
        Self::BookReading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicTalk => "Public Talk",
            Self::MotivationalTalk => "Motivational Talk",
            Self::ProfessionalTalk => "Professional Talk",
            Self::ProfessionalTask => "Professional Task",
            Self::PlantationDrive => "Plantation Drive",
            Self::OrphanageVisit => "Orphanage Visit",
            Self::HospitalVisit => "Hospital Visit",
            Self::RecreationalVisit => "Recreational Visit",
            Self::OldHomeVisit => "Old Home Visit",
            Self::BookReading => "Book Reading",
        }
    }

    /// 按显示名解析；未知类型返回 None，由调用方按“无匹配”处理
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 兴趣标签
///
/// 前二十项是资料编辑页提供的预置选项，其余为用户自填内容。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InterestTag {
    PublicSpeaking,
    MotivationalSpeaking,
    ProfessionalTraining,
    Consulting,
    PlantationEnvironment,
    SocialService,
    HealthcareMedical,
    RecreationTravel,
    ElderCare,
    BookReadingDiscussion,
    TeachingMentoring,
    Technology,
    ArtsCrafts,
    SportsFitness,
    MusicDance,
    Photography,
    Cooking,
    Gardening,
    Writing,
    Volunteering,
    /// 自填兴趣
    ///
    /// 进入 InterestSet 时会重新解析：去除首尾空白，与预置选项同名的归一为预置项，
    /// 空白内容被丢弃。
    Custom(String),
}

impl InterestTag {
    /// 预置兴趣选项
    pub const PRESETS: [InterestTag; 20] = [
        Self::PublicSpeaking,
        Self::MotivationalSpeaking,
        Self::ProfessionalTraining,
        Self::Consulting,
        Self::PlantationEnvironment,
        Self::SocialService,
        Self::HealthcareMedical,
        Self::RecreationTravel,
        Self::ElderCare,
        Self::BookReadingDiscussion,
        Self::TeachingMentoring,
        Self::Technology,
        Self::ArtsCrafts,
        Self::SportsFitness,
        Self::MusicDance,
        Self::Photography,
        Self::Cooking,
        Self::Gardening,
        Self::Writing,
        Self::Volunteering,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::PublicSpeaking => "Public Speaking",
            Self::MotivationalSpeaking => "Motivational Speaking",
            Self::ProfessionalTraining => "Professional Training",
            Self::Consulting => "Consulting",
            Self::PlantationEnvironment => "Plantation & Environment",
            Self::SocialService => "Social Service",
            Self::HealthcareMedical => "Healthcare & Medical",
            Self::RecreationTravel => "Recreation & Travel",
            Self::ElderCare => "Elder Care",
            Self::BookReadingDiscussion => "Book Reading & Discussion",
            Self::TeachingMentoring => "Teaching & Mentoring",
            Self::Technology => "Technology",
            Self::ArtsCrafts => "Arts & Crafts",
            Self::SportsFitness => "Sports & Fitness",
            Self::MusicDance => "Music & Dance",
            Self::Photography => "Photography",
            Self::Cooking => "Cooking",
            Self::Gardening => "Gardening",
            Self::Writing => "Writing",
            Self::Volunteering => "Volunteering",
            Self::Custom(s) => s,
        }
    }

    /// 解析用户输入；空白输入返回 None
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        let tag = Self::PRESETS
            .iter()
            .find(|t| t.as_str() == trimmed)
            .cloned()
            .unwrap_or_else(|| Self::Custom(trimmed.to_string()));
        Some(tag)
    }

    /// 归一化：自填内容按 parse 规则重新解析
    fn normalized(self) -> Option<Self> {
        match self {
            Self::Custom(text) => Self::parse(&text),
            preset => Some(preset),
        }
    }
}

impl fmt::Display for InterestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterestTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| "兴趣标签不能为空".to_string())
    }
}

impl Serialize for InterestTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InterestTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// 兴趣集合（无序、去重）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestSet(BTreeSet<InterestTag>);

impl InterestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从原始字符串构建，空白项被丢弃
    pub fn from_raw<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter_map(|v| InterestTag::parse(v.as_ref()))
            .collect()
    }

    /// 插入标签，空白的自填标签被忽略
    pub fn insert(&mut self, tag: InterestTag) -> bool {
        match tag.normalized() {
            Some(tag) => self.0.insert(tag),
            None => false,
        }
    }

    pub fn contains(&self, tag: &InterestTag) -> bool {
        match tag {
            InterestTag::Custom(text) => {
                InterestTag::parse(text).is_some_and(|tag| self.0.contains(&tag))
            }
            preset => self.0.contains(preset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterestTag> {
        self.0.iter()
    }

    /// 是否与另一集合存在交集
    pub fn intersects(&self, other: &InterestSet) -> bool {
        // 遍历较小的集合
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|tag| large.contains(tag))
    }
}

impl FromIterator<InterestTag> for InterestSet {
    fn from_iter<T: IntoIterator<Item = InterestTag>>(iter: T) -> Self {
        Self(iter.into_iter().filter_map(InterestTag::normalized).collect())
    }
}

impl<const N: usize> From<[InterestTag; N]> for InterestSet {
    fn from(tags: [InterestTag; N]) -> Self {
        tags.into_iter().collect()
    }
}
