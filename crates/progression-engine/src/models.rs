//! 进阶引擎领域模型
//!
//! 资料与活动由外部子系统提供，引擎只读取其中的积分与类型字段。

use crate::error::{ProgressionError, Result};
use crate::taxonomy::{EventCategory, InterestSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 积分来源（由持久化/奖励子系统实现）
pub trait PointsSource {
    /// 累计积分，正常情况下非负且单调不减
    fn points(&self) -> i64;
}

/// 活动类型来源（由活动列表子系统实现）
pub trait CategorySource {
    /// 活动类型的原始字符串，可能是代码尚未收录的新类型
    fn category(&self) -> &str;
}

/// 参与者资料（只读）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub city: Option<String>,
    /// 累计星数
    #[serde(alias = "stars")]
    pub points: i64,
    /// 兴趣标签
    #[serde(default, alias = "hobbies")]
    pub interest_tags: InterestSet,
}

impl ParticipantProfile {
    pub fn new(id: impl Into<String>, points: i64, interest_tags: InterestSet) -> Self {
        Self {
            id: id.into(),
            points,
            interest_tags,
            ..Default::default()
        }
    }
}

impl PointsSource for ParticipantProfile {
    fn points(&self) -> i64 {
        self.points
    }
}

/// 活动列表项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListing {
    pub id: String,
    pub title: String,
    /// 活动类型原始字符串
    #[serde(alias = "event_type")]
    pub category: String,
    pub city: String,
    pub star_value: StarValue,
    pub event_date: DateTime<Utc>,
}

impl EventListing {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        city: impl Into<String>,
        event_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            city: city.into(),
            star_value: StarValue::default(),
            event_date,
        }
    }

    /// 解析后的活动类型
    pub fn known_category(&self) -> Option<EventCategory> {
        EventCategory::parse(&self.category)
    }
}

impl CategorySource for EventListing {
    fn category(&self) -> &str {
        &self.category
    }
}

impl<T: CategorySource + ?Sized> CategorySource for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

/// 活动奖励星值
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct StarValue(u32);

impl StarValue {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 5_000;
    pub const DEFAULT: u32 = 100;

    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ProgressionError::InvalidStarValue {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for StarValue {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for StarValue {
    type Error = ProgressionError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StarValue> for u32 {
    fn from(value: StarValue) -> Self {
        value.0
    }
}
