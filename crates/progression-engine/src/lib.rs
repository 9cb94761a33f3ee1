//! 老兵社区进阶引擎
//!
//! 提供纯函数式的等级推导与兴趣匹配能力：
//! - 累计星数 -> 等级、下一等级与升级进度
//! - 兴趣标签 × 活动类型匹配，以及相关活动优先的稳定排序
//! - 按部署配置替换等级阶梯与匹配表

pub mod compatibility;
pub mod engine;
pub mod error;
pub mod ladder;
pub mod listing;
pub mod matcher;
pub mod models;
pub mod rank;
pub mod taxonomy;

pub use compatibility::CompatibilityTable;
pub use engine::ProgressionEngine;
pub use error::{ProgressionError, Result};
pub use ladder::{RankLadder, RankTier};
pub use listing::EventFilter;
pub use matcher::InterestMatcher;
pub use models::{CategorySource, EventListing, ParticipantProfile, PointsSource, StarValue};
pub use rank::{Progress, RankEngine, RankStatus};
pub use taxonomy::{EventCategory, InterestSet, InterestTag};
