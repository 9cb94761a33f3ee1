//! 进阶引擎入口
//!
//! 将等级引擎与兴趣匹配器组合在一起，支持按部署配置替换阶梯与匹配表。

use crate::compatibility::CompatibilityTable;
use crate::error::Result;
use crate::ladder::RankLadder;
use crate::matcher::InterestMatcher;
use crate::models::{CategorySource, ParticipantProfile, PointsSource};
use crate::rank::{RankEngine, RankStatus};
use std::sync::Arc;
use tracing::{info, instrument};
use veteran_shared::config::{AppConfig, ProgressionConfig};
use veteran_shared::observability;

/// 进阶引擎
///
/// 内部状态只读，克隆开销为两次引用计数递增。
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    ranks: Arc<RankEngine>,
    matcher: Arc<InterestMatcher>,
}

impl ProgressionEngine {
    pub fn new(ladder: RankLadder, table: CompatibilityTable) -> Self {
        Self {
            ranks: Arc::new(RankEngine::new(ladder)),
            matcher: Arc::new(InterestMatcher::new(table)),
        }
    }

    /// 按配置构建引擎
    ///
    /// 未配置阶梯时使用内置八级阶梯，未配置匹配表时使用组织方表。
    #[instrument(skip(config))]
    pub fn from_config(config: &ProgressionConfig) -> Result<Self> {
        let ladder = if config.has_custom_ladder() {
            RankLadder::from_settings(&config.ladder)?
        } else {
            RankLadder::veteran()
        };

        let table = match &config.compatibility {
            Some(setting) => CompatibilityTable::from_setting(setting),
            None => CompatibilityTable::organizer(),
        };

        info!(
            tiers = ladder.len(),
            top_tier = %ladder.top().name,
            table_version = table.version(),
            custom_ladder = config.has_custom_ladder(),
            "进阶引擎已初始化"
        );

        Ok(Self::new(ladder, table))
    }

    /// 集成方启动入口：加载配置、初始化日志并构建引擎
    pub fn bootstrap(service_name: &str) -> anyhow::Result<Self> {
        let config = AppConfig::load(service_name)?;
        Self::bootstrap_with(&config)
    }

    /// 使用已加载的配置启动
    pub fn bootstrap_with(config: &AppConfig) -> anyhow::Result<Self> {
        let obs_config = config
            .observability
            .clone()
            .with_service_name(&config.service_name);
        observability::init(&obs_config)?;

        Ok(Self::from_config(&config.progression)?)
    }

    pub fn ranks(&self) -> &RankEngine {
        &self.ranks
    }

    pub fn matcher(&self) -> &InterestMatcher {
        &self.matcher
    }

    /// 参与者的等级快照
    pub fn rank_status<P: PointsSource + ?Sized>(&self, source: &P) -> Result<RankStatus> {
        self.ranks.status(source.points())
    }

    /// 为参与者排列活动：与其兴趣相关的活动在前
    pub fn personalize_feed<T: CategorySource>(
        &self,
        profile: &ParticipantProfile,
        events: Vec<T>,
    ) -> Vec<T> {
        self.matcher.rank_events(events, &profile.interest_tags)
    }
}
