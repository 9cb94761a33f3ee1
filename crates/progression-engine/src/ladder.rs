//! 等级阶梯
//!
//! 阶梯在构建时完成全部校验，之后只读；引擎通过参数显式注入阶梯，
//! 便于按部署切换不同的阶梯。

use crate::error::{ProgressionError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use veteran_shared::config::TierSetting;

/// 等级
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankTier {
    pub name: String,
    /// 达到该等级所需的最低累计积分
    pub threshold: u64,
}

impl RankTier {
    pub fn new(name: impl Into<String>, threshold: u64) -> Self {
        Self {
            name: name.into(),
            threshold,
        }
    }
}

/// 经过校验的有序等级阶梯
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankLadder {
    tiers: Vec<RankTier>,
}

impl RankLadder {
    /// 构建阶梯
    ///
    /// 要求：非空；首个门槛为 0；门槛严格递增；名称非空且唯一。
    pub fn new(tiers: Vec<RankTier>) -> Result<Self> {
        Self::validate(&tiers)?;
        Ok(Self { tiers })
    }

    /// 老兵社区的标准八级阶梯（0 ~ 100,000 星）
    ///
    /// 门槛与已累计的积分数据绑定，不可调整。
    pub fn veteran() -> Self {
        Self {
            tiers: vec![
                RankTier::new("Bronze Veteran", 0),
                RankTier::new("Silver Veteran", 25_000),
                RankTier::new("Ruby Veteran", 40_000),
                RankTier::new("Golden Veteran", 50_000),
                RankTier::new("Diamond Veteran", 60_000),
                RankTier::new("Sapphire Veteran", 65_000),
                RankTier::new("Platinum Veteran", 70_000),
                RankTier::new("Eternal Sage", 100_000),
            ],
        }
    }

    /// 从配置项构建阶梯
    pub fn from_settings(settings: &[TierSetting]) -> Result<Self> {
        let tiers = settings
            .iter()
            .map(|s| RankTier::new(s.name.clone(), s.threshold))
            .collect();
        Self::new(tiers)
    }

    fn validate(tiers: &[RankTier]) -> Result<()> {
        let first = tiers
            .first()
            .ok_or_else(|| ProgressionError::InvalidLadder("阶梯不能为空".to_string()))?;

        if first.threshold != 0 {
            return Err(ProgressionError::InvalidLadder(format!(
                "首个等级 {} 的门槛必须为 0，实际 {}",
                first.name, first.threshold
            )));
        }

        let mut names = HashSet::with_capacity(tiers.len());
        for tier in tiers {
            if tier.name.trim().is_empty() {
                return Err(ProgressionError::InvalidLadder(
                    "等级名称不能为空".to_string(),
                ));
            }
            if !names.insert(tier.name.as_str()) {
                return Err(ProgressionError::InvalidLadder(format!(
                    "等级名称重复: {}",
                    tier.name
                )));
            }
        }

        for pair in tiers.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(ProgressionError::InvalidLadder(format!(
                    "门槛必须严格递增: {}({}) 之后是 {}({})",
                    pair[0].name, pair[0].threshold, pair[1].name, pair[1].threshold
                )));
            }
        }

        Ok(())
    }

    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// 构建时已校验，恒为 false
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RankTier> {
        self.tiers.get(index)
    }

    /// 最高等级
    pub fn top(&self) -> &RankTier {
        // 构建时已保证非空
        &self.tiers[self.tiers.len() - 1]
    }

    /// 按名称查找等级
    pub fn find(&self, name: &str) -> Option<&RankTier> {
        self.tiers.iter().find(|t| t.name == name)
    }
}

impl Default for RankLadder {
    fn default() -> Self {
        Self::veteran()
    }
}

impl<'de> Deserialize<'de> for RankLadder {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let tiers = Vec::<RankTier>::deserialize(deserializer)?;
        Self::new(tiers).map_err(serde::de::Error::custom)
    }
}
