//! 等级计算
//!
//! 由累计积分推导当前等级、下一等级以及升级进度。纯函数，无副作用。

use crate::error::{ProgressionError, Result};
use crate::ladder::{RankLadder, RankTier};
use serde::Serialize;

/// 小于 100 的最大 f64，未到最高等级时进度的上限
const BELOW_COMPLETE: f64 = f64::from_bits(100f64.to_bits() - 1);

/// 升级进度
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// 当前等级区间内的完成百分比，取值 [0, 100]
    pub percent: f64,
    /// 距离下一等级还差的积分，已到最高等级时为 0
    pub points_remaining: u64,
}

impl Progress {
    /// 已达最高等级时的进度
    pub const COMPLETE: Progress = Progress {
        percent: 100.0,
        points_remaining: 0,
    };

    /// 四舍五入后的整数百分比（用于进度条标签）
    pub fn rounded_percent(&self) -> u8 {
        self.percent.round().clamp(0.0, 100.0) as u8
    }
}

/// 展示用的等级快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankStatus {
    pub points: u64,
    pub current: RankTier,
    pub next: Option<RankTier>,
    pub progress: Progress,
}

/// 等级引擎
///
/// 持有一份只读阶梯，可在任意线程间共享。
#[derive(Debug, Clone, Default)]
pub struct RankEngine {
    ladder: RankLadder,
}

impl RankEngine {
    pub fn new(ladder: RankLadder) -> Self {
        Self { ladder }
    }

    pub fn ladder(&self) -> &RankLadder {
        &self.ladder
    }

    /// 当前等级在阶梯中的下标
    pub fn tier_index(&self, points: i64) -> Result<usize> {
        let points = Self::checked_points(points)?;
        // 首个门槛为 0，因此至少有一个等级满足 threshold <= points
        let count = self
            .ladder
            .tiers()
            .partition_point(|tier| tier.threshold <= points);
        Ok(count - 1)
    }

    /// 当前等级：门槛不超过积分的最高等级
    pub fn current_tier(&self, points: i64) -> Result<&RankTier> {
        let index = self.tier_index(points)?;
        Ok(&self.ladder.tiers()[index])
    }

    /// 下一等级，已是最高等级时返回 None
    pub fn next_tier(&self, points: i64) -> Result<Option<&RankTier>> {
        let index = self.tier_index(points)?;
        Ok(self.ladder.get(index + 1))
    }

    /// 升级进度
    pub fn progress(&self, points: i64) -> Result<Progress> {
        let index = self.tier_index(points)?;
        let current = &self.ladder.tiers()[index];
        let Some(next) = self.ladder.get(index + 1) else {
            return Ok(Progress::COMPLETE);
        };

        // tier_index 已保证 points 非负且 current.threshold <= points < next.threshold
        let points = points as u64;
        let span = (next.threshold - current.threshold) as f64;
        let gained = (points - current.threshold) as f64;
        // 门槛超过 2^53 时比值可能被舍入为 1，未到下一等级前不得报告 100
        let percent = (100.0 * gained / span).clamp(0.0, BELOW_COMPLETE);

        Ok(Progress {
            percent,
            points_remaining: next.threshold - points,
        })
    }

    /// 一次性计算展示所需的全部等级信息
    pub fn status(&self, points: i64) -> Result<RankStatus> {
        let index = self.tier_index(points)?;
        Ok(RankStatus {
            points: points as u64,
            current: self.ladder.tiers()[index].clone(),
            next: self.ladder.get(index + 1).cloned(),
            progress: self.progress(points)?,
        })
    }

    fn checked_points(points: i64) -> Result<u64> {
        u64::try_from(points).map_err(|_| ProgressionError::InvalidInput { points })
    }
}
