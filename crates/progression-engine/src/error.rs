//! 进阶引擎错误类型

use thiserror::Error;
use veteran_shared::error::VeteranError;

#[derive(Debug, Error)]
pub enum ProgressionError {
    /// 负积分只可能来自上游奖励子系统的缺陷，不做截断
    #[error("无效的积分: {points}，积分总数不能为负")]
    InvalidInput { points: i64 },

    #[error("等级阶梯无效: {0}")]
    InvalidLadder(String),

    #[error("无效的星值: {value}，允许范围 {min}..={max}")]
    InvalidStarValue { value: i64, min: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, ProgressionError>;

impl ProgressionError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::InvalidLadder(_) => "INVALID_LADDER",
            Self::InvalidStarValue { .. } => "INVALID_STAR_VALUE",
        }
    }
}

impl From<ProgressionError> for VeteranError {
    fn from(err: ProgressionError) -> Self {
        match err {
            ProgressionError::InvalidInput { points } => VeteranError::InvalidPoints { points },
            ProgressionError::InvalidLadder(msg) => VeteranError::InvalidLadder(msg),
            ProgressionError::InvalidStarValue { value, min, max } => {
                VeteranError::InvalidArgument {
                    field: "star_value".to_string(),
                    message: format!("{} 超出范围 {}..={}", value, min, max),
                }
            }
        }
    }
}
