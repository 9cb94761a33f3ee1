//! 统一错误处理模块
//!
//! 定义集成方共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum VeteranError {
    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("配置无效: {section} - {message}")]
    InvalidConfig { section: String, message: String },

    // ==================== 进阶引擎错误 ====================
    #[error("无效的积分: {points}")]
    InvalidPoints { points: i64 },

    #[error("等级阶梯无效: {0}")]
    InvalidLadder(String),

    // ==================== 验证错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, VeteranError>;

impl VeteranError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::InvalidPoints { .. } => "INVALID_POINTS",
            Self::InvalidLadder(_) => "INVALID_LADDER",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }

    /// 是否属于上游数据完整性问题
    ///
    /// 负积分等错误只可能来自奖励子系统的缺陷，集成方应按内部错误记录，
    /// 而不是展示给用户。
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::InvalidPoints { .. } | Self::InvalidLadder(_))
    }
}
