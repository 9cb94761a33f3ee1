//! 共享库
//!
//! 包含进阶引擎与集成方共用的配置加载、错误处理与日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;
