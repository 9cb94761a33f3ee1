//! 日志与追踪初始化
//!
//! 基于 tracing-subscriber 组装过滤器与输出层。

use anyhow::Result;
use parking_lot::Mutex;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::ObservabilityConfig;

/// 全局 subscriber 安装标记，加锁保证并发调用只安装一次
static INSTALLED: Mutex<bool> = parking_lot::const_mutex(false);

/// 构建环境过滤器：RUST_LOG 优先，其次为配置的日志级别
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化 tracing（日志）
///
/// 首次安装返回 `true`，已安装过返回 `false`。
pub fn init(config: &ObservabilityConfig) -> Result<bool> {
    let mut installed = INSTALLED.lock();
    if *installed {
        return Ok(false);
    }

    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt_layer)
        .try_init()?;

    *installed = true;
    Ok(true)
}
