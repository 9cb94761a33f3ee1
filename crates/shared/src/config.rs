//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, VeteranError};
use crate::observability::ObservabilityConfig;

/// 等级配置项
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TierSetting {
    pub name: String,
    pub threshold: u64,
}

/// 单个活动类型的兴趣映射
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategorySetting {
    /// 活动类型显示名，如 "Plantation Drive"
    pub category: String,
    /// 与该活动类型相关的兴趣标签
    #[serde(default)]
    pub interests: Vec<String>,
}

/// 预置兴趣匹配表
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityPreset {
    /// 组织方视角：活动 -> 兴趣
    #[default]
    Organizer,
    /// 老兵视角：兴趣 -> 活动
    Volunteer,
}

/// 兴趣匹配表配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompatibilitySetting {
    /// 匹配表版本号，未配置时沿用预置表的版本
    pub version: Option<u32>,
    #[serde(default)]
    pub preset: CompatibilityPreset,
    /// 覆盖预置表中的条目
    #[serde(default)]
    pub categories: Vec<CategorySetting>,
}

/// 进阶引擎配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// 自定义等级阶梯，为空时使用内置阶梯
    pub ladder: Vec<TierSetting>,
    /// 兴趣匹配表，未配置时使用内置 organizer 表
    pub compatibility: Option<CompatibilitySetting>,
}

impl ProgressionConfig {
    /// 是否配置了自定义等级阶梯
    pub fn has_custom_ladder(&self) -> bool {
        !self.ladder.is_empty()
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub observability: ObservabilityConfig,
    pub progression: ProgressionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "progression-engine".to_string(),
            environment: "development".to_string(),
            observability: ObservabilityConfig::default(),
            progression: ProgressionConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（VETERAN_ 前缀，层级用双下划线，如 VETERAN_OBSERVABILITY__LOG_LEVEL）
    pub fn load(service_name: &str) -> Result<Self> {
        let env = std::env::var("VETERAN_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from_dir(service_name, &env, Path::new(&config_dir))
    }

    /// 从指定目录加载配置
    pub fn load_from_dir(
        service_name: &str,
        environment: &str,
        config_dir: &Path,
    ) -> Result<Self> {
        let config: Self = Self::builder(service_name, environment, config_dir)?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn builder(
        service_name: &str,
        environment: &str,
        config_dir: &Path,
    ) -> std::result::Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", environment)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", environment))).required(false),
            )
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            // 环境变量覆盖（VETERAN_OBSERVABILITY__LOG_LEVEL -> observability.log_level）
            .add_source(
                Environment::with_prefix("VETERAN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    /// 校验与引擎无关的基础配置
    ///
    /// 阶梯与匹配表的语义校验在构建引擎时完成。
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(VeteranError::InvalidConfig {
                section: "service_name".to_string(),
                message: "服务名不能为空".to_string(),
            });
        }

        Ok(())
    }
}
