use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_BUDGET_CATEGORY;

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub rollup: RollupConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 汇总计算参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupConfig {
    pub tax_rate: String,                 // 税込换算系数, 十进制字符串
    pub default_budget_category: String,  // 予算明細未指定费目时使用
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            tax_rate: "1.1".to_string(),
            default_budget_category: DEFAULT_BUDGET_CATEGORY.to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            rollup: RollupConfig {
                tax_rate: std::env::var("TAX_RATE").unwrap_or(defaults.rollup.tax_rate),
                default_budget_category: std::env::var("DEFAULT_BUDGET_CATEGORY")
                    .unwrap_or(defaults.rollup.default_budget_category),
            },
            log: LogConfig {
                level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log.level),
            },
        }
    }

    /// 分层加载: 环境变量 (SERVER_PORT 等) → config/rollup.toml (可选) → ROLLUP__* 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/rollup")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Self::layered(path, Self::from_env())
    }

    /// 以 `base` 为底层默认值叠加文件与 ROLLUP__* 环境变量
    pub fn layered(path: &str, base: AppConfig) -> Result<Self, ConfigError> {
        let defaults = base;
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("rollup.tax_rate", defaults.rollup.tax_rate)?
            .set_default(
                "rollup.default_budget_category",
                defaults.rollup.default_budget_category,
            )?
            .set_default("log.level", defaults.log.level)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("ROLLUP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
