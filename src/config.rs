use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// 数据源配置: 实时查询超时与合成回退种子
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// 实时查询最长等待秒数, 超时即触发回退
    pub fetch_timeout_secs: u64,
    /// 固定种子时合成数据可复现 (测试/演示用); None 则每次随机
    pub synthetic_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/theftdb".to_string()),
            },
            source: SourceConfig {
                fetch_timeout_secs: 10,
                synthetic_seed: None,
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/theftdb".to_string()),
            },
            source: SourceConfig {
                fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                synthetic_seed: std::env::var("SYNTHETIC_SEED")
                    .ok()
                    .and_then(|v| v.parse().ok()),
            },
        }
    }
}
