// 核心模块 - 错误处理与配置管理
// 其余各模块共享的基础类型

pub mod config;
pub mod error;

// 重新导出核心类型
pub use config::{ApiConfig, BrowseConfig, ConfigManager, PokedexConfig};
pub use error::{ErrorRecovery, ErrorSeverity, PokedexError, Result};
