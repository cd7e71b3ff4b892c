// 错误处理系统
// 统一的图鉴错误类型：远程查询失败、数据解码失败、配置错误
// 所有失败都只影响发起请求的视图，不会终止进程

use std::io;
use thiserror::Error;

// 图鉴主要错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokedexError {
    // 网络相关错误
    #[error("网络错误: {0}")]
    Transport(String),
    #[error("查询失败: {0}")]
    Query(String),
    #[error("数据解码失败: {0}")]
    Decode(String),

    // 查找不到记录（详情查询本身用 Ok(None) 表达）
    #[error("未找到: {0}")]
    NotFound(String),

    // 配置与输入
    #[error("配置错误: {0}")]
    ConfigError(String),
    #[error("输入无效: {0}")]
    InvalidInput(String),

    // I/O错误
    #[error("文件错误: {0}")]
    FileError(String),
    #[error("解析错误: {0}")]
    ParseError(String),
}

// Result类型别名
pub type Result<T> = std::result::Result<T, PokedexError>;

// 错误转换实现
impl From<io::Error> for PokedexError {
    fn from(error: io::Error) -> Self {
        PokedexError::FileError(error.to_string())
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(error: serde_json::Error) -> Self {
        PokedexError::Decode(error.to_string())
    }
}

impl From<toml::de::Error> for PokedexError {
    fn from(error: toml::de::Error) -> Self {
        PokedexError::ConfigError(error.to_string())
    }
}

impl From<reqwest::Error> for PokedexError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            PokedexError::Decode(error.to_string())
        } else {
            PokedexError::Transport(error.to_string())
        }
    }
}

// 错误创建辅助宏
#[macro_export]
macro_rules! pokedex_error {
    ($variant:ident, $msg:expr) => {
        $crate::PokedexError::$variant($msg.to_string())
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::PokedexError::$variant(format!($fmt, $($arg)*))
    };
}

// 错误恢复策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRecovery {
    // 停止加载并保持空视图，记录日志，不自动重试
    Surface,
    // 展示"未找到"状态
    ShowNotFound,
    UseDefault,
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PokedexError {
    // 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PokedexError::ConfigError(_) => ErrorSeverity::Critical,
            PokedexError::Transport(_) | PokedexError::Query(_) => ErrorSeverity::High,
            PokedexError::Decode(_) | PokedexError::FileError(_) | PokedexError::ParseError(_) => {
                ErrorSeverity::Medium
            }
            PokedexError::NotFound(_) | PokedexError::InvalidInput(_) => ErrorSeverity::Low,
        }
    }

    // 获取推荐的恢复策略
    pub fn recovery_strategy(&self) -> ErrorRecovery {
        match self {
            PokedexError::ConfigError(_) => ErrorRecovery::Abort,
            PokedexError::NotFound(_) => ErrorRecovery::ShowNotFound,
            PokedexError::InvalidInput(_) | PokedexError::FileError(_) => ErrorRecovery::UseDefault,
            _ => ErrorRecovery::Surface,
        }
    }

    // 检查是否为可恢复错误
    pub fn is_recoverable(&self) -> bool {
        self.recovery_strategy() != ErrorRecovery::Abort
    }
}
