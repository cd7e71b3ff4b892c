// 宝可梦图鉴库入口
// 浏览、详情与对比三个视图的数据获取、筛选排序、进化链重建与对比汇总

// 核心模块
pub mod core;
pub mod utils;

// 领域模型与视图逻辑
pub mod pokemon;
pub mod browse;
pub mod compare;

// 数据访问与会话状态
pub mod data;
pub mod states;

// 终端渲染
pub mod ui;

// 重新导出核心类型
pub use core::{ConfigManager, PokedexConfig, PokedexError, Result};
pub use pokemon::{build_stages, EvolutionNode, Pokemon, PokemonSummary, PokemonType, StatType};
pub use browse::{FilterCriteria, SortField, SortOrder};
pub use compare::{CompareList, CompareStatus, ComparisonView};
pub use data::{PokeApiClient, PokedexApi};

pub const VERSION: &str = "0.1.0";
pub const NAME: &str = "pokedex";

// 图鉴常量
pub mod constants {
    // 对比列表容量
    pub const MAX_COMPARE: usize = 4;
    // 浏览范围内的最大编号，更大的编号是特殊形态
    pub const MAX_POKEMON_ID: u32 = 1025;
    pub const ITEMS_PER_PAGE: u32 = 24;
    pub const SEARCH_DEBOUNCE_MS: u64 = 300;

    pub const DEFAULT_ENDPOINT: &str = "https://beta.pokeapi.co/graphql/v1beta";
}

// 初始化日志，RUST_LOG 优先
pub fn init() -> Result<()> {
    init_with_level("info")
}

// 过滤器放开到 trace，实际级别由 log::max_level 控制，
// 这样启动时先按默认级别输出，读完配置后还能再调整
pub fn init_with_level(level: &str) -> Result<()> {
    let max_level = parse_log_level(level)?;
    let env = env_logger::Env::default().default_filter_or(format!("{}=trace", NAME));

    // 重复初始化（例如多个测试）不是错误，只调整级别
    let installed = env_logger::Builder::from_env(env).try_init().is_ok();
    apply_max_level(max_level);
    if installed {
        log::info!("宝可梦图鉴初始化完成 v{}", VERSION);
    }

    Ok(())
}

/// 按配置调整日志级别；设置了 RUST_LOG 时保持环境变量的级别
pub fn set_log_level(level: &str) -> Result<()> {
    let max_level = parse_log_level(level)?;
    apply_max_level(max_level);
    log::debug!("日志级别: {}", max_level);
    Ok(())
}

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter> {
    level
        .trim()
        .parse()
        .map_err(|_| PokedexError::ConfigError(format!("无效的日志级别: {}", level)))
}

fn apply_max_level(max_level: log::LevelFilter) {
    if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        log::set_max_level(max_level);
    }
}

pub fn cleanup() {
    log::info!("清理图鉴资源");
}

/// 单次远程查询的计时，结束时记录耗时，超过阈值按慢查询告警
pub struct QueryTimer {
    started: std::time::Instant,
    query: &'static str,
    slow_after: std::time::Duration,
}

impl QueryTimer {
    pub fn start(query: &'static str, slow_after: std::time::Duration) -> Self {
        Self {
            started: std::time::Instant::now(),
            query,
            slow_after,
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.started.elapsed()
    }

    pub fn is_slow(&self) -> bool {
        self.elapsed() >= self.slow_after
    }
}

impl Drop for QueryTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed().as_secs_f64() * 1000.0;
        if self.is_slow() {
            log::warn!(
                "慢查询 {} 耗时 {:.0}ms，阈值 {}ms",
                self.query,
                elapsed_ms,
                self.slow_after.as_millis()
            );
        } else {
            log::debug!("查询 {} 耗时 {:.2}ms", self.query, elapsed_ms);
        }
    }
}

// 计时包裹一段查询代码，块的值原样返回
#[macro_export]
macro_rules! timed_query {
    ($query:expr, $slow_after:expr, $code:block) => {{
        let _timer = $crate::QueryTimer::start($query, $slow_after);
        $code
    }};
}
