/*
* 图鉴配置管理：
* 1. 配置来源依次为默认值、TOML配置文件、环境变量
* 2. 配置文件缺失时使用默认值，格式错误时报告配置错误
* 3. 加载后统一校验
*/

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use log::{debug, info, warn};

use crate::constants;
use crate::core::error::{PokedexError, Result};

pub const ENDPOINT_ENV: &str = "POKEDEX_ENDPOINT";
pub const PAGE_SIZE_ENV: &str = "POKEDEX_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokedexConfig {
    pub api: ApiConfig,
    pub browse: BrowseConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    // 本地化文本的语言ID，9 = English
    pub language_id: u32,
    // 超过该耗时的查询记为慢查询
    pub slow_query_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    pub page_size: u32,
    pub search_debounce_ms: u64,
    pub max_pokemon_id: u32,
    pub compare_capacity: usize,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            browse: BrowseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 10_000,
            language_id: 9,
            slow_query_ms: 2_000,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: constants::ITEMS_PER_PAGE,
            search_debounce_ms: constants::SEARCH_DEBOUNCE_MS,
            max_pokemon_id: constants::MAX_POKEMON_ID,
            compare_capacity: constants::MAX_COMPARE,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn slow_query(&self) -> Duration {
        Duration::from_millis(self.slow_query_ms)
    }
}

impl BrowseConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

pub struct ConfigManager;

impl ConfigManager {
    // 默认配置路径: <config_dir>/pokedex/config.toml
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| PokedexError::ConfigError("无法确定配置目录".to_string()))?;
        path.push("pokedex");
        path.push("config.toml");
        Ok(path)
    }

    // 加载配置文件并应用环境变量覆盖
    pub fn load(path: Option<&Path>) -> Result<PokedexConfig> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = Self::load_from_file(&path)?;
        Self::apply_env_overrides(&mut config)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<PokedexConfig> {
        if !path.exists() {
            info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(PokedexConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let config: PokedexConfig = toml::from_str(&content).map_err(|e| {
            PokedexError::ConfigError(format!("解析配置文件失败: {}", e))
        })?;

        Self::validate_config(&config)?;
        info!("成功加载配置文件: {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(config: &PokedexConfig, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(config).map_err(|e| {
            PokedexError::ConfigError(format!("序列化配置失败: {}", e))
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        debug!("配置已保存到: {:?}", path);
        Ok(())
    }

    pub fn apply_env_overrides(config: &mut PokedexConfig) -> Result<()> {
        if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
            debug!("使用环境变量 {} 覆盖接口地址", ENDPOINT_ENV);
            config.api.endpoint = endpoint;
        }

        if let Ok(raw) = env::var(PAGE_SIZE_ENV) {
            match raw.parse::<u32>() {
                Ok(size) => config.browse.page_size = size,
                Err(_) => {
                    warn!("忽略无效的 {}: {}", PAGE_SIZE_ENV, raw);
                }
            }
        }

        Ok(())
    }

    pub fn validate_config(config: &PokedexConfig) -> Result<()> {
        let endpoint = config.api.endpoint.trim();
        if endpoint.is_empty() {
            return Err(PokedexError::ConfigError("接口地址不能为空".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(PokedexError::ConfigError(format!(
                "接口地址必须是http(s)地址: {}",
                endpoint
            )));
        }

        if config.browse.page_size == 0 || config.browse.page_size > 100 {
            return Err(PokedexError::ConfigError("每页数量必须在1-100之间".to_string()));
        }

        if !(2..=constants::MAX_COMPARE).contains(&config.browse.compare_capacity) {
            return Err(PokedexError::ConfigError(format!(
                "对比数量必须在2-{}之间",
                constants::MAX_COMPARE
            )));
        }

        if config.browse.max_pokemon_id == 0 {
            return Err(PokedexError::ConfigError("最大编号必须大于0".to_string()));
        }

        crate::parse_log_level(&config.log_level)?;

        Ok(())
    }
}
