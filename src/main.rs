// 宝可梦图鉴命令行入口
// 浏览列表、查看详情、对比多只宝可梦、列出筛选项

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use pokedex::browse::FilterCriteria;
use pokedex::compare::CompareList;
use pokedex::pokemon::{Generation, PokemonId, PokemonType};
use pokedex::states::{load_comparison, BrowseSession, DetailLoader, DetailState};
use pokedex::{cleanup, init, pokedex_error, set_log_level, ui};
use pokedex::{ConfigManager, PokeApiClient, PokedexApi, PokedexConfig, SortField, SortOrder};

#[derive(Parser)]
#[command(name = "pokedex", version, about = "Browse and compare Pokémon from PokeAPI")]
struct Cli {
    /// 配置文件路径，默认使用用户配置目录
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 分页浏览
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long = "type")]
        pokemon_type: Option<PokemonType>,
        /// 例如 generation-i
        #[arg(long)]
        generation: Option<String>,
        #[arg(long, default_value = "id")]
        sort: SortField,
        #[arg(long, default_value = "asc")]
        order: SortOrder,
        /// 从1开始
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// 查看详情
    Show { id: PokemonId },
    /// 对比2-4只
    Compare {
        #[arg(required = true)]
        ids: Vec<PokemonId>,
    },
    /// 列出属性和世代
    Filters,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 先按默认级别启动日志，配置加载过程中的日志才能输出
    if let Err(e) = init() {
        eprintln!("日志初始化失败: {}", e);
    }

    let config = match ConfigManager::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("配置加载失败: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = set_log_level(&config.log_level) {
        warn!("{}", e);
    }
    info!("端点: {}", config.api.endpoint);

    let code = match run(cli.command, config).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("错误: {:#}", e);
            1
        }
    };

    cleanup();
    std::process::exit(code);
}

async fn run(command: Command, config: PokedexConfig) -> anyhow::Result<()> {
    let api = Arc::new(PokeApiClient::new(&config.api));

    match command {
        Command::List { search, pokemon_type, generation, sort, order, page } => {
            let mut criteria = FilterCriteria::new().with_search(search).sorted_by(sort, order);
            if let Some(pokemon_type) = pokemon_type {
                criteria = criteria.with_type(pokemon_type);
            }
            if let Some(generation) = generation {
                criteria = criteria.with_generation(Generation::new(generation));
            }

            let mut session = BrowseSession::with_criteria(
                api,
                config.browse.clone(),
                criteria,
                page.saturating_sub(1),
            );
            session.refresh().await;

            let snapshot = session.snapshot();
            println!("{}", ui::render_browse(&snapshot));
            if let Some(message) = snapshot.error {
                bail!("列表加载失败: {}", message);
            }
        }
        Command::Show { id } => {
            let loader = DetailLoader::new(api).with_max_id(config.browse.max_pokemon_id);
            let state = loader.load(id).await.unwrap_or(DetailState::Loading);
            println!("{}", ui::render_detail(&state));
            match state {
                DetailState::NotFound => return Err(pokedex_error!(NotFound, "#{}", id).into()),
                DetailState::Failed(message) => bail!("详情加载失败: {}", message),
                _ => {}
            }
        }
        Command::Compare { ids } => {
            // 先按容量和去重规则选定编号，被忽略的编号不会被查询
            let (selection, rejected) =
                CompareList::from_ids(&ids, config.browse.compare_capacity);
            for id in rejected {
                warn!("忽略 #{}：重复或对比列表已满", id);
            }

            let status = load_comparison(api.as_ref(), &selection)
                .await
                .context("对比详情加载失败")?;
            println!("{}", ui::render_comparison(&status));
        }
        Command::Filters => {
            let options = api.filter_options().await.context("筛选项加载失败")?;
            println!("{}", ui::render_filter_options(&options));
        }
    }

    Ok(())
}
