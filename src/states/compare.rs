// 对比页加载
// 并发查询所有已选宝可梦的详情，没有记录的编号跳过

use futures::future::join_all;
use log::{info, warn};

use crate::compare::{CompareList, CompareStatus};
use crate::core::Result;
use crate::data::PokedexApi;
use crate::pokemon::{Pokemon, PokemonId};

/// 并发查询详情，结果顺序与输入一致；任一请求失败则整体失败
pub async fn fetch_details<A: PokedexApi + ?Sized>(api: &A, ids: &[PokemonId]) -> Result<Vec<Pokemon>> {
    let results = join_all(ids.iter().map(|&id| api.pokemon_detail(id))).await;

    let mut details = Vec::with_capacity(ids.len());
    for (id, result) in ids.iter().zip(results) {
        match result? {
            Some(pokemon) => details.push(pokemon),
            None => warn!("对比对象 #{} 不存在，已跳过", id),
        }
    }
    Ok(details)
}

pub async fn load_comparison<A: PokedexApi + ?Sized>(api: &A, selection: &CompareList) -> Result<CompareStatus> {
    if !selection.is_comparable() {
        return Ok(CompareStatus::NeedMore { selected: selection.len() });
    }

    let details = fetch_details(api, &selection.ids()).await?;
    info!("对比 {} 只宝可梦", details.len());
    Ok(CompareStatus::evaluate(selection.len(), &details))
}
