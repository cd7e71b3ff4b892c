// 对比列表
//
// 会话级的对比选择：有序、按编号去重、最多 capacity 个。
// 由应用顶层持有并显式传递给需要读写它的组件；
// 容量与去重规则只在这里检查。

use serde::{Deserialize, Serialize};
use log::debug;

use crate::constants::MAX_COMPARE;
use crate::pokemon::{PokemonId, PokemonSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareList {
    entries: Vec<PokemonSummary>,
    capacity: usize,
}

impl Default for CompareList {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareList {
    pub fn new() -> Self {
        Self::with_capacity(MAX_COMPARE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 加入对比，已满或已存在时不做任何事。返回列表是否变化。
    pub fn add(&mut self, pokemon: PokemonSummary) -> bool {
        if self.is_full() {
            debug!("对比列表已满，忽略 #{}", pokemon.id);
            return false;
        }
        if self.contains(pokemon.id) {
            return false;
        }
        self.entries.push(pokemon);
        true
    }

    /// 只按编号加入，规则与 add 相同
    pub fn add_id(&mut self, id: PokemonId) -> bool {
        self.add(PokemonSummary::placeholder(id))
    }

    /// 按输入顺序逐个加入，返回列表和被拒绝的编号（重复或超出容量）
    pub fn from_ids(ids: &[PokemonId], capacity: usize) -> (Self, Vec<PokemonId>) {
        let mut list = Self::with_capacity(capacity);
        let rejected = ids.iter().copied().filter(|&id| !list.add_id(id)).collect();
        (list, rejected)
    }

    /// 按编号移除，不存在时不做任何事
    pub fn remove(&mut self, id: PokemonId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // 至少两只才能对比
    pub fn is_comparable(&self) -> bool {
        self.entries.len() >= 2
    }

    pub fn iter(&self) -> impl Iterator<Item = &PokemonSummary> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<PokemonId> {
        self.entries.iter().map(|p| p.id).collect()
    }

    pub fn as_slice(&self) -> &[PokemonSummary] {
        &self.entries
    }
}
