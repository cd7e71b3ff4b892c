// 排序方案
//
// 编号与名称在服务端排序；种族值总和无法在服务端排序，
// 只能对已取回的一页在本地排序，因此该排序只在单页内成立。

use serde::{Deserialize, Serialize};

use super::filter::{SortField, SortOrder};
use crate::pokemon::PokemonSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerOrderField {
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerOrder {
    pub field: ServerOrderField,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortPlan {
    pub server: ServerOrder,
    // 取回后按种族值总和排序的方向
    pub client_stat_total: Option<SortOrder>,
}

impl SortPlan {
    pub fn resolve(field: SortField, order: SortOrder) -> Self {
        match field {
            SortField::Id => Self {
                server: ServerOrder { field: ServerOrderField::Id, order },
                client_stat_total: None,
            },
            SortField::Name => Self {
                server: ServerOrder { field: ServerOrderField::Name, order },
                client_stat_total: None,
            },
            // 服务端仍按编号同方向排序，决定分页内容
            SortField::StatTotal => Self {
                server: ServerOrder { field: ServerOrderField::Id, order },
                client_stat_total: Some(order),
            },
        }
    }

    pub fn apply_client(&self, page: &mut [PokemonSummary]) {
        if let Some(order) = self.client_stat_total {
            sort_by_stat_total(page, order);
        }
    }
}

// 稳定排序，总和相同时保持服务端顺序
pub fn sort_by_stat_total(page: &mut [PokemonSummary], order: SortOrder) {
    page.sort_by(|a, b| order.apply(a.stat_total().cmp(&b.stat_total())));
}
