// 浏览模块 - 筛选谓词、排序方案、分页

pub mod filter;
pub mod pager;
pub mod sort;

pub use filter::{
    build_conditions, filter_local, matches_all, Condition, FilterCriteria, FilterOptions, SortField,
    SortOrder,
};
pub use pager::{has_next, has_prev, page_offset, page_window, total_pages};
pub use sort::{sort_by_stat_total, ServerOrder, ServerOrderField, SortPlan};
