// 对比模块 - 对比列表与对比汇总

pub mod aggregate;
pub mod selection;

pub use aggregate::{
    is_leading, max_by_stat, stat_maxima, stat_total, AttributeRow, CompareStatus,
    ComparisonColumn, ComparisonView, StatCell, StatRow, TotalCell,
};
pub use selection::CompareList;
