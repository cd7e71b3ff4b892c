// 会话状态
// 浏览、详情、对比三个视图的异步加载与状态管理。
// 所有远程请求都通过 RequestGuard 保证最后一次请求的结果生效。

pub mod browse;
pub mod compare;
pub mod debounce;
pub mod detail;
pub mod request;

pub use browse::{BrowseSession, BrowseSnapshot};
pub use compare::{fetch_details, load_comparison};
pub use debounce::Debouncer;
pub use detail::{AbilityEntry, DetailLoader, DetailState, EvolutionEntry, ProfileView, StatBar};
pub use request::RequestGuard;
