// 浏览会话
// 持有筛选条件、页码、加载状态与当前页结果。
// 条件变化时回到第0页并按防抖策略请求；翻页立即请求；
// 只有最新一次请求的结果会写入状态。

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use log::{debug, error, info};

use super::debounce::Debouncer;
use super::request::RequestGuard;
use crate::browse::{has_next, has_prev, page_window, total_pages, FilterCriteria};
use crate::core::BrowseConfig;
use crate::data::{ListRequest, PokedexApi};
use crate::pokemon::PokemonSummary;

#[derive(Debug, Default)]
struct SessionState {
    criteria: FilterCriteria,
    page: u32,
    loading: bool,
    items: Vec<PokemonSummary>,
    total_count: u64,
    error: Option<String>,
}

/// 某一时刻的浏览状态副本
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseSnapshot {
    pub criteria: FilterCriteria,
    pub page: u32,
    pub loading: bool,
    pub items: Vec<PokemonSummary>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page_buttons: Vec<u32>,
    pub has_prev: bool,
    pub has_next: bool,
    pub error: Option<String>,
}

pub struct BrowseSession<A: PokedexApi + 'static> {
    api: Arc<A>,
    config: BrowseConfig,
    state: Arc<Mutex<SessionState>>,
    guard: RequestGuard,
    debouncer: Debouncer,
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<A: PokedexApi + 'static> BrowseSession<A> {
    pub fn new(api: Arc<A>, config: BrowseConfig) -> Self {
        Self {
            api,
            config,
            state: Arc::new(Mutex::new(SessionState::default())),
            guard: RequestGuard::new(),
            debouncer: Debouncer::new(),
        }
    }

    /// 从给定条件开始的会话，不发起请求
    pub fn with_criteria(api: Arc<A>, config: BrowseConfig, criteria: FilterCriteria, page: u32) -> Self {
        let session = Self::new(api, config);
        {
            let mut state = lock(&session.state);
            state.criteria = criteria;
            state.page = page;
        }
        session
    }

    pub fn snapshot(&self) -> BrowseSnapshot {
        let state = lock(&self.state);
        let pages = total_pages(state.total_count, self.config.page_size);
        BrowseSnapshot {
            criteria: state.criteria.clone(),
            page: state.page,
            loading: state.loading,
            items: state.items.clone(),
            total_count: state.total_count,
            total_pages: pages,
            page_buttons: page_window(state.page, pages),
            has_prev: has_prev(state.page),
            has_next: has_next(state.page, pages),
            error: state.error.clone(),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        lock(&self.state).criteria.clone()
    }

    pub fn page(&self) -> u32 {
        lock(&self.state).page
    }

    /// 整体替换筛选条件。搜索文本变化时延迟请求，其余立即请求。
    pub fn update_criteria(&mut self, next: FilterCriteria) {
        let delay = {
            let mut state = lock(&self.state);
            if state.criteria == next {
                return;
            }
            let delay = state.criteria.debounce_delay(&next, self.config.search_debounce());
            state.criteria = next;
            state.page = 0;
            delay
        };
        debug!("筛选条件变化，{}ms 后请求", delay.as_millis());
        let task = self.fetch_task();
        self.debouncer.schedule(delay, task);
    }

    pub fn go_to_page(&mut self, page: u32) {
        {
            let mut state = lock(&self.state);
            if state.page == page {
                return;
            }
            state.page = page;
        }
        let task = self.fetch_task();
        self.debouncer.schedule(std::time::Duration::ZERO, task);
    }

    pub fn next_page(&mut self) {
        let snapshot = self.snapshot();
        if snapshot.has_next {
            self.go_to_page(snapshot.page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        let page = self.page();
        if has_prev(page) {
            self.go_to_page(page - 1);
        }
    }

    /// 立即按当前条件请求并等待结果写入
    pub async fn refresh(&mut self) {
        self.debouncer.cancel();
        self.fetch_task().await;
    }

    fn fetch_task(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        fetch_page(
            self.api.clone(),
            self.state.clone(),
            self.guard.clone(),
            self.config.clone(),
        )
    }
}

async fn fetch_page<A: PokedexApi + 'static>(
    api: Arc<A>,
    state: Arc<Mutex<SessionState>>,
    guard: RequestGuard,
    config: BrowseConfig,
) {
    let token = guard.issue();
    let (request, plan) = {
        let mut state = lock(&state);
        state.loading = true;
        ListRequest::for_page(&state.criteria, state.page, &config)
    };

    let result = api.list_pokemon(&request).await;

    if !guard.is_current(token) {
        debug!("丢弃过期的列表结果 (令牌 {})", token);
        return;
    }

    let mut state = lock(&state);
    state.loading = false;
    match result {
        Ok(mut page) => {
            plan.apply_client(&mut page.items);
            info!("已加载 {} 条，共 {} 条", page.items.len(), page.total_count);
            state.items = page.items;
            state.total_count = page.total_count;
            state.error = None;
        }
        Err(e) => {
            error!("列表加载失败: {}", e);
            state.items.clear();
            state.total_count = 0;
            state.error = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;

    use crate::browse::{Condition, FilterOptions, SortField, SortOrder};
    use crate::core::{PokedexError, Result};
    use crate::data::PokemonPage;
    use crate::pokemon::{Pokemon, PokemonId, PokemonType, StatBlock};

    #[derive(Default)]
    struct FakeApi {
        calls: Mutex<Vec<ListRequest>>,
        delays: Mutex<VecDeque<Duration>>,
        fail: bool,
    }

    impl FakeApi {
        fn with_delays(delays: &[u64]) -> Self {
            Self {
                delays: Mutex::new(delays.iter().map(|&ms| Duration::from_millis(ms)).collect()),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<ListRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn summary(id: PokemonId, stats: [u16; 6]) -> PokemonSummary {
        PokemonSummary {
            id,
            name: format!("mon-{}", id),
            types: vec![PokemonType::Normal],
            stats: StatBlock::from_values(stats),
            generation: None,
        }
    }

    #[async_trait]
    impl PokedexApi for FakeApi {
        async fn list_pokemon(&self, request: &ListRequest) -> Result<PokemonPage> {
            let delay = {
                self.calls.lock().unwrap().push(request.clone());
                self.delays.lock().unwrap().pop_front().unwrap_or_default()
            };
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(PokedexError::Transport("连接被拒绝".to_string()));
            }
            let first = request.offset as PokemonId + 1;
            Ok(PokemonPage {
                items: vec![
                    summary(first, [10, 10, 10, 10, 10, 10]),
                    summary(first + 1, [90, 90, 90, 90, 90, 90]),
                    summary(first + 2, [50, 50, 50, 50, 50, 50]),
                ],
                total_count: 100,
            })
        }

        async fn pokemon_detail(&self, _id: PokemonId) -> Result<Option<Pokemon>> {
            Ok(None)
        }

        async fn filter_options(&self) -> Result<FilterOptions> {
            Ok(FilterOptions::default())
        }
    }

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    fn session(api: Arc<FakeApi>) -> BrowseSession<FakeApi> {
        BrowseSession::new(api, BrowseConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_loads_first_page() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());
        session.refresh().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.items.len(), 3);
        assert_eq!(snapshot.total_count, 100);
        assert_eq!(snapshot.total_pages, 5);
        assert_eq!(snapshot.page_buttons, vec![0, 1, 2, 3, 4]);
        assert!(!snapshot.has_prev);
        assert!(snapshot.has_next);
        assert_eq!(api.calls()[0].offset, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());

        session.update_criteria(FilterCriteria::new().with_search("pika"));
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(api.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle().await;
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].conditions.contains(&Condition::NameContains("pika".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_coalesces_into_one_request() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());

        for text in ["c", "ch", "cha"] {
            session.update_criteria(FilterCriteria::new().with_search(text));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(400)).await;
        settle().await;

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].conditions.contains(&Condition::NameContains("cha".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_type_filter_fetches_immediately() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());

        session.update_criteria(FilterCriteria::new().with_type(PokemonType::Fire));
        settle().await;
        assert_eq!(api.calls().len(), 1);
        assert!(api.calls()[0].conditions.contains(&Condition::HasType(PokemonType::Fire)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_criteria_change_resets_page() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());
        session.refresh().await;

        session.go_to_page(3);
        settle().await;
        assert_eq!(session.page(), 3);
        assert_eq!(api.calls().last().unwrap().offset, 72);

        session.update_criteria(
            FilterCriteria::new().sorted_by(SortField::Name, SortOrder::Descending),
        );
        settle().await;
        assert_eq!(session.page(), 0);
        assert_eq!(api.calls().last().unwrap().offset, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_criteria_do_not_fetch() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());
        session.update_criteria(FilterCriteria::new());
        settle().await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_is_ignored() {
        // 第一次请求慢，第二次快
        let api = Arc::new(FakeApi::with_delays(&[500, 10]));
        let mut session = session(api.clone());

        session.go_to_page(1);
        settle().await;
        session.go_to_page(2);
        settle().await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        settle().await;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.page, 2);
        assert_eq!(snapshot.items[0].id, 49);
        assert!(!snapshot.loading);

        tokio::time::sleep(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(session.snapshot().items[0].id, 49);
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stat_total_sorted_within_page() {
        let api = Arc::new(FakeApi::default());
        let mut session = BrowseSession::with_criteria(
            api.clone(),
            BrowseConfig::default(),
            FilterCriteria::new().sorted_by(SortField::StatTotal, SortOrder::Descending),
            0,
        );
        session.refresh().await;

        let ids: Vec<PokemonId> = session.snapshot().items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(api.calls()[0].order.order, SortOrder::Descending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_leaves_empty_state() {
        let api = Arc::new(FakeApi { fail: true, ..FakeApi::default() });
        let mut session = session(api);
        session.refresh().await;

        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_count, 0);
        assert!(snapshot.error.unwrap().contains("连接被拒绝"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_prev_and_next_page() {
        let api = Arc::new(FakeApi::default());
        let mut session = session(api.clone());
        session.refresh().await;

        session.prev_page();
        settle().await;
        assert_eq!(session.page(), 0);
        assert_eq!(api.calls().len(), 1);

        session.next_page();
        settle().await;
        assert_eq!(session.page(), 1);
        assert_eq!(api.calls().len(), 2);
    }
}
