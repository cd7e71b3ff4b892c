// 图鉴数据客户端
// PokedexApi 是会话层依赖的接口，PokeApiClient 通过 HTTP POST 调用 GraphQL 端点

use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::mapper::{
    filter_options_from_raw, order_by_clause, pokemon_from_raw, summary_from_raw, where_clause,
};
use super::queries::{FILTER_OPTIONS, LIST_POKEMON, POKEMON_DETAIL};
use super::schema::{GraphqlResponse, RawDetailData, RawListData, RawLookupData};
use crate::browse::{build_conditions, page_offset, Condition, FilterCriteria, FilterOptions, ServerOrder, SortPlan};
use crate::core::{ApiConfig, BrowseConfig, PokedexError, Result};
use crate::pokemon::{Pokemon, PokemonId, PokemonSummary};
use crate::timed_query;

/// 一页列表查询的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub limit: u32,
    pub offset: u64,
    pub conditions: Vec<Condition>,
    pub order: ServerOrder,
}

impl ListRequest {
    /// 由浏览条件和页码得到查询参数，以及取回后需要执行的本地排序
    pub fn for_page(criteria: &FilterCriteria, page: u32, browse: &BrowseConfig) -> (Self, SortPlan) {
        let plan = SortPlan::resolve(criteria.sort_field, criteria.sort_order);
        let request = Self {
            limit: browse.page_size,
            offset: page_offset(page, browse.page_size),
            conditions: build_conditions(criteria, browse.max_pokemon_id),
            order: plan.server,
        };
        (request, plan)
    }

    fn variables(&self) -> Value {
        json!({
            "limit": self.limit,
            "offset": self.offset,
            "where": where_clause(&self.conditions),
            "order_by": order_by_clause(self.order),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonPage {
    pub items: Vec<PokemonSummary>,
    pub total_count: u64,
}

#[async_trait]
pub trait PokedexApi: Send + Sync {
    async fn list_pokemon(&self, request: &ListRequest) -> Result<PokemonPage>;

    /// 不存在的编号返回 Ok(None)
    async fn pokemon_detail(&self, id: PokemonId) -> Result<Option<Pokemon>>;

    async fn filter_options(&self) -> Result<FilterOptions>;
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

pub struct PokeApiClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    language_id: u32,
    slow_query: Duration,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
            language_id: config.language_id,
            slow_query: config.slow_query(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let body = GraphqlRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("请求 {} 失败: {}", self.endpoint, e);
                PokedexError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("接口返回状态 {}: {}", status, text);
            return Err(PokedexError::Query(format!("HTTP {}: {}", status, text)));
        }

        let payload: GraphqlResponse<T> = response.json().await?;

        if let Some(errors) = payload.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            error!("GraphQL 错误: {:?}", messages);
            return Err(PokedexError::Query(messages.join("; ")));
        }

        payload
            .data
            .ok_or_else(|| PokedexError::Decode("响应中缺少 data 字段".to_string()))
    }
}

#[async_trait]
impl PokedexApi for PokeApiClient {
    async fn list_pokemon(&self, request: &ListRequest) -> Result<PokemonPage> {
        timed_query!("list_pokemon", self.slow_query, {
            debug!("查询列表 offset={} limit={}", request.offset, request.limit);
            let data: RawListData = self.execute(LIST_POKEMON, request.variables()).await?;

            Ok(PokemonPage {
                items: data.pokemon_v2_pokemon.iter().map(summary_from_raw).collect(),
                total_count: data
                    .pokemon_v2_pokemon_aggregate
                    .aggregate
                    .map(|a| a.count)
                    .unwrap_or(0),
            })
        })
    }

    async fn pokemon_detail(&self, id: PokemonId) -> Result<Option<Pokemon>> {
        timed_query!("pokemon_detail", self.slow_query, {
            debug!("查询详情 id={}", id);
            let variables = json!({ "id": id, "lang": self.language_id });
            let data: RawDetailData = self.execute(POKEMON_DETAIL, variables).await?;
            Ok(data.pokemon_v2_pokemon.first().map(pokemon_from_raw))
        })
    }

    async fn filter_options(&self) -> Result<FilterOptions> {
        timed_query!("filter_options", self.slow_query, {
            let data: RawLookupData = self.execute(FILTER_OPTIONS, json!({})).await?;
            Ok(filter_options_from_raw(&data))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{SortField, SortOrder};
    use crate::browse::ServerOrderField;
    use crate::pokemon::PokemonType;

    #[test]
    fn test_list_request_for_page() {
        let criteria = FilterCriteria::new()
            .with_search("Char")
            .with_type(PokemonType::Fire)
            .sorted_by(SortField::StatTotal, SortOrder::Descending);
        let browse = BrowseConfig::default();

        let (request, plan) = ListRequest::for_page(&criteria, 2, &browse);
        assert_eq!(request.limit, 24);
        assert_eq!(request.offset, 48);
        assert_eq!(request.order.field, ServerOrderField::Id);
        assert_eq!(request.order.order, SortOrder::Descending);
        assert_eq!(plan.client_stat_total, Some(SortOrder::Descending));
        assert_eq!(request.conditions.len(), 3);
        assert_eq!(request.conditions[1], Condition::NameContains("char".to_string()));
    }

    #[test]
    fn test_slow_query_threshold_from_config() {
        let config = ApiConfig { slow_query_ms: 750, ..ApiConfig::default() };
        let client = PokeApiClient::new(&config);
        assert_eq!(client.slow_query, Duration::from_millis(750));
    }

    #[test]
    fn test_list_request_variables() {
        let (request, _) = ListRequest::for_page(&FilterCriteria::new(), 0, &BrowseConfig::default());
        let vars = request.variables();
        assert_eq!(vars["limit"], 24);
        assert_eq!(vars["offset"], 0);
        assert_eq!(vars["where"]["_and"][0]["id"]["_lte"], 1025);
        assert_eq!(vars["order_by"][0]["id"], "asc");
    }

    #[test]
    fn test_client_from_config() {
        let client = PokeApiClient::new(&ApiConfig::default()).with_endpoint("http://localhost:1/graphql");
        assert_eq!(client.endpoint(), "http://localhost:1/graphql");
    }
}
