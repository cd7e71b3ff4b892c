// 数据层
// 查询文本、外部结构、结构映射与HTTP客户端；会话层只依赖 PokedexApi

pub mod client;
pub mod mapper;
pub mod queries;
pub mod schema;

pub use client::{ListRequest, PokeApiClient, PokedexApi, PokemonPage};
pub use mapper::{escape_like, order_by_clause, where_clause};
