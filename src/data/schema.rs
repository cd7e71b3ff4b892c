// 外部GraphQL接口的数据结构
// 字段名与 PokeAPI 的 pokemon_v2_* 结构一一对应，只在数据层内部使用

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    pub pokemon_v2_type: TypeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStatRow {
    pub base_stat: u16,
    #[serde(default)]
    pub effort: Option<u8>,
    pub pokemon_v2_stat: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonAbilitySlot {
    pub pokemon_v2_ability: NamedRef,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesGenerationRef {
    pub pokemon_v2_generation: Option<NamedRef>,
}

// 列表查询
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemonListItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_v2_pokemontypes: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub pokemon_v2_pokemonstats: Vec<PokemonStatRow>,
    #[serde(default)]
    pub pokemon_v2_pokemonspecy: Option<SpeciesGenerationRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateCount {
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Aggregate {
    pub aggregate: Option<AggregateCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawListData {
    pub pokemon_v2_pokemon: Vec<RawPokemonListItem>,
    pub pokemon_v2_pokemon_aggregate: Aggregate,
}

// 详情查询
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesName {
    pub name: Option<String>,
    pub genus: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvolutionSpecies {
    pub id: u32,
    pub name: String,
    pub evolves_from_species_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvolutionChain {
    #[serde(default)]
    pub pokemon_v2_pokemonspecies: Vec<RawEvolutionSpecies>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecies {
    pub base_happiness: Option<u8>,
    #[serde(default)]
    pub capture_rate: Option<u8>,
    #[serde(default)]
    pub gender_rate: Option<i8>,
    pub growth_rate_id: Option<u32>,
    pub hatch_counter: Option<u32>,
    #[serde(default)]
    pub evolution_chain_id: Option<u32>,
    #[serde(default)]
    pub pokemon_v2_pokemonspeciesnames: Vec<SpeciesName>,
    #[serde(default)]
    pub pokemon_v2_pokemonspeciesflavortexts: Vec<FlavorText>,
    pub pokemon_v2_generation: Option<NamedRef>,
    pub pokemon_v2_evolutionchain: Option<RawEvolutionChain>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemonDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub pokemon_v2_pokemontypes: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub pokemon_v2_pokemonstats: Vec<PokemonStatRow>,
    #[serde(default)]
    pub pokemon_v2_pokemonabilities: Vec<PokemonAbilitySlot>,
    pub pokemon_v2_pokemonspecy: Option<RawSpecies>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDetailData {
    pub pokemon_v2_pokemon: Vec<RawPokemonDetail>,
}

// 筛选项查询
#[derive(Debug, Clone, Deserialize)]
pub struct IdName {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLookupData {
    pub pokemon_v2_type: Vec<IdName>,
    pub pokemon_v2_generation: Vec<IdName>,
}
