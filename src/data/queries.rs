// GraphQL查询文本
// 列表查询、详情查询、筛选项查询

pub const LIST_POKEMON: &str = r#"
query GetPokemonList(
  $limit: Int!
  $offset: Int!
  $where: pokemon_v2_pokemon_bool_exp
  $order_by: [pokemon_v2_pokemon_order_by!]
) {
  pokemon_v2_pokemon(limit: $limit, offset: $offset, where: $where, order_by: $order_by) {
    id
    name
    pokemon_v2_pokemontypes {
      pokemon_v2_type {
        name
        id
      }
    }
    pokemon_v2_pokemonstats {
      base_stat
      effort
      pokemon_v2_stat {
        name
      }
    }
    pokemon_v2_pokemonspecy {
      pokemon_v2_generation {
        name
      }
    }
  }
  pokemon_v2_pokemon_aggregate(where: $where) {
    aggregate {
      count
    }
  }
}
"#;

pub const POKEMON_DETAIL: &str = r#"
query GetPokemonDetail($id: Int!, $lang: Int!) {
  pokemon_v2_pokemon(where: { id: { _eq: $id } }) {
    id
    name
    height
    weight
    pokemon_v2_pokemontypes {
      pokemon_v2_type {
        name
        id
      }
    }
    pokemon_v2_pokemonstats {
      base_stat
      effort
      pokemon_v2_stat {
        name
      }
    }
    pokemon_v2_pokemonabilities {
      pokemon_v2_ability {
        name
      }
      is_hidden
    }
    pokemon_v2_pokemonspecy {
      base_happiness
      capture_rate
      gender_rate
      growth_rate_id
      hatch_counter
      evolution_chain_id
      pokemon_v2_pokemonspeciesnames(where: { language_id: { _eq: $lang } }) {
        name
        genus
      }
      pokemon_v2_pokemonspeciesflavortexts(
        where: { language_id: { _eq: $lang } }
        limit: 1
        order_by: { id: desc }
      ) {
        flavor_text
      }
      pokemon_v2_generation {
        name
      }
      pokemon_v2_evolutionchain {
        pokemon_v2_pokemonspecies(order_by: { id: asc }) {
          name
          id
          evolves_from_species_id
        }
      }
    }
  }
}
"#;

pub const FILTER_OPTIONS: &str = r#"
query GetTypesAndGenerations {
  pokemon_v2_type(where: { id: { _lt: 10000 } }, order_by: { name: asc }) {
    id
    name
  }
  pokemon_v2_generation(order_by: { id: asc }) {
    id
    name
  }
}
"#;
