//! Raw response shapes from the upstream PokeAPI catalog. Deserialized
//! as-is and adapted into normalized records by the service layer.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default, rename = "is_hidden")]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatEntry {
    #[serde(rename = "base_stat")]
    pub base_stat: u32,
    #[serde(default)]
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprite {
    #[serde(default, rename = "front_default")]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default, rename = "front_default")]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// Upstream `/pokemon/{name-or-id}` payload, trimmed to the fields the
/// service consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default, rename = "base_experience")]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
}

/// Paginated `/pokemon?limit=&offset=` listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonListResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Damage relation sets for one type. Only the `*_to` sets feed the engine;
/// the `*_from` sets are carried for completeness of the upstream shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

/// Upstream `/type/{name}` payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeResponse {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default, rename = "damage_relations")]
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypePokemonEntry {
    pub pokemon: NamedResource,
}

/// Upstream `/type/{name}` membership listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypePokemonResponse {
    #[serde(default)]
    pub pokemon: Vec<TypePokemonEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbilityPokemonEntry {
    pub pokemon: NamedResource,
}

/// Upstream `/ability/{name}` membership listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbilityPokemonResponse {
    #[serde(default)]
    pub pokemon: Vec<AbilityPokemonEntry>,
}

/// Upstream `/ability?limit=` index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AbilityIndexResponse {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}
