//! Orchestration between the upstream catalog and the battle engine:
//! record adaptation, listing and filtering flows, and the comparison
//! entry point. All upstream fan-out (two records, up to four type tables,
//! per-page detail batches) happens concurrently here; the engine itself
//! runs synchronously once everything is resolved.

use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;

use crate::battle::{self, TypeChart, TypeRelations};
use crate::catalog::responses::{DamageRelations, PokemonResponse};
use crate::catalog::{CatalogError, PokeCatalog};
use crate::model::{
    ComparisonResult, FilterRequest, PokemonAbility, PokemonDetail, PokemonStats, PokemonSummary,
};

const FILTER_BATCH_SIZE: u32 = 1000;
const SEARCH_SCAN_LIMIT: u32 = 1000;

#[derive(Debug)]
pub enum ServiceError {
    /// A precondition on the request failed (e.g. a combatant is unknown).
    InvalidArgument(String),
    /// The upstream catalog could not be reached or decoded.
    Catalog(CatalogError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

/// "mr-mime" -> "Mr mime": leading capital, hyphens become spaces.
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().replace('-', " "));
            out
        }
        None => String::new(),
    }
}

/// Trailing numeric path segment of a catalog resource URL.
fn id_from_url(url: &str) -> u32 {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

fn summary_from_resource(name: &str, url: &str) -> PokemonSummary {
    PokemonSummary {
        id: id_from_url(url),
        name: capitalize_name(name),
        url: url.to_string(),
    }
}

/// Adapt an upstream record into the normalized form the engine consumes.
/// Records that cannot satisfy the engine's contract (six stats in catalog
/// order, at least one type) are treated as not found.
pub fn adapt_detail(response: PokemonResponse) -> Option<PokemonDetail> {
    if response.stats.len() < 6 || response.types.is_empty() {
        tracing::warn!(
            id = response.id,
            name = %response.name,
            "rejecting malformed catalog record"
        );
        return None;
    }

    let stats = PokemonStats {
        hp: response.stats[0].base_stat,
        attack: response.stats[1].base_stat,
        defense: response.stats[2].base_stat,
        special_attack: response.stats[3].base_stat,
        special_defense: response.stats[4].base_stat,
        speed: response.stats[5].base_stat,
    };

    let sprite_url = response
        .sprites
        .other
        .as_ref()
        .and_then(|other| other.official_artwork.as_ref())
        .and_then(|artwork| artwork.front_default.clone())
        .or_else(|| response.sprites.front_default.clone())
        .unwrap_or_default();

    Some(PokemonDetail {
        id: response.id,
        name: capitalize_name(&response.name),
        height: response.height,
        weight: response.weight,
        types: response
            .types
            .iter()
            .map(|slot| capitalize_name(&slot.type_ref.name))
            .collect(),
        abilities: response
            .abilities
            .iter()
            .map(|slot| PokemonAbility {
                name: capitalize_name(&slot.ability.name),
                is_hidden: slot.is_hidden,
            })
            .collect(),
        stats,
        sprite_url,
    })
}

fn relations_from(damage_relations: &DamageRelations) -> TypeRelations {
    let names = |resources: &[crate::catalog::responses::NamedResource]| {
        resources
            .iter()
            .map(|resource| resource.name.clone())
            .collect::<Vec<_>>()
    };
    TypeRelations::new(
        names(&damage_relations.double_damage_to),
        names(&damage_relations.half_damage_to),
        names(&damage_relations.no_damage_to),
    )
}

pub struct PokemonService {
    catalog: Arc<dyn PokeCatalog>,
}

impl PokemonService {
    pub fn new(catalog: Arc<dyn PokeCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn pokemon_detail(
        &self,
        name_or_id: &str,
    ) -> Result<Option<PokemonDetail>, ServiceError> {
        let response = self.catalog.pokemon(name_or_id).await?;
        Ok(response.and_then(adapt_detail))
    }

    pub async fn pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<PokemonSummary>, ServiceError> {
        let page = self.catalog.pokemon_list(limit, offset).await?;
        Ok(page
            .results
            .iter()
            .map(|entry| summary_from_resource(&entry.name, &entry.url))
            .collect())
    }

    /// Case-insensitive name search over the first index page.
    pub async fn search(&self, name: &str) -> Result<Vec<PokemonSummary>, ServiceError> {
        let wanted = name.to_lowercase();
        let all = self.pokemon_list(SEARCH_SCAN_LIMIT, 0).await?;
        Ok(all
            .into_iter()
            .filter(|summary| summary.name.to_lowercase().contains(&wanted))
            .collect())
    }

    pub async fn pokemon_by_type(
        &self,
        type_name: &str,
    ) -> Result<Vec<PokemonSummary>, ServiceError> {
        let Some(members) = self.catalog.pokemon_by_type(type_name).await? else {
            return Ok(Vec::new());
        };
        Ok(members
            .pokemon
            .iter()
            .map(|entry| summary_from_resource(&entry.pokemon.name, &entry.pokemon.url))
            .collect())
    }

    pub async fn pokemon_by_ability(
        &self,
        ability: &str,
    ) -> Result<Vec<PokemonSummary>, ServiceError> {
        let Some(members) = self.catalog.pokemon_by_ability(ability).await? else {
            return Ok(Vec::new());
        };
        Ok(members
            .pokemon
            .iter()
            .map(|entry| summary_from_resource(&entry.pokemon.name, &entry.pokemon.url))
            .collect())
    }

    pub async fn all_abilities(&self) -> Result<Vec<String>, ServiceError> {
        let Some(index) = self.catalog.all_abilities().await? else {
            return Ok(Vec::new());
        };
        let mut names: Vec<String> = index
            .results
            .iter()
            .map(|entry| capitalize_name(&entry.name))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Walks the full index page by page, fetches details concurrently, and
    /// keeps every record the filter accepts.
    pub async fn filter_pokemon(
        &self,
        filter: &FilterRequest,
    ) -> Result<Vec<PokemonSummary>, ServiceError> {
        let mut matches = Vec::new();
        let mut offset = 0;

        loop {
            tracing::info!(offset, "fetching pokemon page for filtering");
            let page = self.catalog.pokemon_list(FILTER_BATCH_SIZE, offset).await?;
            let urls: Vec<String> = page
                .results
                .iter()
                .map(|entry| entry.url.clone())
                .collect();
            let details = self.catalog.pokemon_batch(&urls).await?;

            for response in details {
                let Some(detail) = adapt_detail(response) else {
                    continue;
                };
                if filter.matches(&detail) {
                    matches.push(PokemonSummary {
                        url: format!("https://pokeapi.co/api/v2/pokemon/{}/", detail.id),
                        id: detail.id,
                        name: detail.name,
                    });
                }
            }

            if page.next.is_none() {
                break;
            }
            offset += FILTER_BATCH_SIZE;
        }

        tracing::info!(total = matches.len(), "filter evaluation complete");
        Ok(matches)
    }

    /// Fetches both combatants and their type tables concurrently, then runs
    /// the engine once. A missing combatant is a precondition failure, never
    /// a partial comparison.
    pub async fn compare(
        &self,
        first_name: &str,
        second_name: &str,
    ) -> Result<ComparisonResult, ServiceError> {
        let (first_response, second_response) = tokio::join!(
            self.catalog.pokemon(first_name),
            self.catalog.pokemon(second_name),
        );
        let first = first_response?.and_then(adapt_detail);
        let second = second_response?.and_then(adapt_detail);
        let (Some(first), Some(second)) = (first, second) else {
            return Err(ServiceError::InvalidArgument(
                "One or both Pokemon not found".to_string(),
            ));
        };

        let chart = self.load_type_chart(&first, &second).await?;
        let (result, diagnostics) = battle::compare(&first, &second, &chart);

        if let Some(diagnostics) = diagnostics {
            for (name, side) in [
                (&result.pokemon1, diagnostics.first),
                (&result.pokemon2, diagnostics.second),
            ] {
                if side.recovered_damage {
                    tracing::warn!(
                        pokemon = %name,
                        "recovered degenerate damage value during simulation"
                    );
                }
            }
        }

        Ok(result)
    }

    /// One table per distinct type across both combatants, at most four,
    /// fetched concurrently. Types the catalog cannot resolve are skipped
    /// and degrade to neutral inside the engine.
    async fn load_type_chart(
        &self,
        first: &PokemonDetail,
        second: &PokemonDetail,
    ) -> Result<TypeChart, ServiceError> {
        let mut wanted: Vec<String> = Vec::new();
        for type_name in first.types.iter().chain(second.types.iter()) {
            let slug = type_name.to_lowercase();
            if !wanted.contains(&slug) {
                wanted.push(slug);
            }
        }

        let lookups = join_all(
            wanted
                .iter()
                .map(|type_name| self.catalog.type_details(type_name)),
        )
        .await;

        let mut chart = TypeChart::new();
        for (type_name, lookup) in wanted.iter().zip(lookups) {
            if let Some(details) = lookup? {
                chart.insert(type_name, relations_from(&details.damage_relations));
            }
        }
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::responses::{AbilitySlot, NamedResource, StatEntry, TypeSlot};

    fn response_with_stats(stat_count: usize) -> PokemonResponse {
        PokemonResponse {
            id: 25,
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            types: vec![TypeSlot {
                slot: 1,
                type_ref: NamedResource {
                    name: "electric".to_string(),
                    url: String::new(),
                },
            }],
            abilities: vec![AbilitySlot {
                ability: NamedResource {
                    name: "lightning-rod".to_string(),
                    url: String::new(),
                },
                is_hidden: true,
            }],
            stats: (0..stat_count)
                .map(|i| StatEntry {
                    base_stat: 10 + i as u32,
                    stat: NamedResource::default(),
                })
                .collect(),
            ..PokemonResponse::default()
        }
    }

    #[test]
    fn capitalize_replaces_hyphens_after_the_first_letter() {
        assert_eq!(capitalize_name("pikachu"), "Pikachu");
        assert_eq!(capitalize_name("mr-mime"), "Mr mime");
        assert_eq!(capitalize_name(""), "");
    }

    #[test]
    fn id_is_parsed_from_trailing_url_segment() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), 25);
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/133"), 133);
        assert_eq!(id_from_url("not-a-url"), 0);
    }

    #[test]
    fn adaptation_maps_stats_by_position() {
        let detail = adapt_detail(response_with_stats(6)).expect("record should adapt");
        assert_eq!(detail.name, "Pikachu");
        assert_eq!(detail.stats.hp, 10);
        assert_eq!(detail.stats.speed, 15);
        assert_eq!(detail.types, vec!["Electric".to_string()]);
        assert_eq!(detail.abilities[0].name, "Lightning rod");
        assert!(detail.abilities[0].is_hidden);
    }

    #[test]
    fn short_stat_arrays_are_rejected() {
        assert!(adapt_detail(response_with_stats(5)).is_none());
    }

    #[test]
    fn records_without_types_are_rejected() {
        let mut response = response_with_stats(6);
        response.types.clear();
        assert!(adapt_detail(response).is_none());
    }
}
