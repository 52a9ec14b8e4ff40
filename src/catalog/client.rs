//! Production catalog client: reqwest against the PokeAPI REST endpoints
//! with a TTL cache per resource kind. Upstream non-success statuses map to
//! `None`; transport failures surface as [CatalogError].

use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use serde::de::DeserializeOwned;

use crate::catalog::cache::TtlCache;
use crate::catalog::responses::{
    AbilityIndexResponse, AbilityPokemonResponse, PokemonListResponse, PokemonResponse,
    TypePokemonResponse, TypeResponse,
};
use crate::catalog::{CatalogError, PokeCatalog};
use crate::config::AppConfig;

pub const POKEMON_TTL: Duration = Duration::from_secs(60 * 60);
pub const LIST_TTL: Duration = Duration::from_secs(30 * 60);
pub const TYPE_TTL: Duration = Duration::from_secs(2 * 60 * 60);
pub const ABILITY_TTL: Duration = Duration::from_secs(2 * 60 * 60);

pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    pokemon_cache: TtlCache<PokemonResponse>,
    list_cache: TtlCache<PokemonListResponse>,
    type_cache: TtlCache<TypeResponse>,
    type_members_cache: TtlCache<TypePokemonResponse>,
    ability_members_cache: TtlCache<AbilityPokemonResponse>,
    ability_index_cache: TtlCache<AbilityIndexResponse>,
}

/// Display names use spaces, the catalog uses lowercase hyphenated slugs.
fn catalog_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

impl PokeApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.upstream_base.clone(),
            pokemon_cache: TtlCache::new(),
            list_cache: TtlCache::new(),
            type_cache: TtlCache::new(),
            type_members_cache: TtlCache::new(),
            ability_members_cache: TtlCache::new(),
            ability_index_cache: TtlCache::new(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET an absolute URL; non-success statuses are a clean miss.
    async fn get_optional_url<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, CatalogError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            tracing::warn!(url, status = %response.status(), "catalog lookup missed");
            return Ok(None);
        }
        Ok(Some(response.json::<T>().await?))
    }

    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, CatalogError> {
        self.get_optional_url(&self.endpoint(path)).await
    }

    async fn pokemon_by_url(&self, url: &str) -> Option<PokemonResponse> {
        if let Some(cached) = self.pokemon_cache.get(url) {
            tracing::debug!(url, "cache hit for pokemon");
            return Some(cached);
        }

        match self.get_optional_url::<PokemonResponse>(url).await {
            Ok(Some(pokemon)) => {
                self.pokemon_cache.insert(url, pokemon.clone(), POKEMON_TTL);
                Some(pokemon)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(url, error = %err, "skipping pokemon fetch");
                None
            }
        }
    }
}

#[async_trait]
impl PokeCatalog for PokeApiClient {
    async fn pokemon(&self, name_or_id: &str) -> Result<Option<PokemonResponse>, CatalogError> {
        let key = format!("pokemon_{}", name_or_id.to_lowercase());
        if let Some(cached) = self.pokemon_cache.get(&key) {
            tracing::debug!(name_or_id, "cache hit for pokemon");
            return Ok(Some(cached));
        }

        tracing::info!(name_or_id, "fetching pokemon from catalog");
        let path = format!("pokemon/{}", name_or_id.to_lowercase());
        let pokemon = self.get_optional::<PokemonResponse>(&path).await?;
        if let Some(pokemon) = &pokemon {
            self.pokemon_cache.insert(key, pokemon.clone(), POKEMON_TTL);
        }
        Ok(pokemon)
    }

    async fn pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<PokemonListResponse, CatalogError> {
        let key = format!("pokemon_list_{limit}_{offset}");
        if let Some(cached) = self.list_cache.get(&key) {
            tracing::debug!(limit, offset, "cache hit for pokemon list");
            return Ok(cached);
        }

        tracing::info!(limit, offset, "fetching pokemon list from catalog");
        let url = self.endpoint(&format!("pokemon?limit={limit}&offset={offset}"));
        let list = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<PokemonListResponse>()
            .await?;
        self.list_cache.insert(key, list.clone(), LIST_TTL);
        Ok(list)
    }

    async fn pokemon_batch(&self, urls: &[String]) -> Result<Vec<PokemonResponse>, CatalogError> {
        let fetches = urls.iter().map(|url| self.pokemon_by_url(url));
        Ok(join_all(fetches).await.into_iter().flatten().collect())
    }

    async fn pokemon_by_type(
        &self,
        type_name: &str,
    ) -> Result<Option<TypePokemonResponse>, CatalogError> {
        let slug = type_name.to_lowercase();
        let key = format!("pokemon_by_type_{slug}");
        if let Some(cached) = self.type_members_cache.get(&key) {
            tracing::debug!(type_name, "cache hit for type membership");
            return Ok(Some(cached));
        }

        tracing::info!(type_name, "fetching type membership from catalog");
        let members = self
            .get_optional::<TypePokemonResponse>(&format!("type/{slug}"))
            .await?;
        if let Some(members) = &members {
            self.type_members_cache
                .insert(key, members.clone(), TYPE_TTL);
        }
        Ok(members)
    }

    async fn pokemon_by_ability(
        &self,
        ability: &str,
    ) -> Result<Option<AbilityPokemonResponse>, CatalogError> {
        let slug = catalog_slug(ability);
        let key = format!("ability_{slug}");
        if let Some(cached) = self.ability_members_cache.get(&key) {
            tracing::debug!(ability, "cache hit for ability membership");
            return Ok(Some(cached));
        }

        tracing::info!(ability, "fetching ability membership from catalog");
        let members = self
            .get_optional::<AbilityPokemonResponse>(&format!("ability/{slug}"))
            .await?;
        if let Some(members) = &members {
            self.ability_members_cache
                .insert(key, members.clone(), ABILITY_TTL);
        }
        Ok(members)
    }

    async fn type_details(&self, type_name: &str) -> Result<Option<TypeResponse>, CatalogError> {
        let slug = type_name.to_lowercase();
        let key = format!("type_details_{slug}");
        if let Some(cached) = self.type_cache.get(&key) {
            tracing::debug!(type_name, "cache hit for type details");
            return Ok(Some(cached));
        }

        tracing::info!(type_name, "fetching type details from catalog");
        let details = self
            .get_optional::<TypeResponse>(&format!("type/{slug}"))
            .await?;
        if let Some(details) = &details {
            self.type_cache.insert(key, details.clone(), TYPE_TTL);
        }
        Ok(details)
    }

    async fn all_abilities(&self) -> Result<Option<AbilityIndexResponse>, CatalogError> {
        const KEY: &str = "all_abilities";
        if let Some(cached) = self.ability_index_cache.get(KEY) {
            tracing::debug!("cache hit for ability index");
            return Ok(Some(cached));
        }

        tracing::info!("fetching ability index from catalog");
        let index = self
            .get_optional::<AbilityIndexResponse>("ability?limit=1000")
            .await?;
        if let Some(index) = &index {
            self.ability_index_cache
                .insert(KEY, index.clone(), ABILITY_TTL);
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_slug_to_catalog_form() {
        assert_eq!(catalog_slug("Huge power"), "huge-power");
        assert_eq!(catalog_slug("Static"), "static");
    }
}
