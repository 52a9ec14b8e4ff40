//! External catalog collaborator. The engine never fetches anything itself;
//! everything it consumes comes through [PokeCatalog], with the production
//! implementation in [client::PokeApiClient].

use std::fmt;

use async_trait::async_trait;

pub mod cache;
pub mod client;
pub mod responses;

pub use cache::TtlCache;
pub use client::PokeApiClient;
pub use responses::{
    AbilityIndexResponse, AbilityPokemonResponse, PokemonListResponse, PokemonResponse,
    TypePokemonResponse, TypeResponse,
};

/// Transport or decode failure while talking to the upstream catalog.
/// A clean upstream "not found" is not an error; lookups return `None`.
#[derive(Debug)]
pub struct CatalogError(pub reqwest::Error);

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog request failed: {}", self.0)
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self(err)
    }
}

/// Read-only access to the upstream creature catalog.
#[async_trait]
pub trait PokeCatalog: Send + Sync {
    /// Single Pokémon by name or Pokédex id. `None` when unknown upstream.
    async fn pokemon(&self, name_or_id: &str) -> Result<Option<PokemonResponse>, CatalogError>;

    /// One page of the Pokémon index.
    async fn pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<PokemonListResponse, CatalogError>;

    /// Full records for a set of resource URLs, fetched concurrently.
    /// Individual failures are skipped, not propagated.
    async fn pokemon_batch(&self, urls: &[String]) -> Result<Vec<PokemonResponse>, CatalogError>;

    /// Membership listing for one element type.
    async fn pokemon_by_type(
        &self,
        type_name: &str,
    ) -> Result<Option<TypePokemonResponse>, CatalogError>;

    /// Membership listing for one ability (display or catalog name).
    async fn pokemon_by_ability(
        &self,
        ability: &str,
    ) -> Result<Option<AbilityPokemonResponse>, CatalogError>;

    /// Damage relations for one element type.
    async fn type_details(&self, type_name: &str) -> Result<Option<TypeResponse>, CatalogError>;

    /// The complete ability index.
    async fn all_abilities(&self) -> Result<Option<AbilityIndexResponse>, CatalogError>;
}
