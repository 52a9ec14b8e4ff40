//! Normalized Pokémon records and response DTOs.
//! Records are adapted once from the upstream catalog (see [crate::service])
//! and are immutable for the duration of a request.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub mod filter;

pub use filter::FilterRequest;

/// The six base stats in catalog order. `total` is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PokemonStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl PokemonStats {
    pub fn total(&self) -> u32 {
        self.hp + self.attack + self.defense + self.special_attack + self.special_defense + self.speed
    }
}

impl Serialize for PokemonStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PokemonStats", 7)?;
        state.serialize_field("hp", &self.hp)?;
        state.serialize_field("attack", &self.attack)?;
        state.serialize_field("defense", &self.defense)?;
        state.serialize_field("specialAttack", &self.special_attack)?;
        state.serialize_field("specialDefense", &self.special_defense)?;
        state.serialize_field("speed", &self.speed)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

/// One ability slot as supplied by the catalog, order preserved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonAbility {
    pub name: String,
    pub is_hidden: bool,
}

impl PokemonAbility {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_hidden: false,
        }
    }
}

/// Full normalized record for one Pokémon: identity, 1-2 element types,
/// ordered abilities, base stats, and an opaque sprite reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<PokemonAbility>,
    pub stats: PokemonStats,
    pub sprite_url: String,
}

/// Lightweight listing entry: just enough to identify and re-fetch a Pokémon.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub url: String,
}

/// Request body for the compare endpoint. Accepts names or Pokédex ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub pokemon1: String,
    pub pokemon2: String,
}

/// Per-combatant breakdown of the numbers the battle engine actually used.
/// The opponent's raw defenses are included so a reader can audit the
/// damage denominator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveStats {
    pub base_hp: u32,
    pub effective_offense: f64,
    pub effective_defense: f64,
    pub effective_speed: f64,
    pub offense_type: &'static str,
    pub offense_multiplier: f64,
    pub defense_multiplier: f64,
    pub speed_multiplier: f64,
    pub opponent_defense: u32,
    pub opponent_special_defense: u32,
}

/// Complete outcome of one battle comparison. Produced once per compare
/// call; every field is derived from the same numbers that decided the
/// winner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub pokemon1: String,
    pub pokemon2: String,
    /// Winning name, or [crate::battle::STALEMATE_WINNER] when neither
    /// side can damage the other.
    pub winner: String,
    pub score1: i32,
    pub score2: i32,
    pub reasoning: String,
    /// Base stat differences, first minus second, keyed by stat name.
    pub stat_differences: BTreeMap<String, i64>,
    pub type_multiplier1_vs2: f64,
    pub type_multiplier2_vs1: f64,
    pub ability_impact1: String,
    pub ability_impact2: String,
    pub type_effectiveness_explanation1: String,
    pub type_effectiveness_explanation2: String,
    pub pokemon1_effective_stats: EffectiveStats,
    pub pokemon2_effective_stats: EffectiveStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_total_is_recomputed() {
        let stats = PokemonStats {
            hp: 35,
            attack: 55,
            defense: 40,
            special_attack: 50,
            special_defense: 50,
            speed: 90,
        };
        assert_eq!(stats.total(), 320);
    }

    #[test]
    fn stats_serialize_with_derived_total() {
        let stats = PokemonStats {
            hp: 1,
            attack: 2,
            defense: 3,
            special_attack: 4,
            special_defense: 5,
            speed: 6,
        };
        let value = serde_json::to_value(stats).expect("stats should serialize");
        assert_eq!(value["specialAttack"], 4);
        assert_eq!(value["total"], 21);
    }
}
