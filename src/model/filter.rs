//! Multi-criteria filter over normalized records: inclusive stat/size ranges,
//! one type substring, and a set of required ability substrings. Absent
//! fields always match.

use serde::Deserialize;

use crate::model::PokemonDetail;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    pub min_weight: Option<u32>,
    pub max_weight: Option<u32>,
    pub min_hp: Option<u32>,
    pub max_hp: Option<u32>,
    pub min_attack: Option<u32>,
    pub max_attack: Option<u32>,
    pub min_defense: Option<u32>,
    pub max_defense: Option<u32>,
    pub min_special_attack: Option<u32>,
    pub max_special_attack: Option<u32>,
    pub min_special_defense: Option<u32>,
    pub max_special_defense: Option<u32>,
    pub min_speed: Option<u32>,
    pub max_speed: Option<u32>,
    pub min_total: Option<u32>,
    pub max_total: Option<u32>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub abilities: Option<Vec<String>>,
}

fn in_range(value: u32, min: Option<u32>, max: Option<u32>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

impl FilterRequest {
    /// True when the record satisfies every present criterion.
    pub fn matches(&self, pokemon: &PokemonDetail) -> bool {
        let stats = &pokemon.stats;

        let ranges_match = in_range(pokemon.height, self.min_height, self.max_height)
            && in_range(pokemon.weight, self.min_weight, self.max_weight)
            && in_range(stats.hp, self.min_hp, self.max_hp)
            && in_range(stats.attack, self.min_attack, self.max_attack)
            && in_range(stats.defense, self.min_defense, self.max_defense)
            && in_range(stats.special_attack, self.min_special_attack, self.max_special_attack)
            && in_range(stats.special_defense, self.min_special_defense, self.max_special_defense)
            && in_range(stats.speed, self.min_speed, self.max_speed)
            && in_range(stats.total(), self.min_total, self.max_total);

        let type_matches = match self.type_name.as_deref() {
            None | Some("") => true,
            Some(wanted) => {
                let wanted = wanted.to_lowercase();
                pokemon
                    .types
                    .iter()
                    .any(|t| t.to_lowercase().contains(&wanted))
            }
        };

        let abilities_match = match self.abilities.as_deref() {
            None | Some([]) => true,
            Some(wanted) => wanted.iter().all(|wanted_ability| {
                let wanted_ability = wanted_ability.to_lowercase();
                pokemon
                    .abilities
                    .iter()
                    .any(|owned| owned.name.to_lowercase().contains(&wanted_ability))
            }),
        };

        ranges_match && type_matches && abilities_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PokemonAbility, PokemonStats};

    fn sample() -> PokemonDetail {
        PokemonDetail {
            id: 25,
            name: "Pikachu".to_string(),
            height: 4,
            weight: 60,
            types: vec!["Electric".to_string()],
            abilities: vec![
                PokemonAbility::named("Static"),
                PokemonAbility {
                    name: "Lightning rod".to_string(),
                    is_hidden: true,
                },
            ],
            stats: PokemonStats {
                hp: 35,
                attack: 55,
                defense: 40,
                special_attack: 50,
                special_defense: 50,
                speed: 90,
            },
            sprite_url: String::new(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(FilterRequest::default().matches(&sample()));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let filter = FilterRequest {
            min_speed: Some(90),
            max_speed: Some(90),
            ..FilterRequest::default()
        };
        assert!(filter.matches(&sample()));

        let filter = FilterRequest {
            min_speed: Some(91),
            ..FilterRequest::default()
        };
        assert!(!filter.matches(&sample()));
    }

    #[test]
    fn total_is_checked_against_derived_sum() {
        let filter = FilterRequest {
            min_total: Some(320),
            max_total: Some(320),
            ..FilterRequest::default()
        };
        assert!(filter.matches(&sample()));
    }

    #[test]
    fn type_match_is_case_insensitive_substring() {
        let filter = FilterRequest {
            type_name: Some("ELEC".to_string()),
            ..FilterRequest::default()
        };
        assert!(filter.matches(&sample()));

        let filter = FilterRequest {
            type_name: Some("water".to_string()),
            ..FilterRequest::default()
        };
        assert!(!filter.matches(&sample()));
    }

    #[test]
    fn every_requested_ability_must_be_present() {
        let filter = FilterRequest {
            abilities: Some(vec!["static".to_string(), "lightning".to_string()]),
            ..FilterRequest::default()
        };
        assert!(filter.matches(&sample()));

        let filter = FilterRequest {
            abilities: Some(vec!["static".to_string(), "levitate".to_string()]),
            ..FilterRequest::default()
        };
        assert!(!filter.matches(&sample()));
    }

    #[test]
    fn conjunction_fails_when_any_criterion_fails() {
        let filter = FilterRequest {
            type_name: Some("electric".to_string()),
            max_attack: Some(50),
            ..FilterRequest::default()
        };
        assert!(!filter.matches(&sample()));
    }
}
