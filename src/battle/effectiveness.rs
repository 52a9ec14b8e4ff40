//! Elemental type effectiveness. The chart is read-only lookup data supplied
//! by the catalog collaborator; the resolver itself is a pure function.

use std::collections::{HashMap, HashSet};

/// Damage relations for one attacking type, keyed by lowercase type name.
#[derive(Debug, Clone, Default)]
pub struct TypeRelations {
    double_damage_to: HashSet<String>,
    half_damage_to: HashSet<String>,
    no_damage_to: HashSet<String>,
}

impl TypeRelations {
    pub fn new(
        double_damage_to: impl IntoIterator<Item = impl AsRef<str>>,
        half_damage_to: impl IntoIterator<Item = impl AsRef<str>>,
        no_damage_to: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        fn lowered(names: impl IntoIterator<Item = impl AsRef<str>>) -> HashSet<String> {
            names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect()
        }

        Self {
            double_damage_to: lowered(double_damage_to),
            half_damage_to: lowered(half_damage_to),
            no_damage_to: lowered(no_damage_to),
        }
    }

    /// Compound multiplier of this attacking type against a defending type
    /// set. A single no-damage relation zeroes the whole pass, overriding
    /// anything accumulated from the other defending type.
    pub fn multiplier_against(&self, defender_types: &[String]) -> f64 {
        let mut multiplier = 1.0;
        for defending in defender_types {
            let defending = defending.to_lowercase();
            if self.no_damage_to.contains(&defending) {
                return 0.0;
            }
            if self.double_damage_to.contains(&defending) {
                multiplier *= 2.0;
            } else if self.half_damage_to.contains(&defending) {
                multiplier *= 0.5;
            }
        }
        multiplier
    }
}

/// Per-comparison lookup table: at most the four distinct types of the two
/// combatants. Built by the caller, never owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct TypeChart {
    tables: HashMap<String, TypeRelations>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: impl AsRef<str>, relations: TypeRelations) {
        self.tables
            .insert(type_name.as_ref().to_lowercase(), relations);
    }

    pub fn relations(&self, type_name: &str) -> Option<&TypeRelations> {
        self.tables.get(&type_name.to_lowercase())
    }
}

/// Overall effectiveness of an attacker's type set against a defender's:
/// the best single attacking type decides. Types without chart data are
/// skipped; if nothing resolves the matchup is neutral.
pub fn resolve(chart: &TypeChart, attacker_types: &[String], defender_types: &[String]) -> f64 {
    let mut best: Option<f64> = None;
    for attacking in attacker_types {
        let Some(relations) = chart.relations(attacking) else {
            continue;
        };
        let multiplier = relations.multiplier_against(defender_types);
        best = Some(best.map_or(multiplier, |current| current.max(multiplier)));
    }
    best.unwrap_or(1.0)
}

/// Human-readable narration of every attacking/defending matchup, prefixed
/// by a verdict derived from the already-resolved overall multiplier.
/// Unlike [resolve], immunity does not cut the narration short.
pub fn explain(
    chart: &TypeChart,
    attacker_types: &[String],
    defender_types: &[String],
    final_multiplier: f64,
) -> String {
    let mut explanations = Vec::new();

    for attacking in attacker_types {
        let Some(relations) = chart.relations(attacking) else {
            continue;
        };

        let mut pass_multiplier = 1.0;
        let mut matchups = Vec::new();
        for defending in defender_types {
            let key = defending.to_lowercase();
            if relations.no_damage_to.contains(&key) {
                pass_multiplier = 0.0;
                matchups.push(format!("no effect on {defending}"));
            } else if relations.double_damage_to.contains(&key) {
                pass_multiplier *= 2.0;
                matchups.push(format!("super effective vs {defending}"));
            } else if relations.half_damage_to.contains(&key) {
                pass_multiplier *= 0.5;
                matchups.push(format!("not very effective vs {defending}"));
            } else {
                matchups.push(format!("neutral vs {defending}"));
            }
        }

        if !matchups.is_empty() {
            explanations.push(format!(
                "{attacking} attacks are {} ({pass_multiplier}x)",
                matchups.join(" and ")
            ));
        }
    }

    let detail = explanations.join("; ");
    if final_multiplier == 0.0 {
        format!("IMMUNE: {detail}")
    } else if final_multiplier >= 4.0 {
        format!("DOUBLE SUPER EFFECTIVE (4x): {detail}")
    } else if final_multiplier > 1.0 {
        format!("Super Effective ({final_multiplier}x): {detail}")
    } else if final_multiplier < 1.0 {
        format!("Not Very Effective ({final_multiplier}x): {detail}")
    } else {
        format!("Neutral damage (1x): {detail}")
    }
}
