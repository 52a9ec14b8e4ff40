//! Deterministic battle comparison engine. Pure and synchronous: the caller
//! supplies two fully resolved records plus the type chart for their
//! combined type set, and gets back one [ComparisonResult]. Repeated calls
//! with identical inputs produce bit-identical output.

use std::collections::BTreeMap;

pub mod abilities;
pub mod damage;
pub mod effectiveness;
pub mod profile;
pub mod resolver;
pub mod score;

pub use abilities::{ability_modifiers, AbilityModifiers, CriticalTag, NO_ABILITY_IMPACT};
pub use damage::{damage_per_turn, turns_to_ko};
pub use effectiveness::{resolve, TypeChart, TypeRelations};
pub use profile::{attack_role, build_profile, AttackRole, BattleProfile};
pub use resolver::{
    resolve_battle, BattleVerdict, SideDiagnostics, SimulationDiagnostics, INSTANT_WIN_SCORE,
    STALEMATE_SCORE, STALEMATE_WINNER,
};
pub use score::battle_score;

use crate::model::{ComparisonResult, EffectiveStats, PokemonDetail, PokemonStats};

fn stat_differences(first: &PokemonStats, second: &PokemonStats) -> BTreeMap<String, i64> {
    let pairs = [
        ("HP", first.hp, second.hp),
        ("Attack", first.attack, second.attack),
        ("Defense", first.defense, second.defense),
        ("Special Attack", first.special_attack, second.special_attack),
        ("Special Defense", first.special_defense, second.special_defense),
        ("Speed", first.speed, second.speed),
    ];
    pairs
        .into_iter()
        .map(|(name, a, b)| (name.to_string(), i64::from(a) - i64::from(b)))
        .collect()
}

fn effective_stats(
    record: &PokemonDetail,
    opponent: &PokemonDetail,
    profile: &BattleProfile,
) -> EffectiveStats {
    EffectiveStats {
        base_hp: record.stats.hp,
        effective_offense: profile.offense,
        effective_defense: f64::from(record.stats.defense) * profile.ability.defense,
        effective_speed: profile.speed,
        offense_type: profile.role.label(),
        offense_multiplier: profile.ability.offense,
        defense_multiplier: profile.ability.defense,
        speed_multiplier: profile.ability.speed,
        opponent_defense: opponent.stats.defense,
        opponent_special_defense: opponent.stats.special_defense,
    }
}

/// Compares two combatants and produces the full result plus the simulation
/// figures, so the caller can log recovered degeneracies without the engine
/// doing any logging itself.
pub fn compare(
    first: &PokemonDetail,
    second: &PokemonDetail,
    chart: &TypeChart,
) -> (ComparisonResult, Option<SimulationDiagnostics>) {
    let profile1 = build_profile(first, second, chart);
    let profile2 = build_profile(second, first, chart);

    let explanation1 =
        effectiveness::explain(chart, &first.types, &second.types, profile1.type_multiplier);
    let explanation2 =
        effectiveness::explain(chart, &second.types, &first.types, profile2.type_multiplier);

    let verdict = resolve_battle(first, second, &profile1, &profile2);

    let result = ComparisonResult {
        pokemon1: first.name.clone(),
        pokemon2: second.name.clone(),
        winner: verdict.winner,
        score1: verdict.score1,
        score2: verdict.score2,
        reasoning: verdict.reasoning,
        stat_differences: stat_differences(&first.stats, &second.stats),
        type_multiplier1_vs2: profile1.type_multiplier,
        type_multiplier2_vs1: profile2.type_multiplier,
        ability_impact1: profile1.ability.summary.clone(),
        ability_impact2: profile2.ability.summary.clone(),
        type_effectiveness_explanation1: explanation1,
        type_effectiveness_explanation2: explanation2,
        pokemon1_effective_stats: effective_stats(first, second, &profile1),
        pokemon2_effective_stats: effective_stats(second, first, &profile2),
    };

    (result, verdict.diagnostics)
}
