use pokearena::battle::{self, TypeChart, TypeRelations, STALEMATE_WINNER};
use pokearena::model::{PokemonAbility, PokemonDetail, PokemonStats};

fn record(name: &str, types: &[&str], abilities: &[&str], stats: [u32; 6]) -> PokemonDetail {
    PokemonDetail {
        id: 1,
        name: name.to_string(),
        height: 10,
        weight: 100,
        types: types.iter().map(|t| t.to_string()).collect(),
        abilities: abilities.iter().map(|a| PokemonAbility::named(*a)).collect(),
        stats: PokemonStats {
            hp: stats[0],
            attack: stats[1],
            defense: stats[2],
            special_attack: stats[3],
            special_defense: stats[4],
            speed: stats[5],
        },
        sprite_url: String::new(),
    }
}

/// A small slice of the real type chart, enough for every scenario below.
fn chart() -> TypeChart {
    let mut chart = TypeChart::new();
    chart.insert(
        "electric",
        TypeRelations::new(["water", "flying"], ["grass", "dragon", "electric"], ["ground"]),
    );
    chart.insert(
        "water",
        TypeRelations::new(["fire", "ground", "rock"], ["water", "grass", "dragon"], [] as [&str; 0]),
    );
    chart.insert(
        "ground",
        TypeRelations::new(
            ["fire", "electric", "poison", "rock", "steel"],
            ["grass", "bug"],
            ["flying"],
        ),
    );
    chart.insert(
        "normal",
        TypeRelations::new([] as [&str; 0], ["rock", "steel"], ["ghost"]),
    );
    chart.insert(
        "ghost",
        TypeRelations::new(["ghost", "psychic"], ["dark"], ["normal"]),
    );
    chart
}

#[test]
fn physical_attacker_with_type_advantage_gets_doubled_offense() {
    // 50-point attack gap forces the physical role; electric vs pure water
    // doubles the raw stat with no ability modifier in between.
    let attacker = record("Raichu", &["Electric"], &[], [60, 100, 55, 50, 80, 110]);
    let defender = record("Squirtle", &["Water"], &[], [44, 48, 65, 50, 64, 43]);

    let (result, _) = battle::compare(&attacker, &defender, &chart());

    let breakdown = &result.pokemon1_effective_stats;
    assert_eq!(breakdown.offense_type, "Physical");
    assert_eq!(breakdown.effective_offense, 200.0);
    assert_eq!(result.type_multiplier1_vs2, 2.0);
    assert_eq!(breakdown.opponent_defense, 65);
    assert_eq!(breakdown.opponent_special_defense, 64);
}

#[test]
fn mutual_immunity_is_a_stalemate_regardless_of_stats() {
    let ghost = record("Gastly", &["Ghost"], &[], [30, 35, 30, 100, 35, 80]);
    let normal = record("Snorlax", &["Normal"], &[], [160, 110, 65, 65, 110, 30]);

    let (result, diagnostics) = battle::compare(&ghost, &normal, &chart());

    assert_eq!(result.winner, STALEMATE_WINNER);
    assert_eq!(result.score1, 500);
    assert_eq!(result.score2, 500);
    assert!(result.reasoning.contains("No winner can be determined"));
    assert!(diagnostics.is_none(), "stalemates never reach simulation");
}

#[test]
fn one_sided_immunity_wins_outright() {
    let electric = record("Pikachu", &["Electric"], &[], [35, 55, 40, 50, 50, 90]);
    let ground = record("Golem", &["Ground"], &[], [80, 120, 130, 55, 65, 45]);

    let (result, _) = battle::compare(&electric, &ground, &chart());

    assert_eq!(result.winner, "Golem");
    assert_eq!(result.score1, 0);
    assert_eq!(result.score2, 999);
    assert!(result.reasoning.contains("IMMUNE"));
    assert_eq!(result.type_multiplier1_vs2, 0.0);
    assert_eq!(result.type_multiplier2_vs1, 2.0);
}

#[test]
fn wonder_guard_beats_strictly_better_stats() {
    // Every stat is lower, but nothing the opponent has is super effective.
    let shielded = record("Shedinja", &["Ghost"], &["Wonder guard"], [1, 90, 45, 30, 30, 40]);
    let bruiser = record("Snorlax", &["Normal"], &[], [160, 110, 65, 65, 110, 30]);

    let (result, _) = battle::compare(&shielded, &bruiser, &chart());

    assert_eq!(result.winner, "Shedinja");
    assert_eq!(result.score1, 999);
    assert_eq!(result.score2, 0);
    assert!(result.reasoning.contains("INVINCIBLE"));
}

#[test]
fn wonder_guard_does_not_save_a_super_effective_matchup() {
    // Ghost hits ghost for double damage, so the shield check fails and the
    // fight falls through to the simulation phases.
    let shielded = record("Shedinja", &["Ghost"], &["Wonder guard"], [1, 90, 45, 30, 30, 40]);
    let ghost = record("Gengar", &["Ghost"], &[], [60, 65, 60, 130, 75, 110]);

    let (result, diagnostics) = battle::compare(&shielded, &ghost, &chart());

    assert_ne!(result.score1, 999);
    assert!(diagnostics.is_some());
    assert_eq!(result.winner, "Gengar");
}

#[test]
fn identical_records_resolve_as_a_mirror_match() {
    let first = record("Pikachu", &["Electric"], &["Static"], [35, 55, 40, 50, 50, 90]);
    let second = record("Pikachu", &["Electric"], &["Static"], [35, 55, 40, 50, 50, 90]);

    let (result, diagnostics) = battle::compare(&first, &second, &chart());

    assert_eq!(result.winner, "Pikachu");
    assert!(result.reasoning.contains("MIRROR MATCH"), "{}", result.reasoning);
    assert!(
        diagnostics.is_some(),
        "mirror detection happens after simulation"
    );
    assert_eq!(result.score1, result.score2);
}

#[test]
fn faster_knockout_wins_the_turn_comparison() {
    let strong = record("Gyarados", &["Water"], &[], [95, 125, 79, 60, 100, 81]);
    let weak = record("Rattata", &["Normal"], &[], [30, 56, 35, 25, 35, 72]);

    let (result, diagnostics) = battle::compare(&strong, &weak, &chart());
    let diagnostics = diagnostics.expect("simulation should run");

    assert_eq!(result.winner, "Gyarados");
    assert!(
        diagnostics.first.turns_to_ko < diagnostics.second.turns_to_ko,
        "winner should need fewer turns"
    );
    assert!(result.reasoning.contains("KOs in"), "{}", result.reasoning);
    assert!(result.reasoning.contains("turn advantage"), "{}", result.reasoning);
}

#[test]
fn significant_score_gap_outweighs_speed_on_equal_turns() {
    // Both sides hit the 50% damage cap (two-turn KO each way), so the
    // decision falls to the score comparison, where the bulkier side is more
    // than 40 points ahead despite being slower.
    let bulky = record("Tank", &["Normal"], &[], [250, 200, 20, 10, 20, 50]);
    let frail = record("Glass", &["Normal"], &[], [100, 200, 20, 10, 20, 100]);

    let (result, diagnostics) = battle::compare(&bulky, &frail, &chart());
    let diagnostics = diagnostics.expect("simulation should run");

    assert_eq!(
        diagnostics.first.turns_to_ko, diagnostics.second.turns_to_ko,
        "scenario must produce equal turn counts"
    );
    assert_eq!(result.winner, "Tank");
    assert!(
        result.reasoning.contains("superior combat profile"),
        "{}",
        result.reasoning
    );
}

#[test]
fn speed_breaks_a_close_tie_on_equal_turns() {
    let slow = record("Slowpoke", &["Water"], &[], [90, 65, 65, 40, 40, 15]);
    let fast = record("Vaporeon", &["Water"], &[], [90, 65, 65, 40, 40, 65]);

    let (result, diagnostics) = battle::compare(&slow, &fast, &chart());
    let diagnostics = diagnostics.expect("simulation should run");

    assert_eq!(diagnostics.first.turns_to_ko, diagnostics.second.turns_to_ko);
    assert_eq!(result.winner, "Vaporeon");
    assert!(
        result.reasoning.contains("striking first"),
        "{}",
        result.reasoning
    );
}

#[test]
fn equal_speed_and_score_prefers_the_first_combatant() {
    let first = record("Plusle", &["Electric"], &[], [60, 50, 40, 85, 75, 95]);
    let second = record("Minun", &["Electric"], &[], [60, 50, 40, 85, 75, 95]);

    let (result, _) = battle::compare(&first, &second, &chart());

    // Names differ, so the mirror branch is skipped; the speed-tie branch
    // keeps the greater-or-equal score on the first side.
    assert_eq!(result.winner, "Plusle");
    assert!(
        result.reasoning.contains("edges out marginally"),
        "{}",
        result.reasoning
    );
}

#[test]
fn degenerate_damage_is_recovered_not_propagated() {
    // A zero-HP target drives the damage clamps to zero; the engine must
    // substitute rather than emit NaN or a zero-turn KO.
    let attacker = record("Pidgey", &["Normal"], &[], [40, 45, 40, 35, 35, 56]);
    let hollow = record("Husk", &["Normal"], &[], [0, 45, 40, 35, 35, 56]);

    let (result, diagnostics) = battle::compare(&attacker, &hollow, &chart());
    let diagnostics = diagnostics.expect("simulation should run");

    assert!(diagnostics.first.recovered_damage);
    assert!(diagnostics.first.turns_to_ko.is_infinite());
    assert!(diagnostics.first.damage_per_turn > 0.0);
    assert_eq!(result.winner, "Husk");
}

#[test]
fn comparison_is_deterministic() {
    let first = record("Raichu", &["Electric"], &["Static"], [60, 90, 55, 90, 80, 110]);
    let second = record("Gyarados", &["Water", "Flying"], &[], [95, 125, 79, 60, 100, 81]);

    let (a, _) = battle::compare(&first, &second, &chart());
    let (b, _) = battle::compare(&first, &second, &chart());

    let a = serde_json::to_string(&a).expect("result should serialize");
    let b = serde_json::to_string(&b).expect("result should serialize");
    assert_eq!(a, b);
}

#[test]
fn dual_defending_types_compound_into_the_result() {
    let electric = record("Pikachu", &["Electric"], &[], [35, 55, 40, 50, 50, 90]);
    let dual = record("Gyarados", &["Water", "Flying"], &[], [95, 125, 79, 60, 100, 81]);

    let (result, _) = battle::compare(&electric, &dual, &chart());

    assert_eq!(result.type_multiplier1_vs2, 4.0);
    assert!(
        result
            .type_effectiveness_explanation1
            .starts_with("DOUBLE SUPER EFFECTIVE (4x):"),
        "{}",
        result.type_effectiveness_explanation1
    );
}

#[test]
fn stat_differences_are_first_minus_second() {
    let first = record("A", &["Normal"], &[], [10, 20, 30, 40, 50, 60]);
    let second = record("B", &["Normal"], &[], [60, 50, 40, 30, 20, 10]);

    let (result, _) = battle::compare(&first, &second, &chart());

    assert_eq!(result.stat_differences["HP"], -50);
    assert_eq!(result.stat_differences["Attack"], -30);
    assert_eq!(result.stat_differences["Defense"], -10);
    assert_eq!(result.stat_differences["Special Attack"], 10);
    assert_eq!(result.stat_differences["Special Defense"], 30);
    assert_eq!(result.stat_differences["Speed"], 50);
}

#[test]
fn ability_summaries_surface_in_the_result() {
    let boosted = record("Azumarill", &["Water"], &["Huge power"], [100, 50, 80, 60, 80, 50]);
    let plain = record("Poliwag", &["Water"], &[], [40, 50, 40, 40, 40, 90]);

    let (result, _) = battle::compare(&boosted, &plain, &chart());

    assert_eq!(result.ability_impact1, "Attack DOUBLED by Huge power");
    assert_eq!(result.ability_impact2, "No significant ability impact");
    assert_eq!(result.pokemon1_effective_stats.offense_multiplier, 2.0);
}
