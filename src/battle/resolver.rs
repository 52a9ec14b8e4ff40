//! Single-shot battle resolution over two completed profiles. Phases run in
//! strict order and any phase may end the fight; reasoning strings are built
//! from the same numbers that made the decision.

use crate::battle::abilities::CriticalTag;
use crate::battle::damage::{damage_per_turn, turns_to_ko};
use crate::battle::profile::BattleProfile;
use crate::battle::score::battle_score;
use crate::model::PokemonDetail;

/// Winner marker when both sides are immune to each other.
pub const STALEMATE_WINNER: &str = "Stalemate";
/// Score awarded for an outright win (invincibility or immunity).
pub const INSTANT_WIN_SCORE: i32 = 999;
/// Score both sides receive in a stalemate.
pub const STALEMATE_SCORE: i32 = 500;
/// Speed differences below this are a tie, not a first strike.
pub const SPEED_TIE_EPSILON: f64 = 0.01;
/// Score gap that outweighs a speed advantage when turn counts match.
const SIGNIFICANT_SCORE_GAP: i32 = 40;
/// Score gap under which two same-named combatants count as identical.
const MIRROR_SCORE_GAP: i32 = 5;

/// Simulation figures for one side, returned instead of being logged so the
/// engine stays side-effect free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideDiagnostics {
    pub damage_per_turn: f64,
    pub turns_to_ko: f64,
    /// True when a non-positive or non-finite damage value was replaced by
    /// the substitution rule.
    pub recovered_damage: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationDiagnostics {
    pub first: SideDiagnostics,
    pub second: SideDiagnostics,
}

#[derive(Debug, Clone)]
pub struct BattleVerdict {
    pub winner: String,
    pub score1: i32,
    pub score2: i32,
    pub reasoning: String,
    /// Present only when the fight reached the damage simulation phase.
    pub diagnostics: Option<SimulationDiagnostics>,
}

fn simulate_side(
    attacker: &BattleProfile,
    defender: &BattleProfile,
) -> SideDiagnostics {
    let mut damage = damage_per_turn(
        attacker.offense,
        attacker.defense,
        defender.hp,
        attacker.type_multiplier,
    );
    let mut turns = turns_to_ko(defender.hp, damage);
    let recovered = damage <= 0.0 || damage.is_nan() || damage.is_infinite();
    if recovered {
        // Substitution rule: never propagate a degenerate damage value.
        damage = 0.1;
        turns = f64::INFINITY;
    }
    SideDiagnostics {
        damage_per_turn: damage,
        turns_to_ko: turns,
        recovered_damage: recovered,
    }
}

pub fn resolve_battle(
    first: &PokemonDetail,
    second: &PokemonDetail,
    profile1: &BattleProfile,
    profile2: &BattleProfile,
) -> BattleVerdict {
    // Phase 1: invincibility. Only the shielded side's own offensive
    // multiplier is consulted; the direction of this check is deliberate.
    let shielded1 = profile1
        .ability
        .critical
        .contains(&CriticalTag::SuperEffectiveShield);
    if shielded1 && profile1.type_multiplier <= 1.0 {
        return BattleVerdict {
            winner: first.name.clone(),
            score1: INSTANT_WIN_SCORE,
            score2: 0,
            reasoning: format!(
                "{} is INVINCIBLE with Wonder Guard - opponent has no super-effective moves!",
                first.name
            ),
            diagnostics: None,
        };
    }
    let shielded2 = profile2
        .ability
        .critical
        .contains(&CriticalTag::SuperEffectiveShield);
    if shielded2 && profile2.type_multiplier <= 1.0 {
        return BattleVerdict {
            winner: second.name.clone(),
            score1: 0,
            score2: INSTANT_WIN_SCORE,
            reasoning: format!(
                "{} is INVINCIBLE with Wonder Guard - opponent has no super-effective moves!",
                second.name
            ),
            diagnostics: None,
        };
    }

    // Phases 2 and 3: elemental immunity. A side is untouchable when the
    // opponent's resolved multiplier against it is zero.
    let first_untouchable = profile2.type_multiplier == 0.0;
    let second_untouchable = profile1.type_multiplier == 0.0;

    if first_untouchable && second_untouchable {
        return BattleVerdict {
            winner: STALEMATE_WINNER.to_string(),
            score1: STALEMATE_SCORE,
            score2: STALEMATE_SCORE,
            reasoning: "STALEMATE: Both Pokémon are immune to each other's attacks. \
                        No winner can be determined."
                .to_string(),
            diagnostics: None,
        };
    }
    if first_untouchable {
        return BattleVerdict {
            winner: first.name.clone(),
            score1: INSTANT_WIN_SCORE,
            score2: 0,
            reasoning: format!("{} is IMMUNE to {}'s attacks!", first.name, second.name),
            diagnostics: None,
        };
    }
    if second_untouchable {
        return BattleVerdict {
            winner: second.name.clone(),
            score1: 0,
            score2: INSTANT_WIN_SCORE,
            reasoning: format!("{} is IMMUNE to {}'s attacks!", second.name, first.name),
            diagnostics: None,
        };
    }

    // Phase 4: cross-referenced damage simulation. Each side's damage is
    // computed from the other side's HP and the defense stored in its own
    // profile (which already belongs to the opponent).
    let side1 = simulate_side(profile1, profile2);
    let side2 = simulate_side(profile2, profile1);

    // Phase 5: first strike.
    let first_strikes = profile1.speed > profile2.speed;
    let speed_tie = (profile1.speed - profile2.speed).abs() < SPEED_TIE_EPSILON;

    // Phase 6: weighted scores.
    let score1 = battle_score(
        first.stats.hp,
        first.stats.defense,
        profile1.offense,
        profile1.speed,
        side1.turns_to_ko,
    );
    let score2 = battle_score(
        second.stats.hp,
        second.stats.defense,
        profile2.offense,
        profile2.speed,
        side2.turns_to_ko,
    );

    let diagnostics = Some(SimulationDiagnostics {
        first: side1,
        second: side2,
    });

    // Phase 7: decision. The mirror check outranks the turn comparison.
    let mirror = first.name.eq_ignore_ascii_case(&second.name)
        && (score1 - score2).abs() < MIRROR_SCORE_GAP
        && speed_tie;
    if mirror {
        return BattleVerdict {
            winner: first.name.clone(),
            score1,
            score2,
            reasoning: format!(
                "MIRROR MATCH: Both {} are identical. Battle outcome would be a coin flip.",
                first.name
            ),
            diagnostics,
        };
    }

    let (winner, reasoning) = if side1.turns_to_ko < side2.turns_to_ko {
        let mut reasoning = format!(
            "{} KOs in {} turns vs {} turns ({} turn advantage). \
             Deals {:.1} damage/turn with {}x type advantage.",
            first.name,
            side1.turns_to_ko,
            side2.turns_to_ko,
            side2.turns_to_ko - side1.turns_to_ko,
            side1.damage_per_turn,
            profile1.type_multiplier,
        );
        if first_strikes {
            reasoning.push_str(" Speed advantage ensures first strike.");
        }
        (first.name.clone(), reasoning)
    } else if side2.turns_to_ko < side1.turns_to_ko {
        let mut reasoning = format!(
            "{} KOs in {} turns vs {} turns ({} turn advantage). \
             Deals {:.1} damage/turn with {}x type advantage.",
            second.name,
            side2.turns_to_ko,
            side1.turns_to_ko,
            side1.turns_to_ko - side2.turns_to_ko,
            side2.damage_per_turn,
            profile2.type_multiplier,
        );
        if !first_strikes {
            reasoning.push_str(" Speed advantage ensures first strike.");
        }
        (second.name.clone(), reasoning)
    } else {
        // Equal turn counts: a significant score gap beats speed; otherwise
        // a speed tie falls back to greater-or-equal score, and a real speed
        // difference hands the fight to the first striker.
        let score_gap = (score1 - score2).abs();
        if score_gap > SIGNIFICANT_SCORE_GAP {
            let winner = if score1 > score2 { first } else { second };
            let reasoning = format!(
                "Both KO in {} turns, but {} wins with superior combat profile \
                 (Score: {} vs {}). Type advantage and stats outweigh speed difference.",
                side1.turns_to_ko,
                winner.name,
                score1.max(score2),
                score1.min(score2),
            );
            (winner.name.clone(), reasoning)
        } else if speed_tie {
            let winner = if score1 >= score2 { first } else { second };
            let reasoning = format!(
                "Both KO in {} turns with equal speed and similar power \
                 (Scores: {} vs {}). {} edges out marginally.",
                side1.turns_to_ko, score1, score2, winner.name,
            );
            (winner.name.clone(), reasoning)
        } else {
            let (winner, winner_speed, loser_speed) = if first_strikes {
                (first, profile1.speed, profile2.speed)
            } else {
                (second, profile2.speed, profile1.speed)
            };
            let reasoning = format!(
                "Both KO in {} turns with similar power (Scores: {} vs {}), \
                 but {} wins by striking first (Speed: {:.0} vs {:.0}).",
                side1.turns_to_ko, score1, score2, winner.name, winner_speed, loser_speed,
            );
            (winner.name.clone(), reasoning)
        }
    };

    BattleVerdict {
        winner,
        score1,
        score2,
        reasoning,
        diagnostics,
    }
}
