//! Per-combatant battle profile: stats, attack role, type effectiveness,
//! and ability modifiers folded into the four numbers the resolver works
//! with. Built fresh for each comparison, never cached.

use crate::battle::abilities::{ability_modifiers, AbilityModifiers};
use crate::battle::effectiveness::{self, TypeChart};
use crate::model::{PokemonDetail, PokemonStats};

/// Stat gap below which an attacker counts as mixed rather than physical.
pub const ROLE_STAT_GAP: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRole {
    Physical,
    Special,
}

impl AttackRole {
    pub fn is_physical(self) -> bool {
        matches!(self, Self::Physical)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Special => "Special",
        }
    }
}

/// Classify by the attack / special-attack gap. Mixed attackers default to
/// special so damage output is not overestimated.
pub fn attack_role(stats: &PokemonStats) -> AttackRole {
    let gap = i64::from(stats.attack) - i64::from(stats.special_attack);
    if gap >= ROLE_STAT_GAP {
        return AttackRole::Physical;
    }
    if gap <= -ROLE_STAT_GAP {
        return AttackRole::Special;
    }
    AttackRole::Special
}

/// Derived combat numbers for one side of a comparison. `defense` is the
/// opponent's role-selected defense stat scaled by this side's defensive
/// ability: how hard this combatant hits into, not how bulky it is.
#[derive(Debug, Clone)]
pub struct BattleProfile {
    pub hp: f64,
    pub offense: f64,
    pub defense: f64,
    pub speed: f64,
    pub type_multiplier: f64,
    pub role: AttackRole,
    pub ability: AbilityModifiers,
}

/// Pure function over both records: the opponent supplies the defending
/// type set and the role-dependent defense denominator.
pub fn build_profile(
    record: &PokemonDetail,
    opponent: &PokemonDetail,
    chart: &TypeChart,
) -> BattleProfile {
    let role = attack_role(&record.stats);
    let ability = ability_modifiers(&record.abilities, &opponent.types);
    let type_multiplier = effectiveness::resolve(chart, &record.types, &opponent.types);

    let raw_offense = match role {
        AttackRole::Physical => record.stats.attack,
        AttackRole::Special => record.stats.special_attack,
    };
    let raw_defense = match role {
        AttackRole::Physical => opponent.stats.defense,
        AttackRole::Special => opponent.stats.special_defense,
    };

    BattleProfile {
        hp: f64::from(record.stats.hp),
        offense: f64::from(raw_offense) * ability.offense * type_multiplier,
        defense: f64::from(raw_defense) * ability.defense,
        speed: f64::from(record.stats.speed) * ability.speed,
        type_multiplier,
        role,
        ability,
    }
}
