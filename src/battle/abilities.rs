//! Ability modifiers. Known abilities live in a closed table mapping the
//! normalized ability name to a tagged effect; one dispatch loop applies
//! every match multiplicatively. Unknown names are no-ops.

use phf::phf_map;

use crate::model::PokemonAbility;

/// Description used when no listed ability matched.
pub const NO_ABILITY_IMPACT: &str = "No significant ability impact";

/// Marker for an effect the battle resolver must handle outside normal
/// multiplier math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CriticalTag {
    /// Raw attack stat is doubled (huge-power class).
    AttackDoubled,
    /// Only super-effective hits land at all (wonder-guard).
    SuperEffectiveShield,
    /// Immune to the opponent's ground-type attacks (levitate).
    GroundImmune,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EffectKind {
    Offense(f64),
    Defense(f64),
    Speed(f64),
    /// Grants immunity to one element; only relevant when the opponent
    /// actually carries that element.
    TypeImmunity(&'static str),
    /// Bypasses every multiplier path; communicated via tag only.
    DamageGate,
    /// Worth mentioning, no modeled numeric effect.
    Note,
}

struct AbilityEffect {
    kind: EffectKind,
    note: &'static str,
    tag: Option<CriticalTag>,
}

const fn boost(kind: EffectKind, note: &'static str) -> AbilityEffect {
    AbilityEffect {
        kind,
        note,
        tag: None,
    }
}

static ABILITY_EFFECTS: phf::Map<&'static str, AbilityEffect> = phf_map! {
    // Game-breaking attack doublers.
    "huge-power" => AbilityEffect {
        kind: EffectKind::Offense(2.0),
        note: "",
        tag: Some(CriticalTag::AttackDoubled),
    },
    "pure-power" => AbilityEffect {
        kind: EffectKind::Offense(2.0),
        note: "",
        tag: Some(CriticalTag::AttackDoubled),
    },
    "wonder-guard" => AbilityEffect {
        kind: EffectKind::DamageGate,
        note: "CRITICAL: Only super-effective moves can hit",
        tag: Some(CriticalTag::SuperEffectiveShield),
    },
    // Strong offensive abilities.
    "adaptability" => boost(EffectKind::Offense(1.33), "+33% damage from Adaptability"),
    "guts" => boost(EffectKind::Offense(1.5), "+50% Attack from Guts"),
    "skill-link" => boost(EffectKind::Offense(1.3), "+30% from multi-hit moves"),
    // Defensive abilities.
    "marvel-scale" => boost(EffectKind::Defense(1.5), "+50% Defense from Marvel Scale"),
    "thick-fat" => boost(EffectKind::Defense(1.25), "+25% bulk vs Fire/Ice"),
    "solid-rock" => boost(EffectKind::Defense(1.25), "Super-effective damage reduced 25%"),
    "filter" => boost(EffectKind::Defense(1.25), "Super-effective damage reduced 25%"),
    // Speed abilities.
    "speed-boost" => boost(EffectKind::Speed(1.5), "+50% Speed boost"),
    "swift-swim" => boost(EffectKind::Speed(1.3), "+30% Speed in weather"),
    "chlorophyll" => boost(EffectKind::Speed(1.3), "+30% Speed in weather"),
    "sand-rush" => boost(EffectKind::Speed(1.3), "+30% Speed in weather"),
    // Utility and immunity abilities.
    "levitate" => AbilityEffect {
        kind: EffectKind::TypeImmunity("ground"),
        note: "IMMUNE to Ground-type",
        tag: Some(CriticalTag::GroundImmune),
    },
    "water-absorb" => boost(EffectKind::Note, "Heals from certain type attacks"),
    "volt-absorb" => boost(EffectKind::Note, "Heals from certain type attacks"),
    "flash-fire" => boost(EffectKind::Note, "Heals from certain type attacks"),
    "intimidate" => boost(EffectKind::Note, "Lowers opponent Attack 33%"),
    "unaware" => boost(EffectKind::Note, "Ignores opponent's stat boosts"),
};

/// Accumulated ability impact for one combatant against a specific opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityModifiers {
    pub offense: f64,
    pub defense: f64,
    pub speed: f64,
    pub summary: String,
    pub critical: Vec<CriticalTag>,
}

/// Normalized display names ("Huge power") back to catalog keys ("huge-power").
fn ability_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Applies every listed ability in record order. Multiple matches multiply;
/// conditional immunities activate only against the opponent's actual types.
pub fn ability_modifiers(abilities: &[PokemonAbility], opponent_types: &[String]) -> AbilityModifiers {
    let mut offense = 1.0;
    let mut defense = 1.0;
    let mut speed = 1.0;
    let mut notes: Vec<String> = Vec::new();
    let mut critical: Vec<CriticalTag> = Vec::new();

    for ability in abilities {
        let key = ability_key(&ability.name);
        let Some(effect) = ABILITY_EFFECTS.get(key.as_str()) else {
            continue;
        };

        match effect.kind {
            EffectKind::Offense(factor) => offense *= factor,
            EffectKind::Defense(factor) => defense *= factor,
            EffectKind::Speed(factor) => speed *= factor,
            EffectKind::TypeImmunity(blocked) => {
                let triggered = opponent_types
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(blocked));
                if !triggered {
                    continue;
                }
            }
            EffectKind::DamageGate | EffectKind::Note => {}
        }

        notes.push(match effect.tag {
            Some(CriticalTag::AttackDoubled) => format!("Attack DOUBLED by {}", ability.name),
            _ => effect.note.to_string(),
        });
        if let Some(tag) = effect.tag {
            critical.push(tag);
        }
    }

    let summary = if notes.is_empty() {
        NO_ABILITY_IMPACT.to_string()
    } else {
        notes.join("; ")
    };

    AbilityModifiers {
        offense,
        defense,
        speed,
        summary,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<PokemonAbility> {
        names.iter().map(|name| PokemonAbility::named(*name)).collect()
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn unknown_abilities_are_no_ops() {
        let modifiers = ability_modifiers(&named(&["Static", "Run away"]), &owned(&["Normal"]));
        assert_eq!(modifiers.offense, 1.0);
        assert_eq!(modifiers.defense, 1.0);
        assert_eq!(modifiers.speed, 1.0);
        assert_eq!(modifiers.summary, NO_ABILITY_IMPACT);
        assert!(modifiers.critical.is_empty());
    }

    #[test]
    fn huge_power_doubles_offense_and_tags() {
        let modifiers = ability_modifiers(&named(&["Huge power"]), &owned(&["Water"]));
        assert_eq!(modifiers.offense, 2.0);
        assert_eq!(modifiers.summary, "Attack DOUBLED by Huge power");
        assert_eq!(modifiers.critical, vec![CriticalTag::AttackDoubled]);
    }

    #[test]
    fn multiple_abilities_multiply() {
        let modifiers = ability_modifiers(&named(&["Guts", "Adaptability"]), &owned(&["Normal"]));
        assert!((modifiers.offense - 1.5 * 1.33).abs() < 1e-12);
        assert_eq!(
            modifiers.summary,
            "+50% Attack from Guts; +33% damage from Adaptability"
        );
    }

    #[test]
    fn levitate_only_triggers_against_ground() {
        let against_ground = ability_modifiers(&named(&["Levitate"]), &owned(&["Ground"]));
        assert_eq!(against_ground.summary, "IMMUNE to Ground-type");
        assert_eq!(against_ground.critical, vec![CriticalTag::GroundImmune]);

        let against_water = ability_modifiers(&named(&["Levitate"]), &owned(&["Water"]));
        assert_eq!(against_water.summary, NO_ABILITY_IMPACT);
        assert!(against_water.critical.is_empty());
    }

    #[test]
    fn wonder_guard_is_tag_only() {
        let modifiers = ability_modifiers(&named(&["Wonder guard"]), &owned(&["Fire"]));
        assert_eq!(modifiers.offense, 1.0);
        assert_eq!(modifiers.defense, 1.0);
        assert_eq!(modifiers.critical, vec![CriticalTag::SuperEffectiveShield]);
        assert!(modifiers.summary.contains("Only super-effective"));
    }

    #[test]
    fn defense_and_speed_classes_apply() {
        let modifiers = ability_modifiers(
            &named(&["Marvel scale", "Speed boost"]),
            &owned(&["Normal"]),
        );
        assert_eq!(modifiers.defense, 1.5);
        assert_eq!(modifiers.speed, 1.5);
    }
}
