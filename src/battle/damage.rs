//! Damage and turn model: an offense/defense ratio scaled into a per-turn
//! HP bite, clamped so one turn never decides a fight and no fight stalls
//! at zero progress.

/// Empirical scale so roughly equal combatants trade 20-50% HP per turn.
pub const DAMAGE_SCALE: f64 = 15.0;
/// Per-turn damage cap as a fraction of the target's HP.
pub const MAX_HP_FRACTION: f64 = 0.50;
/// Per-turn damage floor as a fraction of the target's HP.
pub const MIN_HP_FRACTION: f64 = 0.03;
/// Denominator floor when converting damage into turns.
pub const MIN_TURN_DAMAGE: f64 = 0.1;

/// Damage dealt per turn into `target_hp`. Type effectiveness is already
/// folded into `offense`; the multiplier is only consulted for the true
/// immunity case, which is the one path allowed to return exactly 0.
pub fn damage_per_turn(offense: f64, defense: f64, target_hp: f64, type_multiplier: f64) -> f64 {
    if type_multiplier == 0.0 {
        return 0.0;
    }

    let ratio = offense / defense.max(1.0);
    let base_damage = ratio * DAMAGE_SCALE;

    base_damage
        .min(target_hp * MAX_HP_FRACTION)
        .max(target_hp * MIN_HP_FRACTION)
}

/// Whole turns needed to knock out `target_hp` at `damage` per turn.
pub fn turns_to_ko(target_hp: f64, damage: f64) -> f64 {
    (target_hp / damage.max(MIN_TURN_DAMAGE)).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immunity_always_deals_zero() {
        assert_eq!(damage_per_turn(10_000.0, 1.0, 100.0, 0.0), 0.0);
        assert_eq!(damage_per_turn(1.0, 10_000.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn damage_is_bounded_by_hp_fractions() {
        let hp = 120.0;
        for (offense, defense) in [(1.0, 500.0), (90.0, 85.0), (5_000.0, 1.0)] {
            let damage = damage_per_turn(offense, defense, hp, 2.0);
            assert!(
                damage >= hp * MIN_HP_FRACTION && damage <= hp * MAX_HP_FRACTION,
                "damage {damage} out of bounds for offense {offense} defense {defense}"
            );
        }
    }

    #[test]
    fn floor_applies_to_small_but_nonzero_damage() {
        let hp = 100.0;
        let damage = damage_per_turn(1.0, 1_000.0, hp, 0.5);
        assert_eq!(damage, hp * MIN_HP_FRACTION);
    }

    #[test]
    fn zero_defense_is_clamped_not_divided() {
        let damage = damage_per_turn(50.0, 0.0, 10_000.0, 1.0);
        assert!(damage.is_finite());
        assert_eq!(damage, 50.0 * DAMAGE_SCALE);
    }

    #[test]
    fn turns_round_up() {
        assert_eq!(turns_to_ko(100.0, 40.0), 3.0);
        assert_eq!(turns_to_ko(100.0, 50.0), 2.0);
    }

    #[test]
    fn turn_conversion_survives_zero_damage() {
        assert_eq!(turns_to_ko(100.0, 0.0), 1000.0);
    }
}
