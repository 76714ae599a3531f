//! Resolution of one simultaneous action pair into damage and healing.
//!
//! Pure math over the effectiveness table plus an injected RNG; applying the
//! results to combatants is the engine's job.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::engine::effectiveness::base_damage;
use crate::models::{Action, TurnEffects};

/// Uniform jitter added to every nonzero damage roll.
const DAMAGE_JITTER: RangeInclusive<i32> = -5..=5;
/// Uniform amount restored by a heal action.
const HEAL_ROLL: RangeInclusive<i32> = 20..=30;

/// Damage multiplier granted by the opponent's attack skill: 0.8x at skill 0
/// up to 1.2x at skill 100.
fn attack_multiplier(attack_skill: u8) -> f64 {
    0.8 + (attack_skill as f64 / 100.0) * 0.4
}

/// Resolve one action pair into damage and heal amounts.
///
/// Only opponent-dealt damage is skill-scaled; the player carries no skill
/// attributes. Scaling truncates toward zero before the jitter is added.
/// Heal amounts are rolled whenever the action is `Heal`, independent of
/// the damage lines.
pub fn resolve_actions(
    player_action: Action,
    ai_action: Action,
    ai_attack_skill: u8,
    rng: &mut impl Rng,
) -> TurnEffects {
    let (base_dealt_by_player, base_dealt_by_ai) = base_damage(player_action, ai_action);

    let mut effects = TurnEffects::default();

    if base_dealt_by_ai > 0 {
        let scaled = (base_dealt_by_ai as f64 * attack_multiplier(ai_attack_skill)) as i32;
        effects.player_damage = scaled + rng.gen_range(DAMAGE_JITTER);
    }
    if base_dealt_by_player > 0 {
        effects.ai_damage = base_dealt_by_player + rng.gen_range(DAMAGE_JITTER);
    }

    if player_action == Action::Heal {
        effects.player_heal = rng.gen_range(HEAL_ROLL);
    }
    if ai_action == Action::Heal {
        effects.ai_heal = rng.gen_range(HEAL_ROLL);
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_attack_multiplier_endpoints() {
        assert_eq!(attack_multiplier(0), 0.8);
        assert_eq!(attack_multiplier(50), 1.0);
        assert!((attack_multiplier(100) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_skill_scaling_and_truncation() {
        // A probe clone replays the jitter draws, isolating the scaling:
        // base 25 at skill 95 is 25 * 1.18 = 29.5, truncated to 29.
        let mut rng = test_rng();
        let mut probe = rng.clone();

        let effects = resolve_actions(Action::Attack, Action::Attack, 95, &mut rng);

        let expected_player = 29 + probe.gen_range(DAMAGE_JITTER);
        let expected_ai = 25 + probe.gen_range(DAMAGE_JITTER);
        assert_eq!(effects.player_damage, expected_player);
        assert_eq!(effects.ai_damage, expected_ai);
        assert!(effects.special_effects.is_empty());
    }

    #[test]
    fn test_only_opponent_damage_is_scaled() {
        // At skill 50 the multiplier is exactly 1.0, so both sides reduce to
        // base plus jitter.
        let mut rng = test_rng();
        for _ in 0..200 {
            let effects = resolve_actions(Action::Special, Action::Special, 50, &mut rng);
            assert!((35..=45).contains(&effects.player_damage), "40 +/- 5");
            assert!((35..=45).contains(&effects.ai_damage), "40 +/- 5");
        }
    }

    #[test]
    fn test_zero_base_damage_skips_jitter() {
        let mut rng = test_rng();
        for _ in 0..50 {
            let effects = resolve_actions(Action::Defend, Action::Defend, 95, &mut rng);
            assert_eq!(effects.player_damage, 0);
            assert_eq!(effects.ai_damage, 0);
            assert_eq!(effects.player_heal, 0);
            assert_eq!(effects.ai_heal, 0);
        }
    }

    #[test]
    fn test_heal_rolls_stay_in_range() {
        let mut rng = test_rng();
        for _ in 0..200 {
            let effects = resolve_actions(Action::Heal, Action::Heal, 50, &mut rng);
            assert!((20..=30).contains(&effects.player_heal));
            assert!((20..=30).contains(&effects.ai_heal));
            assert_eq!(effects.player_damage, 0);
            assert_eq!(effects.ai_damage, 0);
        }
    }

    #[test]
    fn test_one_sided_heal() {
        // Healing into an attack: the healer takes the hit and still heals.
        let mut rng = test_rng();
        for _ in 0..100 {
            let effects = resolve_actions(Action::Heal, Action::Attack, 50, &mut rng);
            assert!((30..=40).contains(&effects.player_damage), "35 +/- 5");
            assert_eq!(effects.ai_damage, 0);
            assert!((20..=30).contains(&effects.player_heal));
            assert_eq!(effects.ai_heal, 0);
        }
    }

    #[test]
    fn test_same_seed_same_effects() {
        let a = resolve_actions(Action::Special, Action::Heal, 80, &mut test_rng());
        let b = resolve_actions(Action::Special, Action::Heal, 80, &mut test_rng());
        assert_eq!(a, b);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: resolved damage and heals stay inside the bounds the
            /// table, scaling, and jitter allow.
            #[test]
            fn prop_effects_bounded(
                seed in any::<u64>(),
                player_idx in 0usize..4,
                ai_idx in 0usize..4,
                skill in 0u8..=100,
            ) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let player = Action::ALL[player_idx];
                let ai = Action::ALL[ai_idx];
                let effects = resolve_actions(player, ai, skill, &mut rng);

                // Max base 45 at 1.2x is 54, plus 5 jitter.
                prop_assert!((0..=59).contains(&effects.player_damage));
                prop_assert!((0..=50).contains(&effects.ai_damage));
                prop_assert!(effects.player_heal == 0 || (20..=30).contains(&effects.player_heal));
                prop_assert!(effects.ai_heal == 0 || (20..=30).contains(&effects.ai_heal));
                prop_assert_eq!(effects.player_heal > 0, player == Action::Heal);
                prop_assert_eq!(effects.ai_heal > 0, ai == Action::Heal);
                prop_assert!(effects.special_effects.is_empty());
            }
        }
    }
}
