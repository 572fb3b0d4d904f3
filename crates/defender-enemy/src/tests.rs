#[cfg(test)]
mod tests {
    use defender_core::components::SplitChild;
    use defender_core::constants::*;
    use defender_core::enums::{EnemyKind, EnemyLifecycle};
    use defender_core::types::Position;

    use crate::fsm::*;
    use crate::profiles::get_profile;

    fn baseline() -> WaveBaseline {
        // Wave 1: speed x0.86, health x0.72, reward 9
        WaveBaseline::new(1, 0.86, 0.72, 9)
    }

    #[test]
    fn test_baseline_scaling() {
        let b = baseline();
        assert!((b.speed - 25.8).abs() < 1e-9);
        assert!((b.health - 28.8).abs() < 1e-9);
    }

    #[test]
    fn test_type_table() {
        let b = WaveBaseline::new(1, 1.0, 1.0, 10);
        let tank = spawn_enemy(EnemyKind::Tank, &b);
        assert!((tank.speed - 15.0).abs() < 1e-9);
        assert!((tank.max_health - 120.0).abs() < 1e-9);
        assert_eq!(tank.money_reward, 20);
        assert_eq!(tank.health, tank.max_health);
        assert_eq!(tank.base_speed, tank.speed);

        let fast = spawn_enemy(EnemyKind::Fast, &b);
        assert_eq!(fast.money_reward, 8, "money multiplier is floored");

        let shielded = spawn_enemy(EnemyKind::Shielded, &b);
        assert_eq!(shielded.shield_hits, 5);

        let regen = spawn_enemy(EnemyKind::Regen, &b);
        assert!((regen.regen_rate - 8.0).abs() < 1e-9, "10% of 80 max HP");

        let splitter = spawn_enemy(EnemyKind::Splitter, &b);
        let split = splitter.split.expect("splitter splits");
        assert_eq!(split.count, 2);
        assert_eq!(split.child, SplitChild::Fragment);
    }

    #[test]
    fn test_mega_chain() {
        let b = WaveBaseline::new(10, 1.0, 1.0, 18);
        let root = spawn_enemy(EnemyKind::MegaBoss, &b);
        assert!(root.is_mega_root);
        assert_eq!(
            root.split.map(|s| s.child),
            Some(SplitChild::Tier(EnemyKind::MegaBossMedium))
        );

        let medium = spawn_enemy(EnemyKind::MegaBossMedium, &b);
        assert!(!medium.is_mega_root, "only the root sets the defeat flag");
        assert_eq!(medium.split.map(|s| s.count), Some(3));
        assert_eq!(
            medium.split.map(|s| s.child),
            Some(SplitChild::Tier(EnemyKind::MegaBossSmall))
        );
        assert!(get_profile(EnemyKind::MegaBossSmall).split.is_none());
    }

    #[test]
    fn test_take_damage_unshielded_exact() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 2.5, 9));
        assert_eq!(e.health, 100.0);
        assert_eq!(take_damage(&mut e, 35.0), DamageOutcome::Damaged);
        assert_eq!(e.health, 65.0);
        assert_eq!(e.hit_flash, 1.0);
    }

    #[test]
    fn test_shield_then_damage() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 2.5, 9));
        e.shield_hits = 2;

        assert_eq!(take_damage(&mut e, 50.0), DamageOutcome::Blocked);
        assert_eq!(e.shield_hits, 1);
        assert_eq!(e.health, 100.0);

        assert_eq!(take_damage(&mut e, 50.0), DamageOutcome::Blocked);
        assert_eq!(e.shield_hits, 0);
        assert_eq!(e.health, 100.0);

        assert_eq!(take_damage(&mut e, 50.0), DamageOutcome::Damaged);
        assert_eq!(e.health, 50.0);
    }

    #[test]
    fn test_piercing_damage_ignores_shield() {
        let mut e = spawn_enemy(EnemyKind::Shielded, &WaveBaseline::new(1, 1.0, 1.0, 9));
        let before = e.health;
        assert_eq!(take_piercing_damage(&mut e, 10.0), DamageOutcome::Damaged);
        assert_eq!(e.shield_hits, 5);
        assert!((before - e.health - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_kill_at_zero() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 1.0, 9));
        assert_eq!(take_damage(&mut e, 40.0), DamageOutcome::Killed);
    }

    #[test]
    fn test_slow_and_restore() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 1.0, 9));
        let mut pos = Position::new(200.0, 0.0);
        apply_slow(&mut e, 0.5);
        assert_eq!(e.speed, 15.0);
        assert_eq!(e.slow_timer, SLOW_DURATION);

        // Reapplying refreshes instead of stacking
        step(&mut e, &mut pos, &Position::ORIGIN, 1.0);
        apply_slow(&mut e, 0.5);
        assert_eq!(e.speed, 15.0);
        assert_eq!(e.slow_timer, SLOW_DURATION);

        step(&mut e, &mut pos, &Position::ORIGIN, 1.5);
        assert!(e.slow_timer > 0.0);
        step(&mut e, &mut pos, &Position::ORIGIN, 0.6);
        assert_eq!(e.speed, e.base_speed, "speed restored when slow expires");
        assert_eq!(e.slow_factor, 0.0);
    }

    #[test]
    fn test_step_moves_toward_core() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 1.0, 9));
        let mut pos = Position::new(0.0, 280.0);
        let outcome = step(&mut e, &mut pos, &Position::ORIGIN, 1.0);
        assert_eq!(outcome, StepOutcome::Advancing);
        assert!((pos.y - 250.0).abs() < 1e-9);
        assert!(pos.x.abs() < 1e-9);
        assert_eq!(lifecycle(&e), EnemyLifecycle::Active);
    }

    #[test]
    fn test_spawn_growth() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 1.0, 9));
        let mut pos = Position::new(0.0, 280.0);
        assert_eq!(lifecycle(&e), EnemyLifecycle::Spawning);
        step(&mut e, &mut pos, &Position::ORIGIN, 0.125);
        assert!((e.spawn_scale - 0.5).abs() < 1e-12);
        step(&mut e, &mut pos, &Position::ORIGIN, 0.2);
        assert_eq!(e.spawn_scale, 1.0);
    }

    #[test]
    fn test_regen_capped() {
        let mut e = spawn_enemy(EnemyKind::Regen, &WaveBaseline::new(1, 1.0, 1.0, 9));
        let mut pos = Position::new(0.0, 280.0);
        e.health = e.max_health - 1.0;
        step(&mut e, &mut pos, &Position::ORIGIN, 1.0);
        assert_eq!(e.health, e.max_health);
    }

    #[test]
    fn test_deadzone_and_contact() {
        let mut e = spawn_enemy(EnemyKind::Normal, &WaveBaseline::new(1, 1.0, 1.0, 9));
        let mut pos = Position::new(4.0, 0.0);
        let outcome = step(&mut e, &mut pos, &Position::ORIGIN, 0.1);
        assert_eq!(outcome, StepOutcome::ReachedCore);
        assert_eq!(pos.x, 4.0, "no movement inside the deadzone");

        let mut far = Position::new(25.0, 0.0);
        assert_eq!(
            step(&mut e, &mut far, &Position::ORIGIN, 0.01),
            StepOutcome::Advancing
        );
    }

    #[test]
    fn test_category_modifiers_keep_invariants() {
        let mut e = spawn_enemy(EnemyKind::Regen, &WaveBaseline::new(1, 1.0, 1.0, 9));
        apply_category_modifiers(&mut e, 0.4, 1.3);
        assert!((e.max_health - 32.0).abs() < 1e-9);
        assert_eq!(e.health, e.max_health);
        assert!((e.regen_rate - 3.2).abs() < 1e-9);
        assert!((e.base_speed - 31.2).abs() < 1e-9);
        assert_eq!(e.speed, e.base_speed);
    }

    #[test]
    fn test_fragment() {
        let parent = spawn_enemy(EnemyKind::Splitter, &WaveBaseline::new(13, 1.0, 1.0, 21));
        let child = fragment_of(&parent);
        assert!(child.split.is_none());
        assert!((child.max_health - parent.max_health * 0.3).abs() < 1e-9);
        assert!((child.speed - parent.speed * 1.5).abs() < 1e-9);
        assert_eq!(child.base_speed, child.speed);
        // floor(floor(21 * 0.7) * 0.3) = floor(14 * 0.3) = 4
        assert_eq!(child.money_reward, 4);
        assert_eq!(child.spawn_scale, 1.0);
    }

    #[test]
    fn test_fragment_of_slowed_parent_keeps_current_speed() {
        let mut parent = spawn_enemy(EnemyKind::Splitter, &WaveBaseline::new(13, 1.0, 1.0, 21));
        apply_slow(&mut parent, 0.5);
        let child = fragment_of(&parent);

        assert!((child.speed - parent.base_speed * 0.5 * 1.5).abs() < 1e-9);
        assert_eq!(child.base_speed, child.speed);
        assert_eq!(child.slow_timer, 0.0);
    }

    #[test]
    fn test_split_positions_on_ring() {
        let center = Position::new(100.0, -50.0);
        let points = split_positions(center, 3);
        assert_eq!(points.len(), 3);
        for p in points {
            assert!((p.range_to(&center) - SPLIT_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nuke_policy() {
        let b = WaveBaseline::new(10, 1.0, 1.0, 18);
        let mut tank = spawn_enemy(EnemyKind::Tank, &b);
        assert_eq!(nuke_strike(&mut tank), DamageOutcome::Killed);

        let mut boss = spawn_enemy(EnemyKind::MegaBoss, &b);
        assert_eq!(nuke_strike(&mut boss), DamageOutcome::Damaged);
        assert!((boss.health - boss.max_health * 0.6).abs() < 1e-9);

        boss.health = 5.0;
        nuke_strike(&mut boss);
        assert_eq!(boss.health, 1.0, "mega tiers survive a nuke");
    }
}
