#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use defender_core::enums::{EnemyKind, WaveCategory};

    use crate::composer::{category, category_modifiers, WavePlan};
    use crate::scaling::*;

    #[test]
    fn test_wave_one_numbers() {
        assert_eq!(enemy_count(1), 14);
        assert!((health_multiplier(1) - 0.72).abs() < 1e-12);
        assert!((spawn_delay(1) - 2.4).abs() < 1e-12);
        assert!((speed_multiplier(1) - 0.86).abs() < 1e-12);
        assert_eq!(money_reward(1), 9);
    }

    #[test]
    fn test_enemy_count_super_linear_terms() {
        assert_eq!(enemy_count(10), 50);
        // 10 + 44 + 1^1.5
        assert_eq!(enemy_count(11), 55);
        // 10 + 56 + 4^1.5 = 74
        assert_eq!(enemy_count(14), 74);
        // 10 + 84 + 11^1.5 (36.48) + 1^1.7 = 131.48
        assert_eq!(enemy_count(21), 131);
    }

    #[test]
    fn test_speed_and_delay_clamp() {
        assert!((speed_multiplier(100) - 2.5).abs() < 1e-12);
        assert!((spawn_delay(22) - 0.3).abs() < 1e-12);
        assert!((spawn_delay(50) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_health_multiplier_monotonic() {
        for w in 0..40 {
            assert!(health_multiplier(w + 1) > health_multiplier(w));
        }
    }

    #[test]
    fn test_type_pool_steps() {
        assert_eq!(available_types(1), vec![EnemyKind::Normal]);
        assert_eq!(available_types(2), vec![EnemyKind::Normal]);
        assert_eq!(available_types(3).len(), 2);
        assert!(available_types(5).contains(&EnemyKind::Tank));
        assert!(available_types(7).contains(&EnemyKind::Shielded));
        assert!(available_types(12).contains(&EnemyKind::Regen));
        assert!(!available_types(12).contains(&EnemyKind::Splitter));

        let late = available_types(13);
        let splitters = late.iter().filter(|k| **k == EnemyKind::Splitter).count();
        assert_eq!(splitters, 2, "splitter is double-weighted past wave 12");
    }

    #[test]
    fn test_category_priority() {
        assert_eq!(category(0), WaveCategory::Normal);
        assert_eq!(category(1), WaveCategory::Normal);
        assert_eq!(category(3), WaveCategory::Swarm);
        assert_eq!(category(5), WaveCategory::Boss);
        assert_eq!(category(10), WaveCategory::MegaBoss);
        // 15 is divisible by 3 and 5: boss wins
        assert_eq!(category(15), WaveCategory::Boss);
        // 30 is divisible by 3, 5 and 10: mega boss wins
        assert_eq!(category(30), WaveCategory::MegaBoss);
    }

    #[test]
    fn test_plan_category_adjustments() {
        let normal = WavePlan::for_wave(1);
        assert_eq!(normal.enemy_count, 14);

        let swarm = WavePlan::for_wave(3);
        assert_eq!(swarm.enemy_count, enemy_count(3) * 3);
        assert!((swarm.spawn_delay - 0.15).abs() < 1e-12);

        let boss = WavePlan::for_wave(5);
        assert_eq!(boss.enemy_count, enemy_count(5) / 2 + 1);
        assert!((boss.spawn_delay - spawn_delay(5) * 1.5).abs() < 1e-12);

        let mega = WavePlan::for_wave(20);
        assert_eq!(mega.enemy_count, 1);
    }

    #[test]
    fn test_forced_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let swarm = WavePlan::for_wave(6);
        let mega = WavePlan::for_wave(10);
        for _ in 0..20 {
            assert_eq!(swarm.draw_kind(&mut rng), EnemyKind::Swarm);
            assert_eq!(mega.draw_kind(&mut rng), EnemyKind::MegaBoss);
        }
    }

    #[test]
    fn test_boss_draw_mix() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let plan = WavePlan::for_wave(5);
        let tanks = (0..1000)
            .filter(|_| plan.draw_kind(&mut rng) == EnemyKind::Tank)
            .count();
        assert!(
            (600..800).contains(&tanks),
            "expected roughly 70% tanks, got {tanks}/1000"
        );
    }

    #[test]
    fn test_normal_draw_stays_in_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = WavePlan::for_wave(7);
        let pool = available_types(7);
        for _ in 0..200 {
            assert!(pool.contains(&plan.draw_kind(&mut rng)));
        }
    }

    #[test]
    fn test_category_modifiers() {
        assert_eq!(
            category_modifiers(WaveCategory::Boss, EnemyKind::Tank),
            (2.0, 1.0)
        );
        assert_eq!(
            category_modifiers(WaveCategory::Boss, EnemyKind::Normal),
            (1.5, 1.0)
        );
        assert_eq!(
            category_modifiers(WaveCategory::Swarm, EnemyKind::Swarm),
            (0.4, 1.3)
        );
        assert_eq!(
            category_modifiers(WaveCategory::MegaBoss, EnemyKind::MegaBoss),
            (1.0, 1.0)
        );
    }
}
