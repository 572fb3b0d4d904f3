#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime};

    #[test]
    fn test_enemy_kind_serde_names() {
        let json = serde_json::to_string(&EnemyKind::MegaBossMedium).unwrap();
        assert_eq!(json, "\"mega_boss_medium\"");
        for kind in [
            EnemyKind::Normal,
            EnemyKind::Fast,
            EnemyKind::Tank,
            EnemyKind::Swarm,
            EnemyKind::Shielded,
            EnemyKind::Regen,
            EnemyKind::Splitter,
            EnemyKind::MegaBoss,
            EnemyKind::MegaBossMedium,
            EnemyKind::MegaBossSmall,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_mega_tiers() {
        assert!(EnemyKind::MegaBoss.is_mega());
        assert!(EnemyKind::MegaBossMedium.is_mega());
        assert!(EnemyKind::MegaBossSmall.is_mega());
        assert!(!EnemyKind::Tank.is_mega());
        assert_eq!(EnemyKind::MegaBossSmall.as_str(), "megaboss_small");
    }

    #[test]
    fn test_command_tagged_json() {
        let cmd = PlayerCommand::PurchaseUpgrade {
            upgrade: UpgradeKind::FireRate,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"PurchaseUpgrade\""), "got {json}");
        assert!(json.contains("\"fire_rate\""), "got {json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);

        let restart: PlayerCommand =
            serde_json::from_str(r#"{"type":"RestartRun","class":"railgun"}"#).unwrap();
        assert_eq!(
            restart,
            PlayerCommand::RestartRun {
                class: TurretClass::Railgun
            }
        );
    }

    #[test]
    fn test_music_is_not_sfx() {
        assert!(!AudioEvent::MusicBar { bar: 3 }.is_sfx());
        assert!(AudioEvent::Shoot.is_sfx());
        assert!(AudioEvent::LifeLost { lives_remaining: 1 }.is_sfx());
    }

    #[test]
    fn test_ability_groups() {
        assert_eq!(AbilityKind::ALL.len(), 5);
        assert!(AbilityKind::TIMED.iter().all(|a| a.is_timed()));
        assert!(!AbilityKind::Nuke.is_timed());
    }

    #[test]
    fn test_wave_label_suffix() {
        assert_eq!(WaveCategory::Normal.label_suffix(), None);
        assert_eq!(WaveCategory::MegaBoss.label_suffix(), Some("MEGA BOSS"));
    }

    #[test]
    fn test_position_math() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);

        let dir = a.direction_to(&b);
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);

        // Coincident points give a zero direction instead of NaN
        let zero = a.direction_to(&a);
        assert_eq!(zero.x, 0.0);
        assert_eq!(zero.y, 0.0);

        let mut p = Position::new(10.0, 0.0);
        p.step_toward(&Position::ORIGIN, 4.0);
        assert!((p.x - 6.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_on_circle() {
        let p = Position::on_circle(Position::ORIGIN, 280.0, std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_tracks_both_clocks() {
        let mut t = SimTime::default();
        t.advance(0.05, 0.025);
        t.advance(0.0, 0.025);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.05).abs() < 1e-12);
        assert!((t.real_secs - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Active);
        assert!(back.enemies.is_empty());
    }
}
