#[cfg(test)]
mod tests {
    use std::fs;

    use defender_core::enums::{AbilityKind, TurretClass};

    use crate::record::ProfileRecord;
    use crate::store::{read_record, JsonFileStore, MemoryStore, ProfileStore};
    use crate::unlocks::{refresh, Unlock};
    use crate::ProfileError;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("core_defender_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults() {
        let r = ProfileRecord::default();
        assert_eq!(r.high_score, 0);
        assert!(r.music_enabled);
        assert!(r.sfx_enabled);
        assert!(r.ability_unlocked(AbilityKind::Pierce));
        assert!(!r.ability_unlocked(AbilityKind::Pulse));
        assert!(!r.ability_unlocked(AbilityKind::Nuke));
        assert!(r.class_unlocked(TurretClass::Standard));
        assert!(!r.class_unlocked(TurretClass::Railgun));
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let r: ProfileRecord =
            serde_json::from_str(r#"{"high_score": 12, "music_enabled": false}"#).unwrap();
        assert_eq!(r.high_score, 12);
        assert!(!r.music_enabled);
        assert!(r.sfx_enabled, "missing fields take defaults");
        assert_eq!(r.total_games_played, 0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let r: ProfileRecord =
            serde_json::from_str(r#"{"high_score": 3, "future_field": [1, 2]}"#).unwrap();
        assert_eq!(r.high_score, 3);
    }

    #[test]
    fn test_game_over_bookkeeping() {
        let mut r = ProfileRecord::default();
        assert!(r.record_game_over(7));
        assert!(!r.record_game_over(5));
        assert_eq!(r.high_score, 7);
        assert_eq!(r.total_games_played, 2);
    }

    #[test]
    fn test_unlock_thresholds() {
        let mut r = ProfileRecord::default();
        assert!(refresh(&mut r).is_empty());

        r.observe_wave(10);
        r.record_mega_boss_defeated();
        r.total_enemies_killed = 499;
        r.total_waves_completed = 50;
        let gained = refresh(&mut r);
        assert!(gained.contains(&Unlock::Ability(AbilityKind::Pulse)));
        assert!(gained.contains(&Unlock::Ability(AbilityKind::Nuke)));
        assert!(gained.contains(&Unlock::Class(TurretClass::Railgun)));
        assert!(!r.unlocks.gatling);

        r.record_kill();
        assert_eq!(refresh(&mut r), vec![Unlock::Class(TurretClass::Gatling)]);
        assert!(refresh(&mut r).is_empty(), "unlocks are reported once");
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = temp_dir("round_trip");
        let mut store = JsonFileStore::in_dir(&dir);

        let mut record = ProfileRecord::default();
        record.high_score = 21;
        record.sfx_enabled = false;
        store.save(&record);

        let mut reopened = JsonFileStore::in_dir(&dir);
        assert_eq!(reopened.load(), record);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = temp_dir("missing");
        let mut store = JsonFileStore::in_dir(&dir);
        assert_eq!(store.load(), ProfileRecord::default());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let dir = temp_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let mut store = JsonFileStore::in_dir(&dir);
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            read_record(store.path()),
            Err(ProfileError::Parse(_))
        ));
        assert_eq!(store.load(), ProfileRecord::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_and_serialize_errors_are_distinct() {
        let source = || serde_json::from_str::<ProfileRecord>("{").unwrap_err();
        let parse = ProfileError::Parse(source()).to_string();
        let serialize = ProfileError::Serialize(source()).to_string();

        assert!(parse.starts_with("profile is not valid JSON"));
        assert!(serialize.starts_with("failed to serialize profile"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), ProfileRecord::default());

        let mut r = ProfileRecord::default();
        r.total_enemies_killed = 40;
        store.save(&r);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().total_enemies_killed, 40);
    }
}
