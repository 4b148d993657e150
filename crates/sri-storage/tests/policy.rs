use jiff::Timestamp;
use sri_core::keys::STORAGE_KEY;
use sri_core::models::demographics::Demographics;
use sri_core::models::session::{AssessmentSession, AssessmentType};
use sri_core::models::storage::StorageData;
use sri_storage::backend::MemoryStore;
use sri_storage::error::StorageError;
use sri_storage::policy::EvictionPolicy;
use sri_storage::repository::{JsonRepository, SessionRepository};

fn data_with(count: i64) -> StorageData {
    let demographics = Demographics {
        age: "1".to_string(),
        gender: "2".to_string(),
        relationship_status: "1".to_string(),
        sexual_activity: "2".to_string(),
        religious_cultural: None,
        consent_to_participate: true,
    };
    let sessions = (0..count)
        .map(|i| {
            AssessmentSession::start(
                format!("session_{i:03}"),
                AssessmentType::Quick,
                demographics.clone(),
                Timestamp::from_second(1_700_000_000 + i * 60).unwrap(),
            )
            .unwrap()
        })
        .collect();
    StorageData {
        sessions,
        ..StorageData::default()
    }
}

#[test]
fn oversized_root_keeps_twenty_newest() {
    let kv = MemoryStore::new();
    let policy = EvictionPolicy::new(JsonRepository::new(&kv)).with_max_bytes(1);

    policy.save(&data_with(25)).unwrap();

    let mut loaded = policy.load().unwrap();
    loaded.sort_newest_first();
    assert_eq!(loaded.sessions.len(), 20);
    assert_eq!(loaded.sessions[0].id, "session_024");
    assert_eq!(loaded.sessions[19].id, "session_005");
}

#[test]
fn small_root_is_saved_untouched() {
    let kv = MemoryStore::new();
    let policy = EvictionPolicy::new(JsonRepository::new(&kv));
    let data = data_with(30);
    policy.save(&data).unwrap();
    assert_eq!(policy.load().unwrap(), data);
}

#[test]
fn quota_failure_trims_to_ten_and_retries() {
    let data = data_with(30);
    let mut ten = data.clone();
    ten.retain_most_recent(10);
    let needed = STORAGE_KEY.len() + serde_json::to_string(&ten).unwrap().len();

    let kv = MemoryStore::with_quota(needed);
    let policy = EvictionPolicy::new(JsonRepository::new(&kv));
    policy.save(&data).unwrap();

    let loaded = policy.load().unwrap();
    assert_eq!(loaded, ten);
    assert_eq!(kv.used_bytes(), needed);
}

#[test]
fn second_quota_failure_cannot_persist() {
    let kv = MemoryStore::with_quota(10);
    let policy = EvictionPolicy::new(JsonRepository::new(&kv));
    let err = policy.save(&data_with(3)).unwrap_err();
    assert!(matches!(err, StorageError::CannotPersist(_)));
}

#[test]
fn quota_error_surfaces_without_policy() {
    let kv = MemoryStore::with_quota(10);
    let err = JsonRepository::new(&kv).save(&data_with(1)).unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
}

#[test]
fn lifting_the_quota_allows_full_saves() {
    let kv = MemoryStore::with_quota(10);
    kv.set_quota(None);
    let policy = EvictionPolicy::new(JsonRepository::new(&kv));
    policy.save(&data_with(12)).unwrap();
    assert_eq!(policy.load().unwrap().sessions.len(), 12);
}
