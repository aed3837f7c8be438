//! Sequential generation tests

use crate::tests::test_utils::{
    assert_strictly_increasing, assert_timestamps_non_decreasing, assert_unique_ids,
};
use crate::{codec, FlakeId, FlakeIdConfig};

const NUMBER_IDS_GENERATED: usize = 10_000;

#[test]
fn test_sequential_generation_without_duplicates() {
    let generator = FlakeId::new().unwrap();

    let ids: Vec<u64> = (0..NUMBER_IDS_GENERATED)
        .map(|_| generator.next_id().unwrap())
        .collect();

    assert_unique_ids(&ids, NUMBER_IDS_GENERATED);
    assert_strictly_increasing(&ids);
    assert_timestamps_non_decreasing(&ids);
}

#[test]
fn test_generated_ids_carry_machine_id() {
    let config = FlakeIdConfig::builder()
        .machine_id_resolver(|| 11)
        .build();
    let generator = FlakeId::with_config(config).unwrap();

    for _ in 0..100 {
        let id = generator.next_id().unwrap();
        assert_eq!(codec::machine_id(id), 11);
    }
}

#[test]
fn test_decompose_matches_codec() {
    let generator = FlakeId::new().unwrap();
    let id = generator.next_id().unwrap();

    let payload = generator.decompose(id);
    assert_eq!(payload, codec::decode(id));
    assert_eq!(payload.machine_id, generator.machine_id());
}

#[test]
fn test_timestamp_tracks_wall_clock() {
    let generator = FlakeId::new().unwrap();
    let id = generator.next_id().unwrap();
    let payload = generator.decompose(id);

    // The decoded offset plus the epoch lands at the current wall time,
    // give or take scheduling slack.
    let now_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;
    let id_unix_ms = payload.timestamp + generator.epoch_millis();
    assert!(id_unix_ms <= now_ms + 1);
    assert!(now_ms - id_unix_ms.min(now_ms) < 5_000);
}

#[test]
fn test_instances_with_distinct_machine_ids_never_collide() {
    let gen_a = FlakeId::with_config(
        FlakeIdConfig::builder().machine_id_resolver(|| 1).build(),
    )
    .unwrap();
    let gen_b = FlakeId::with_config(
        FlakeIdConfig::builder().machine_id_resolver(|| 2).build(),
    )
    .unwrap();

    let mut ids = Vec::with_capacity(2_000);
    for _ in 0..1_000 {
        ids.push(gen_a.next_id().unwrap());
        ids.push(gen_b.next_id().unwrap());
    }
    assert_unique_ids(&ids, 2_000);
}
