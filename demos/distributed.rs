use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use flakeid::{FixedMachineId, FlakeId, FlakeIdConfig};

fn main() {
    // One generator per simulated machine; machine ids keep their id
    // spaces disjoint without any cross-instance coordination
    let mut handles = vec![];

    for machine_id in 1..=4u8 {
        let config = FlakeIdConfig::builder()
            .machine_id_resolver(FixedMachineId(machine_id))
            .build();
        let generator = Arc::new(FlakeId::with_config(config).unwrap());

        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_id().unwrap();
                let payload = generator.decompose(id);

                println!(
                    "Machine {} generated ID {} (ts={}, machine={}, seq={})",
                    machine_id, i, payload.timestamp, payload.machine_id, payload.sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    // Collect all generated IDs
    let mut all_ids = HashSet::new();
    for handle in handles {
        let machine_ids = handle.join().unwrap();
        all_ids.extend(machine_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs must be unique across machines");
}
