use chrono::{DateTime, Utc};
use flakeid::FlakeId;

fn main() {
    // Create a generator with the default configuration (machine id 1)
    let generator = FlakeId::new().unwrap();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (monotonic per instance):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components through the codec directly
    let payload = flakeid::decode(id3);
    println!("\nComponents of ID 3:");
    println!("  Timestamp: {} ms since epoch", payload.timestamp);
    println!("  Machine ID: {}", payload.machine_id);
    println!("  Sequence: {}", payload.sequence);
}

fn print_id(id: u64, generator: &FlakeId) {
    let payload = generator.decompose(id);
    let unix_ms = payload.timestamp + generator.epoch_millis();
    let datetime = DateTime::<Utc>::from_timestamp_millis(unix_ms as i64).unwrap();

    println!(
        "  ID: {id}, Timestamp: {unix_ms}, Human date: {datetime}, Machine ID: {}, Sequence: {}",
        payload.machine_id, payload.sequence
    );
}
