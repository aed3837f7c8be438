use chrono::{TimeZone, Utc};
use flakeid::{FlakeId, FlakeIdConfig};

fn main() {
    // Measure timestamps from a deployment-specific epoch and resolve the
    // machine id from the environment
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let config = FlakeIdConfig::builder()
        .epoch_datetime(epoch)
        .machine_id_resolver(machine_id_from_env)
        .build();

    let generator = FlakeId::with_config(config).unwrap();

    println!("Generator configuration:");
    println!("  Epoch: {} ({})", generator.epoch_millis(), epoch);
    println!("  Machine ID: {}", generator.machine_id());

    // Generate and analyze an ID
    let id = generator.next_id().unwrap();
    let payload = generator.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", payload.timestamp);
    println!("  Machine ID: {}", payload.machine_id);
    println!("  Sequence: {} (of 127 per millisecond)", payload.sequence);
}

fn machine_id_from_env() -> u8 {
    std::env::var("FLAKEID_MACHINE_ID")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
}
