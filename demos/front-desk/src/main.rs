use std::sync::Arc;

use hallkeep::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

type DefaultHall = Hall<StandardRoomFactory, InMemoryRoomRepository>;

// ---------------------------------------------------------------------------
// Front-desk walkthrough
// ---------------------------------------------------------------------------

/// Takes room 101 through a full occupancy cycle and returns every
/// transition the front desk was told about.
fn walk_through(hall: &DefaultHall) -> Result<Vec<String>, HallkeepError> {
    let number = RoomNumber(101);
    hall.create_room(number)?;

    let seen = Arc::new(Mutex::new(Vec::new()));
    if let Some(ctx) = hall.directory().lookup(number) {
        let sink = Arc::clone(&seen);
        ctx.add_listener(move |t| {
            tracing::info!(room = %t.room, transition = %t, "front desk notified");
            sink.lock().push(t.to_string());
        });
    }

    let dir = hall.directory();
    let ada = Occupant::new("S1", "Ada Lovelace").with_contact("ada@example.com");

    let steps = [
        ("assign S1", dir.assign(number, ada)),
        ("request maintenance", dir.request_maintenance(number)),
        ("vacate", dir.vacate(number)),
        ("request maintenance", dir.request_maintenance(number)),
        ("complete maintenance", dir.complete_maintenance(number)),
    ];
    for (step, accepted) in steps {
        tracing::info!(room = %number, step, accepted, "front desk request");
    }
    tracing::info!(room = %number, state = dir.state_name(number), "walkthrough state");

    let transitions = seen.lock().clone();
    Ok(transitions)
}

/// Creates `per_floor` rooms on each floor in parallel.
async fn fill_floors(
    hall: &Arc<DefaultHall>,
    floors: std::ops::RangeInclusive<u32>,
    per_floor: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tasks = Vec::new();
    for floor in floors {
        let hall = Arc::clone(hall);
        tasks.push(tokio::task::spawn_blocking(move || {
            for i in 1..=per_floor {
                hall.create_room(RoomNumber(floor * 100 + i))?;
            }
            Ok::<_, HallkeepError>(())
        }));
    }
    for task in tasks {
        task.await??;
    }
    Ok(())
}

/// Assigns a guest to each room and returns how many assignments were
/// accepted.
fn seat_guests(hall: &DefaultHall, numbers: &[RoomNumber]) -> usize {
    let mut seated = 0;
    for &number in numbers {
        let accepted = hall
            .directory()
            .assign(number, Occupant::new(format!("S{number}"), "Guest"));
        tracing::info!(room = %number, step = "assign guest", accepted, "front desk request");
        seated += usize::from(accepted);
    }
    seated
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => CatalogConfig::default(),
    };

    let registry = Arc::new(RoomRegistry::new());
    let hall = Arc::new(
        Hall::builder()
            .catalog_config(config)
            .registry(Arc::clone(&registry))
            .build_default(),
    );

    let transitions = walk_through(&hall)?;
    tracing::info!(count = transitions.len(), "walkthrough finished");

    hall.create_custom_room(RoomNumber(201), RoomCategory::Superior, None)?;
    fill_floors(&hall, 3..=6, 20).await?;

    let seated = seat_guests(&hall, &[RoomNumber(305), RoomNumber(410)]);
    tracing::info!(seated, "guests seated");
    let accepted = hall.directory().request_maintenance(RoomNumber(620));
    tracing::info!(room = 620, accepted, "front desk request");

    tracing::info!(rooms = registry.len(), "registry populated");
    println!("{}", serde_json::to_string_pretty(&hall.occupancy())?);
    Ok(())
}
