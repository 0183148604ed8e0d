//! Integration tests for the `Hall` facade: creation flow and the
//! lifecycle/registry split.

use std::sync::Arc;
use std::thread;

use hallkeep::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

fn rn(n: u32) -> RoomNumber {
    RoomNumber(n)
}

fn student(id: &str) -> Occupant {
    Occupant::new(id, format!("Student {id}"))
}

// =========================================================================
// Creation
// =========================================================================

#[test]
fn test_create_room_registers_everywhere() {
    let hall = Hall::builder().build_default();

    let room = hall.create_room(rn(101)).unwrap();

    assert_eq!(room.category(), RoomCategory::Standard);
    assert_eq!(room.monthly_price(), MonthlyPrice::from_units(700));
    assert_eq!(hall.repository().find_by_number(rn(101)), Some(room.clone()));
    assert_eq!(hall.find_by_number(rn(101)), Some(room));
    assert_eq!(hall.directory().state_name(rn(101)), "VACANT");
}

#[test]
fn test_create_room_zero_registers_nothing() {
    let hall = Hall::builder().build_default();

    let result = hall.create_room(rn(0));

    assert!(matches!(
        result,
        Err(HallkeepError::Model(ModelError::InvalidRoomNumber(0)))
    ));
    assert!(hall.list_all().is_empty());
    assert!(hall.registry().is_empty());
    assert!(hall.directory().is_empty());
}

#[test]
fn test_superior_factory_and_configured_prices() {
    let config = CatalogConfig::from_json_str(r#"{ "superior_monthly_price": 100000 }"#).unwrap();
    let hall = Hall::builder()
        .catalog_config(config.clone())
        .build(SuperiorRoomFactory::new(config), InMemoryRoomRepository::new());

    let room = hall.create_room(rn(201)).unwrap();

    assert_eq!(room.category(), RoomCategory::Superior);
    assert_eq!(room.monthly_price(), MonthlyPrice::from_units(1_000));
}

#[test]
fn test_closure_factory() {
    let hall = Hall::builder().build(
        |n: RoomNumber| Room::new(n, RoomCategory::Superior, MonthlyPrice::from_cents(1)),
        InMemoryRoomRepository::new(),
    );
    let room = hall.create_room(rn(5)).unwrap();
    assert_eq!(room.monthly_price().to_string(), "0.01");
}

#[test]
fn test_create_custom_room_uses_category_default_unless_overridden() {
    let hall = Hall::builder().build_default();

    let superior = hall
        .create_custom_room(rn(301), RoomCategory::Superior, None)
        .unwrap();
    let discounted = hall
        .create_custom_room(rn(302), RoomCategory::Superior, Some(MonthlyPrice::from_units(900)))
        .unwrap();

    assert_eq!(superior.monthly_price(), MonthlyPrice::from_units(950));
    assert_eq!(discounted.monthly_price(), MonthlyPrice::from_units(900));
    assert_eq!(hall.directory().len(), 2);
}

#[test]
fn test_list_all_sorted_by_number() {
    let hall = Hall::builder().build_default();
    for n in [103, 101, 102] {
        hall.create_room(rn(n)).unwrap();
    }
    let numbers: Vec<_> = hall.list_all().iter().map(Room::number).collect();
    assert_eq!(numbers, vec![rn(101), rn(102), rn(103)]);
}

#[test]
fn test_recreating_room_resets_lifecycle() {
    let hall = Hall::builder().build_default();
    hall.create_room(rn(101)).unwrap();
    hall.directory().assign(rn(101), student("S1"));

    hall.create_room(rn(101)).unwrap();

    assert_eq!(hall.directory().state_name(rn(101)), "VACANT");
    assert_eq!(hall.list_all().len(), 1);
}

// =========================================================================
// Shared registry and independence of the two stores
// =========================================================================

#[test]
fn test_shared_registry_across_halls() {
    let registry = Arc::new(RoomRegistry::new());
    let east = Hall::builder().registry(Arc::clone(&registry)).build_default();
    let west = Hall::builder().registry(Arc::clone(&registry)).build_default();

    east.create_room(rn(1)).unwrap();
    west.create_room(rn(2)).unwrap();

    assert_eq!(registry.all_entries().numbers(), vec![rn(1), rn(2)]);
    // Lifecycles stay per hall.
    assert_eq!(east.directory().state_name(rn(2)), UNKNOWN_STATE);
    assert_eq!(west.directory().state_name(rn(1)), UNKNOWN_STATE);
}

#[test]
fn test_registry_only_room_has_no_lifecycle() {
    let hall = Hall::builder().build_default();
    let room = Room::new(rn(404), RoomCategory::Standard, MonthlyPrice::from_units(700)).unwrap();

    hall.registry().register(room);

    assert!(hall.find_by_number(rn(404)).is_some());
    assert_eq!(hall.directory().state_name(rn(404)), UNKNOWN_STATE);
    assert!(!hall.directory().assign(rn(404), student("S1")));
}

// =========================================================================
// Occupancy
// =========================================================================

#[test]
fn test_occupancy_after_mixed_operations() {
    let hall = Hall::builder().build_default();
    for n in 1..=4 {
        hall.create_room(rn(n)).unwrap();
    }
    let dir = hall.directory();
    dir.assign(rn(1), student("S1"));
    dir.request_maintenance(rn(2));
    dir.request_maintenance(rn(1)); // rejected: occupied

    let summary = hall.occupancy();

    assert_eq!(summary.occupied, 1);
    assert_eq!(summary.maintenance, 1);
    assert_eq!(summary.vacant, 2);
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "vacant": 2, "occupied": 1, "maintenance": 1 })
    );
}

#[test]
fn test_concurrent_room_creation() {
    const THREADS: u32 = 8;
    const PER_THREAD: u32 = 100;

    let hall = Hall::builder().build_default();
    thread::scope(|s| {
        for t in 0..THREADS {
            let hall = &hall;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    hall.create_room(rn(t * PER_THREAD + i + 1)).unwrap();
                }
            });
        }
    });

    let expected = (THREADS * PER_THREAD) as usize;
    assert_eq!(hall.list_all().len(), expected);
    assert_eq!(hall.registry().len(), expected);
    assert_eq!(hall.occupancy().vacant, expected);
}

#[test]
fn test_config_error_converts_into_hall_error() {
    fn load(json: &str) -> Result<CatalogConfig, HallkeepError> {
        Ok(CatalogConfig::from_json_str(json)?)
    }

    let err = load("[1, 2").unwrap_err();
    assert!(matches!(err, HallkeepError::Catalog(CatalogError::InvalidConfig(_))));
}
