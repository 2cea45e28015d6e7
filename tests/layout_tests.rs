//! Integration tests for the key layout table.

use std::collections::HashSet;

use akira_rgb::layout::{AKIRA_KEY_COUNT, AKIRA_KEYS, MAX_KEYS, MAX_SLOT};
use akira_rgb::{Coordinate, KeyLayoutEntry, LayoutError, LayoutTable};

// -----------------------------------------------------------------------------
// Akira hardware table
// -----------------------------------------------------------------------------

#[test]
fn akira_table_builds() {
    let table = LayoutTable::akira().expect("hardware layout must be valid");

    assert_eq!(table.len(), AKIRA_KEY_COUNT);
    assert_eq!(table.max_slot(), 89);
    assert_eq!(table.buffer_len(), 270);
    assert_eq!(table.packet_len(), 278);
}

#[test]
fn akira_coordinates_lie_in_canvas() {
    for key in &AKIRA_KEYS {
        assert!(key.coordinate.x < 15, "{} x out of canvas", key.name);
        assert!(key.coordinate.y < 6, "{} y out of canvas", key.name);
    }
}

#[test]
fn akira_names_coordinates_and_slots_are_unique() {
    let names: HashSet<_> = AKIRA_KEYS.iter().map(|k| k.name).collect();
    let coordinates: HashSet<_> = AKIRA_KEYS.iter().map(|k| k.coordinate).collect();
    let slots: HashSet<_> = AKIRA_KEYS.iter().map(|k| k.slot).collect();

    assert_eq!(names.len(), AKIRA_KEY_COUNT);
    assert_eq!(coordinates.len(), AKIRA_KEY_COUNT);
    assert_eq!(slots.len(), AKIRA_KEY_COUNT);
}

#[test]
fn iteration_is_in_slot_order() {
    let table = LayoutTable::akira().unwrap();
    let slots: Vec<u8> = table.iter().map(|e| e.slot).collect();

    let mut sorted = slots.clone();
    sorted.sort_unstable();
    assert_eq!(slots, sorted);
    assert_eq!(table.entries().first().unwrap().name, "Esc");
    assert_eq!(table.entries().last().unwrap().name, "Right Arrow");
}

#[test]
fn lookup_maps_slot_to_coordinate() {
    let table = LayoutTable::akira().unwrap();

    assert_eq!(table.lookup(0), Some(Coordinate::new(0, 0)));
    assert_eq!(table.lookup(85), Some(Coordinate::new(14, 1)));
    assert_eq!(table.lookup(35), Some(Coordinate::new(5, 5)));
    // Unpopulated matrix positions.
    assert_eq!(table.lookup(6), None);
    assert_eq!(table.lookup(84), None);
    assert_eq!(table.lookup(90), None);
}

#[test]
fn find_by_name() {
    let table = LayoutTable::akira().unwrap();

    let space = table.find("Space").unwrap();
    assert_eq!(space.coordinate, Coordinate::new(5, 5));
    assert_eq!(space.slot, 35);
    assert_eq!(table.find("\\").unwrap().slot, 80);
    assert!(table.find("Numpad 5").is_none());
}

#[test]
fn led_names_and_positions_stay_aligned() {
    let table = LayoutTable::akira().unwrap();
    let names: Vec<_> = table.led_names().collect();
    let positions: Vec<_> = table.led_positions().collect();

    assert_eq!(names.len(), positions.len());
    for (name, (x, y)) in names.iter().zip(&positions) {
        let entry = table.find(name).unwrap();
        assert_eq!(entry.coordinate, Coordinate::new(*x, *y));
    }
}

// -----------------------------------------------------------------------------
// Construction failures
// -----------------------------------------------------------------------------

#[test]
fn empty_table_is_rejected() {
    assert_eq!(LayoutTable::new(&[]).unwrap_err(), LayoutError::Empty);
}

#[test]
fn duplicate_slot_is_rejected() {
    let entries = [
        KeyLayoutEntry::new("A", 0, 0, 3),
        KeyLayoutEntry::new("B", 1, 0, 3),
    ];

    assert!(matches!(
        LayoutTable::new(&entries),
        Err(LayoutError::DuplicateSlot { slot: 3, .. })
    ));
}

#[test]
fn duplicate_coordinate_is_rejected() {
    let entries = [
        KeyLayoutEntry::new("A", 4, 2, 0),
        KeyLayoutEntry::new("B", 4, 2, 1),
    ];

    assert_eq!(
        LayoutTable::new(&entries).unwrap_err(),
        LayoutError::DuplicateCoordinate {
            name: "B",
            coordinate: Coordinate::new(4, 2),
        }
    );
}

#[test]
fn duplicate_name_is_rejected() {
    let entries = [
        KeyLayoutEntry::new("Fn", 0, 0, 0),
        KeyLayoutEntry::new("Fn", 1, 0, 1),
    ];

    assert_eq!(
        LayoutTable::new(&entries).unwrap_err(),
        LayoutError::DuplicateName("Fn")
    );
}

#[test]
fn coordinate_outside_canvas_is_rejected() {
    let entries = [KeyLayoutEntry::new("Wide", 15, 0, 0)];
    assert!(matches!(
        LayoutTable::new(&entries),
        Err(LayoutError::OutOfCanvas { name: "Wide", .. })
    ));

    let entries = [KeyLayoutEntry::new("Tall", 0, 6, 0)];
    assert!(matches!(
        LayoutTable::new(&entries),
        Err(LayoutError::OutOfCanvas { name: "Tall", .. })
    ));
}

#[test]
fn slot_beyond_report_is_rejected() {
    let entries = [KeyLayoutEntry::new("Far", 0, 0, MAX_SLOT + 1)];

    assert_eq!(
        LayoutTable::new(&entries).unwrap_err(),
        LayoutError::SlotOutOfRange {
            name: "Far",
            slot: MAX_SLOT + 1,
        }
    );
}

#[test]
fn highest_slot_still_fits() {
    let entries = [KeyLayoutEntry::new("Last", 0, 0, MAX_SLOT)];
    let table = LayoutTable::new(&entries).unwrap();

    assert_eq!(table.packet_len(), 8 + 3 * MAX_KEYS);
    assert!(table.packet_len() <= 520);
}

// -----------------------------------------------------------------------------
// Parallel sequences
// -----------------------------------------------------------------------------

#[test]
fn parallel_sequences_build_a_table() {
    let table = LayoutTable::from_parallel(&["Esc", "F1"], &[(0, 0), (2, 0)], &[0, 12]).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup(12), Some(Coordinate::new(2, 0)));
}

#[test]
fn misaligned_sequences_are_rejected() {
    let err = LayoutTable::from_parallel(&["Esc", "F1", "F2"], &[(0, 0), (2, 0)], &[0, 12, 18])
        .unwrap_err();

    assert_eq!(
        err,
        LayoutError::LengthMismatch {
            names: 3,
            positions: 2,
            slots: 3,
        }
    );
}

#[test]
fn layout_error_messages_name_the_key() {
    let err = LayoutError::DuplicateSlot {
        name: "Enter",
        slot: 81,
    };
    assert_eq!(err.to_string(), "key \"Enter\" reuses slot 81");
}
