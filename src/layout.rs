//! Key layout table
//!
//! Reconciles the three coordinate systems of the keyboard:
//! - key name, as shown to the user
//! - canvas coordinate, where the color is sampled
//! - slot, the index of the key in the device LED buffer
//!
//! Slots are not contiguous. Gaps are LED positions the hardware does not
//! populate; their bytes stay zero in every report.

use core::fmt;

use heapless::Vec;

use crate::config::{CANVAS, REPORT};

/// Highest slot whose color still fits in one report
pub const MAX_SLOT: u8 = ((REPORT.length - REPORT.header.len()) / 3 - 1) as u8;

/// Upper bound on keys in a table, one per addressable slot
pub const MAX_KEYS: usize = MAX_SLOT as usize + 1;

/// Position of a key on the canvas grid, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check the coordinate lies inside the device canvas
    pub const fn in_canvas(self) -> bool {
        self.x < CANVAS.width && self.y < CANVAS.height
    }
}

impl From<(u8, u8)> for Coordinate {
    fn from((x, y): (u8, u8)) -> Self {
        Self { x, y }
    }
}

/// One physically controllable key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLayoutEntry {
    pub name: &'static str,
    pub coordinate: Coordinate,
    pub slot: u8,
}

impl KeyLayoutEntry {
    pub const fn new(name: &'static str, x: u8, y: u8, slot: u8) -> Self {
        Self {
            name,
            coordinate: Coordinate::new(x, y),
            slot,
        }
    }
}

/// Layout table construction failure
///
/// Any of these is a defect in the layout data, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Table has no entries
    Empty,
    /// More entries than addressable slots
    TooManyKeys(usize),
    /// Names, positions and slots differ in length
    LengthMismatch {
        names: usize,
        positions: usize,
        slots: usize,
    },
    /// Coordinate outside the canvas
    OutOfCanvas {
        name: &'static str,
        coordinate: Coordinate,
    },
    /// Slot beyond what fits in one report
    SlotOutOfRange { name: &'static str, slot: u8 },
    DuplicateName(&'static str),
    DuplicateCoordinate {
        name: &'static str,
        coordinate: Coordinate,
    },
    DuplicateSlot { name: &'static str, slot: u8 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout table is empty"),
            LayoutError::TooManyKeys(count) => {
                write!(f, "{} keys exceed the {} addressable slots", count, MAX_KEYS)
            }
            LayoutError::LengthMismatch {
                names,
                positions,
                slots,
            } => write!(
                f,
                "misaligned layout: {} names, {} positions, {} slots",
                names, positions, slots
            ),
            LayoutError::OutOfCanvas { name, coordinate } => write!(
                f,
                "key {:?} at ({}, {}) lies outside the {}x{} canvas",
                name, coordinate.x, coordinate.y, CANVAS.width, CANVAS.height
            ),
            LayoutError::SlotOutOfRange { name, slot } => {
                write!(f, "key {:?} uses slot {} above {}", name, slot, MAX_SLOT)
            }
            LayoutError::DuplicateName(name) => write!(f, "duplicate key name {:?}", name),
            LayoutError::DuplicateCoordinate { name, coordinate } => write!(
                f,
                "key {:?} reuses coordinate ({}, {})",
                name, coordinate.x, coordinate.y
            ),
            LayoutError::DuplicateSlot { name, slot } => {
                write!(f, "key {:?} reuses slot {}", name, slot)
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// Validated, slot-ordered key layout
///
/// Built once at plugin load and never mutated.
#[derive(Debug, Clone)]
pub struct LayoutTable {
    /// Sorted by slot
    entries: Vec<KeyLayoutEntry, MAX_KEYS>,
}

impl LayoutTable {
    /// Build a table from entries, checking bounds and uniqueness
    pub fn new(entries: &[KeyLayoutEntry]) -> Result<Self, LayoutError> {
        if entries.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut sorted: Vec<KeyLayoutEntry, MAX_KEYS> =
            Vec::from_slice(entries).map_err(|()| LayoutError::TooManyKeys(entries.len()))?;

        for (i, entry) in sorted.iter().enumerate() {
            if !entry.coordinate.in_canvas() {
                return Err(LayoutError::OutOfCanvas {
                    name: entry.name,
                    coordinate: entry.coordinate,
                });
            }
            if entry.slot > MAX_SLOT {
                return Err(LayoutError::SlotOutOfRange {
                    name: entry.name,
                    slot: entry.slot,
                });
            }
            for earlier in &sorted[..i] {
                if earlier.name == entry.name {
                    return Err(LayoutError::DuplicateName(entry.name));
                }
                if earlier.coordinate == entry.coordinate {
                    return Err(LayoutError::DuplicateCoordinate {
                        name: entry.name,
                        coordinate: entry.coordinate,
                    });
                }
            }
        }

        sorted.sort_unstable_by_key(|entry| entry.slot);
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0].slot == pair[1].slot) {
            return Err(LayoutError::DuplicateSlot {
                name: pair[1].name,
                slot: pair[1].slot,
            });
        }

        Ok(Self { entries: sorted })
    }

    /// Build a table from three index-aligned sequences
    ///
    /// The sequences must have the same length; alignment is checked, not assumed.
    pub fn from_parallel(
        names: &[&'static str],
        positions: &[(u8, u8)],
        slots: &[u8],
    ) -> Result<Self, LayoutError> {
        if names.len() != positions.len() || names.len() != slots.len() {
            return Err(LayoutError::LengthMismatch {
                names: names.len(),
                positions: positions.len(),
                slots: slots.len(),
            });
        }
        let mut entries: Vec<KeyLayoutEntry, MAX_KEYS> = Vec::new();
        for ((&name, &(x, y)), &slot) in names.iter().zip(positions).zip(slots) {
            entries
                .push(KeyLayoutEntry::new(name, x, y, slot))
                .map_err(|_| LayoutError::TooManyKeys(names.len()))?;
        }
        Self::new(&entries)
    }

    /// The Akira hardware layout
    pub fn akira() -> Result<Self, LayoutError> {
        Self::new(&AKIRA_KEYS)
    }

    /// Canvas coordinate driving the given slot
    pub fn lookup(&self, slot: u8) -> Option<Coordinate> {
        self.entries
            .binary_search_by_key(&slot, |entry| entry.slot)
            .ok()
            .map(|i| self.entries[i].coordinate)
    }

    /// Entry for a key name
    pub fn find(&self, name: &str) -> Option<&KeyLayoutEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Entries in slot order
    pub fn iter(&self) -> core::slice::Iter<'_, KeyLayoutEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[KeyLayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest slot in use
    pub fn max_slot(&self) -> u8 {
        // Construction rejects empty tables.
        self.entries.last().map_or(0, |entry| entry.slot)
    }

    /// Size of the RGB buffer, three bytes per slot up to the highest one
    pub fn buffer_len(&self) -> usize {
        3 * (usize::from(self.max_slot()) + 1)
    }

    /// Size of the packet: header followed by the RGB buffer
    pub fn packet_len(&self) -> usize {
        REPORT.header.len() + self.buffer_len()
    }

    /// Key names, index-aligned with [`Self::led_positions`]
    pub fn led_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Key coordinates as `(x, y)`, index-aligned with [`Self::led_names`]
    pub fn led_positions(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.coordinate.x, entry.coordinate.y))
    }
}

impl<'a> IntoIterator for &'a LayoutTable {
    type Item = &'a KeyLayoutEntry;
    type IntoIter = core::slice::Iter<'a, KeyLayoutEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Number of controllable keys on the Akira
pub const AKIRA_KEY_COUNT: usize = 81;

/// Akira keys in row order
///
/// Slots follow the controller's column-major LED buffer: six slots per
/// matrix column, one per row.
pub static AKIRA_KEYS: [KeyLayoutEntry; AKIRA_KEY_COUNT] = [
    // Function row
    KeyLayoutEntry::new("Esc", 0, 0, 0),
    KeyLayoutEntry::new("F1", 2, 0, 12),
    KeyLayoutEntry::new("F2", 3, 0, 18),
    KeyLayoutEntry::new("F3", 4, 0, 24),
    KeyLayoutEntry::new("F4", 5, 0, 30),
    KeyLayoutEntry::new("F5", 6, 0, 36),
    KeyLayoutEntry::new("F6", 7, 0, 42),
    KeyLayoutEntry::new("F7", 8, 0, 48),
    KeyLayoutEntry::new("F8", 9, 0, 54),
    KeyLayoutEntry::new("F9", 10, 0, 60),
    KeyLayoutEntry::new("F10", 11, 0, 66),
    KeyLayoutEntry::new("F11", 12, 0, 72),
    KeyLayoutEntry::new("F12", 13, 0, 78),
    // Number row
    KeyLayoutEntry::new("`", 0, 1, 1),
    KeyLayoutEntry::new("1", 1, 1, 7),
    KeyLayoutEntry::new("2", 2, 1, 13),
    KeyLayoutEntry::new("3", 3, 1, 19),
    KeyLayoutEntry::new("4", 4, 1, 25),
    KeyLayoutEntry::new("5", 5, 1, 31),
    KeyLayoutEntry::new("6", 6, 1, 37),
    KeyLayoutEntry::new("7", 7, 1, 43),
    KeyLayoutEntry::new("8", 8, 1, 49),
    KeyLayoutEntry::new("9", 9, 1, 55),
    KeyLayoutEntry::new("0", 10, 1, 61),
    KeyLayoutEntry::new("-_", 11, 1, 67),
    KeyLayoutEntry::new("=+", 12, 1, 73),
    KeyLayoutEntry::new("Backspace", 13, 1, 79),
    KeyLayoutEntry::new("Del", 14, 1, 85),
    // Top alpha row
    KeyLayoutEntry::new("Tab", 0, 2, 2),
    KeyLayoutEntry::new("Q", 1, 2, 8),
    KeyLayoutEntry::new("W", 2, 2, 14),
    KeyLayoutEntry::new("E", 3, 2, 20),
    KeyLayoutEntry::new("R", 4, 2, 26),
    KeyLayoutEntry::new("T", 5, 2, 32),
    KeyLayoutEntry::new("Y", 6, 2, 38),
    KeyLayoutEntry::new("U", 7, 2, 44),
    KeyLayoutEntry::new("I", 8, 2, 50),
    KeyLayoutEntry::new("O", 9, 2, 56),
    KeyLayoutEntry::new("P", 10, 2, 62),
    KeyLayoutEntry::new("[", 11, 2, 68),
    KeyLayoutEntry::new("]", 12, 2, 74),
    KeyLayoutEntry::new("\\", 13, 2, 80),
    KeyLayoutEntry::new("Page Up", 14, 2, 86),
    // Home row
    KeyLayoutEntry::new("CapsLock", 0, 3, 3),
    KeyLayoutEntry::new("A", 1, 3, 9),
    KeyLayoutEntry::new("S", 2, 3, 15),
    KeyLayoutEntry::new("D", 3, 3, 21),
    KeyLayoutEntry::new("F", 4, 3, 27),
    KeyLayoutEntry::new("G", 5, 3, 33),
    KeyLayoutEntry::new("H", 6, 3, 39),
    KeyLayoutEntry::new("J", 7, 3, 45),
    KeyLayoutEntry::new("K", 8, 3, 51),
    KeyLayoutEntry::new("L", 9, 3, 57),
    KeyLayoutEntry::new(";", 10, 3, 63),
    KeyLayoutEntry::new("'", 11, 3, 69),
    KeyLayoutEntry::new("Enter", 13, 3, 81),
    KeyLayoutEntry::new("Page Down", 14, 3, 87),
    // Bottom alpha row
    KeyLayoutEntry::new("Left Shift", 0, 4, 4),
    KeyLayoutEntry::new("Z", 2, 4, 10),
    KeyLayoutEntry::new("X", 3, 4, 16),
    KeyLayoutEntry::new("C", 4, 4, 22),
    KeyLayoutEntry::new("V", 5, 4, 28),
    KeyLayoutEntry::new("B", 6, 4, 34),
    KeyLayoutEntry::new("N", 7, 4, 40),
    KeyLayoutEntry::new("M", 8, 4, 46),
    KeyLayoutEntry::new(",", 9, 4, 52),
    KeyLayoutEntry::new(".", 10, 4, 58),
    KeyLayoutEntry::new("/", 11, 4, 64),
    KeyLayoutEntry::new("Right Shift", 12, 4, 70),
    KeyLayoutEntry::new("Up Arrow", 13, 4, 82),
    KeyLayoutEntry::new("End", 14, 4, 88),
    // Modifier row
    KeyLayoutEntry::new("Left Ctrl", 0, 5, 5),
    KeyLayoutEntry::new("Left Win", 1, 5, 11),
    KeyLayoutEntry::new("Left Alt", 2, 5, 17),
    KeyLayoutEntry::new("Space", 5, 5, 35),
    KeyLayoutEntry::new("Right Alt", 8, 5, 53),
    KeyLayoutEntry::new("Fn", 9, 5, 59),
    KeyLayoutEntry::new("Right Ctrl", 10, 5, 65),
    KeyLayoutEntry::new("Left Arrow", 12, 5, 77),
    KeyLayoutEntry::new("Down Arrow", 13, 5, 83),
    KeyLayoutEntry::new("Right Arrow", 14, 5, 89),
];
