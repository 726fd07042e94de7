//! Static room catalog and search filters.
//!
//! Rooms are reference data: the catalog is built once at startup and never
//! mutated. Occupancy is derived elsewhere from reservation state.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Room ids are short opaque strings from the static catalog.
pub type RoomId = String;

/// Buildings offered by the filter screen.
pub const BUILDINGS: &[&str] = &[
    "Science Hall",
    "Main Library",
    "Engineering Wing",
    "Arts Complex",
    "Student Union",
];

/// A bookable classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_number: String,
    pub building: String,
    pub capacity: u32,
    /// Human-readable availability marker, e.g. `"4:00 PM"`.
    pub available_until: String,
    pub amenities: Vec<String>,
    pub image_url: String,
}

/// Transient, session-scoped search criteria.
///
/// `time_slot` is carried for display but is not a filter predicate;
/// matching considers building and capacity only.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchFilters {
    /// Empty string means "any building".
    #[serde(default)]
    pub building: String,
    #[serde(default = "default_time_slot")]
    pub time_slot: String,
    #[serde(default = "default_min_capacity")]
    pub min_capacity: u32,
}

fn default_time_slot() -> String {
    "Now".to_string()
}

fn default_min_capacity() -> u32 {
    1
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            building: String::new(),
            time_slot: default_time_slot(),
            min_capacity: default_min_capacity(),
        }
    }
}

/// The in-memory room list.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    /// The standard campus catalog.
    pub fn builtin() -> Self {
        fn room(
            id: &str,
            room_number: &str,
            building: &str,
            capacity: u32,
            available_until: &str,
            amenities: &[&str],
        ) -> Room {
            Room {
                id: id.to_string(),
                room_number: room_number.to_string(),
                building: building.to_string(),
                capacity,
                available_until: available_until.to_string(),
                amenities: amenities.iter().map(|a| a.to_string()).collect(),
                image_url: format!("https://picsum.photos/seed/room{id}/800/400"),
            }
        }

        Self {
            rooms: vec![
                room(
                    "1",
                    "304",
                    "Science Hall",
                    25,
                    "4:00 PM",
                    &["Whiteboard", "Power Outlets", "Projector"],
                ),
                room(
                    "2",
                    "102B",
                    "Main Library",
                    4,
                    "6:30 PM",
                    &["Power Outlets", "Quiet Zone"],
                ),
                room(
                    "3",
                    "401",
                    "Engineering Wing",
                    50,
                    "2:00 PM",
                    &["Whiteboard", "Ethernet", "Dual Monitors"],
                ),
                room(
                    "4",
                    "Studio 5",
                    "Arts Complex",
                    10,
                    "8:00 PM",
                    &["Large Tables", "Natural Light"],
                ),
            ],
        }
    }

    /// All rooms, catalog order.
    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by id.
    pub fn get(&self, id: &str) -> CoreResult<&Room> {
        self.rooms
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Room",
                id: id.to_string(),
            })
    }

    /// Rooms matching the filters, catalog order.
    pub fn search(&self, filters: &SearchFilters) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| {
                if !filters.building.is_empty() && room.building != filters.building {
                    return false;
                }
                room.capacity >= filters.min_capacity
            })
            .collect()
    }
}
