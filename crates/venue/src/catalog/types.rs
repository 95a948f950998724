use bevy::color::{Color, Srgba};
use serde::{Deserialize, Serialize};

/// Reservation status of a single zone.
///
/// Any status string outside the three known values deserializes to
/// [`ZoneStatus::Unknown`] so a foreign catalog never fails on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    Available,
    Booked,
    Pending,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ZoneStatus {
    pub const KNOWN: [ZoneStatus; 3] = [
        ZoneStatus::Available,
        ZoneStatus::Booked,
        ZoneStatus::Pending,
    ];
}

/// A bookable (or non-bookable) sub-area of a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique across the whole catalog, e.g. `"3f-pet"`.
    pub id: String,
    /// Primary (Chinese) display name.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Category label such as `Retail` or `Livestream`.
    #[serde(rename = "type")]
    pub category: String,
    /// Floor area in square metres.
    pub area: f32,
    pub status: ZoneStatus,
    /// Daily rate in whole yuan. Zero means the zone cannot be booked on its
    /// own. Negative or fractional rates fail to parse.
    pub price: u32,
    /// Centre of the zone box relative to its floor plate.
    pub position: [f32; 3],
    pub size: [f32; 3],
    /// Display colour as `#RRGGBB`.
    pub color: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Zone {
    /// Only available zones with a positive daily rate can be reserved.
    pub fn is_bookable(&self) -> bool {
        self.status == ZoneStatus::Available && self.price > 0
    }

    /// Parsed display colour, falling back to neutral gray for malformed hex.
    pub fn display_color(&self) -> Color {
        parse_hex_color(&self.color).unwrap_or(Color::srgb_u8(0x6b, 0x72, 0x80))
    }
}

/// One level of the building with its ordered zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    /// Positive, unique, and the ordering key (1 = ground floor).
    pub id: u32,
    pub name: String,
    pub name_en: String,
    /// Free-text list of the floor's functions, clauses separated by `、`.
    pub core_function: String,
    pub zones: Vec<Zone>,
    pub color: String,
    pub floor_plan_image: String,
}

impl Floor {
    /// Short tag used on buttons and 3D labels, e.g. `"3F"`.
    pub fn tag(&self) -> String {
        format!("{}F", self.id)
    }

    /// First clause of [`Floor::core_function`].
    pub fn headline(&self) -> &str {
        self.core_function
            .split('\u{3001}')
            .next()
            .unwrap_or(&self.core_function)
    }

    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    pub fn contains_zone(&self, zone_id: &str) -> bool {
        self.zone(zone_id).is_some()
    }
}

/// Parse a `#RRGGBB` (or `RRGGBB`) string into a Bevy colour.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    Srgba::hex(hex).ok().map(Color::Srgba)
}
