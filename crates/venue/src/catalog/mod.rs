//! Static catalog of floors and zones.
//!
//! The catalog is immutable for the lifetime of a session. It is built once
//! (from the built-in table or a JSON document with the same shape) and
//! indexed by floor id and zone id so lookups never scan the floor list.

mod builtin;
mod error;
mod types;


use std::collections::{HashMap, HashSet};
use std::path::Path;

use bevy::prelude::*;

use crate::settings::VenueSettings;

pub use builtin::builtin_floors;
pub use error::CatalogError;
pub use types::{parse_hex_color, Floor, Zone, ZoneStatus};

/// Counts shown in the footer strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub floors: usize,
    pub zones: usize,
    pub available: usize,
}

/// The immutable building catalog, floors in ascending id order.
#[derive(Resource, Debug, Clone)]
pub struct Catalog {
    floors: Vec<Floor>,
    /// floor id -> index into `floors`
    floor_index: HashMap<u32, usize>,
    /// zone id -> (floor index, zone index)
    zone_index: HashMap<String, (usize, usize)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::index(builtin_floors())
    }

    /// Validate and index a floor list.
    pub fn new(floors: Vec<Floor>) -> Result<Self, CatalogError> {
        validate(&floors)?;
        Ok(Self::index(floors))
    }

    /// Parse a JSON array of floors in the catalog's wire shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let floors: Vec<Floor> = serde_json::from_str(json)?;
        Self::new(floors)
    }

    /// Read and parse a JSON catalog file.
    pub fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn index(floors: Vec<Floor>) -> Self {
        let mut floor_index = HashMap::with_capacity(floors.len());
        let mut zone_index = HashMap::new();
        for (fi, floor) in floors.iter().enumerate() {
            floor_index.insert(floor.id, fi);
            for (zi, zone) in floor.zones.iter().enumerate() {
                zone_index.insert(zone.id.clone(), (fi, zi));
            }
        }
        Self {
            floors,
            floor_index,
            zone_index,
        }
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, id: u32) -> Option<&Floor> {
        self.floor_index.get(&id).map(|&i| &self.floors[i])
    }

    /// Position of a floor in the ascending list (0 = ground floor).
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.floor_index.get(&id).copied()
    }

    /// Look up a zone and the floor that owns it.
    pub fn zone(&self, zone_id: &str) -> Option<(&Floor, &Zone)> {
        self.zone_index.get(zone_id).map(|&(fi, zi)| {
            let floor = &self.floors[fi];
            (floor, &floor.zones[zi])
        })
    }

    pub fn zones(&self) -> impl Iterator<Item = (&Floor, &Zone)> {
        self.floors
            .iter()
            .flat_map(|f| f.zones.iter().map(move |z| (f, z)))
    }

    /// Floor one level above `current`. From no selection this is the
    /// ground floor; from the top floor there is nothing above.
    pub fn floor_above(&self, current: Option<u32>) -> Option<u32> {
        let next = match current.and_then(|id| self.position_of(id)) {
            Some(i) => i + 1,
            None => 0,
        };
        self.floors.get(next).map(|f| f.id)
    }

    /// Floor one level below `current`. From no selection this is the top
    /// floor; from the ground floor there is nothing below.
    pub fn floor_below(&self, current: Option<u32>) -> Option<u32> {
        let here = match current.and_then(|id| self.position_of(id)) {
            Some(i) => i,
            None => self.floors.len(),
        };
        here.checked_sub(1)
            .and_then(|i| self.floors.get(i))
            .map(|f| f.id)
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            floors: self.floors.len(),
            zones: self.zone_index.len(),
            available: self
                .zones()
                .filter(|(_, z)| z.status == ZoneStatus::Available)
                .count(),
        }
    }
}

fn validate(floors: &[Floor]) -> Result<(), CatalogError> {
    if floors.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen_zones: HashSet<&str> = HashSet::new();
    let mut previous: Option<u32> = None;
    for floor in floors {
        if floor.id == 0 {
            return Err(CatalogError::ZeroFloorId);
        }
        if let Some(prev) = previous {
            if prev == floor.id {
                return Err(CatalogError::DuplicateFloor(floor.id));
            }
            if prev > floor.id {
                return Err(CatalogError::FloorOrder {
                    previous: prev,
                    next: floor.id,
                });
            }
        }
        previous = Some(floor.id);
        check_color(&floor.tag(), &floor.color)?;

        for zone in &floor.zones {
            if !seen_zones.insert(zone.id.as_str()) {
                return Err(CatalogError::DuplicateZone(zone.id.clone()));
            }
            if zone.area.is_nan() || zone.area <= 0.0 {
                return Err(CatalogError::InvalidArea {
                    zone: zone.id.clone(),
                    area: zone.area,
                });
            }
            check_color(&zone.id, &zone.color)?;
        }
    }
    Ok(())
}

fn check_color(owner: &str, color: &str) -> Result<(), CatalogError> {
    if parse_hex_color(color).is_none() {
        return Err(CatalogError::InvalidColor {
            owner: owner.to_string(),
            color: color.to_string(),
        });
    }
    Ok(())
}

/// Startup system: swap in the catalog named by [`VenueSettings`], keeping
/// the built-in one when the file is missing or invalid.
pub fn load_catalog_override(settings: Res<VenueSettings>, mut catalog: ResMut<Catalog>) {
    let Some(path) = settings.catalog_path.as_deref() else {
        return;
    };
    match Catalog::load_file(path) {
        Ok(loaded) => {
            let summary = loaded.summary();
            info!(
                "Loaded catalog from {}: {} floors, {} zones",
                path.display(),
                summary.floors,
                summary.zones
            );
            *catalog = loaded;
        }
        Err(e) => {
            warn!(
                "Catalog {} rejected, using built-in catalog: {}",
                path.display(),
                e
            );
        }
    }
}
