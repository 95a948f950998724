//! Floor / zone selection coordinator.
//!
//! [`Selection`] owns the three pieces of state the 3D view, the floor rail
//! and the booking panel all read: the selected floor id, the selected zone,
//! and a cached copy of the selected floor. Every mutation goes through
//! [`Selection::select_floor`] or [`Selection::select_zone`], which keep the
//! three values consistent:
//!
//! - `Unselected`: no floor, no zone.
//! - `FloorOnly`: floor set, no zone.
//! - `ZoneSelected`: floor and zone set.
//!
//! Input surfaces send [`SelectionRequest`] events; a single system applies
//! them in arrival order each frame.

mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::catalog::{Catalog, Floor, Zone};

pub use systems::{apply_selection_requests, SelectionPlugin};

/// Which of the three logical states the selection is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Unselected,
    FloorOnly,
    ZoneSelected,
}

/// Returned by [`Selection::select_zone_checked`] when the zone is not part
/// of the floor it was paired with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("zone '{zone_id}' does not belong to floor {floor_id}")]
pub struct SelectionMismatch {
    pub zone_id: String,
    pub floor_id: u32,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Selection {
    floor_id: Option<u32>,
    zone: Option<Zone>,
    floor: Option<Floor>,
}

impl Selection {
    pub fn floor_id(&self) -> Option<u32> {
        self.floor_id
    }

    pub fn zone(&self) -> Option<&Zone> {
        self.zone.as_ref()
    }

    /// Cached data of the selected floor.
    pub fn floor(&self) -> Option<&Floor> {
        self.floor.as_ref()
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.floor_id, &self.zone) {
            (None, _) => SelectionPhase::Unselected,
            (Some(_), None) => SelectionPhase::FloorOnly,
            (Some(_), Some(_)) => SelectionPhase::ZoneSelected,
        }
    }

    pub fn is_floor_selected(&self, floor_id: u32) -> bool {
        self.floor_id == Some(floor_id)
    }

    pub fn is_zone_selected(&self, zone_id: &str) -> bool {
        self.zone.as_ref().is_some_and(|z| z.id == zone_id)
    }

    /// True when a floor is selected and `floor_id` sits above it.
    pub fn is_above_selected(&self, floor_id: u32) -> bool {
        self.floor_id.is_some_and(|sel| floor_id > sel)
    }

    /// Select a floor, or clear everything with `None`.
    ///
    /// Re-selecting the floor that is already shown on its own toggles back
    /// to the overview. Re-selecting it while one of its zones is selected
    /// only drops the zone. An id the catalog does not know clears the
    /// selection. The zone is always cleared.
    pub fn select_floor(&mut self, floor_id: Option<u32>, catalog: &Catalog) -> SelectionPhase {
        let target = floor_id.and_then(|id| catalog.floor(id));
        match target {
            Some(floor) if self.phase() == SelectionPhase::FloorOnly
                && self.floor_id == Some(floor.id) =>
            {
                self.clear();
            }
            Some(floor) => {
                self.floor_id = Some(floor.id);
                self.floor = Some(floor.clone());
                self.zone = None;
            }
            None => {
                if let Some(id) = floor_id {
                    debug!("select_floor: unknown floor id {}, clearing selection", id);
                }
                self.clear();
            }
        }
        self.phase()
    }

    /// Select `zone` on `floor`, or just the floor when `zone` is `None`.
    ///
    /// The pair is taken as given: membership of `zone` in `floor.zones` is
    /// the caller's responsibility. Never produces `Unselected`.
    pub fn select_zone(&mut self, zone: Option<Zone>, floor: &Floor) -> SelectionPhase {
        self.zone = zone;
        self.floor_id = Some(floor.id);
        self.floor = Some(floor.clone());
        self.phase()
    }

    /// Like [`Selection::select_zone`], but refuses a zone that is not on
    /// `floor`. The selection is left untouched on error.
    pub fn select_zone_checked(
        &mut self,
        zone: Option<Zone>,
        floor: &Floor,
    ) -> Result<SelectionPhase, SelectionMismatch> {
        if let Some(z) = &zone {
            if !floor.contains_zone(&z.id) {
                return Err(SelectionMismatch {
                    zone_id: z.id.clone(),
                    floor_id: floor.id,
                });
            }
        }
        Ok(self.select_zone(zone, floor))
    }

    pub fn clear(&mut self) {
        self.floor_id = None;
        self.zone = None;
        self.floor = None;
    }
}

/// A request from an input surface (3D picking, floor rail, side panel,
/// keyboard) to change the selection.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum SelectionRequest {
    /// `select_floor(id)`; `None` returns to the overview.
    Floor(Option<u32>),
    /// `select_zone(zone, floor)`.
    Zone { zone: Option<Zone>, floor: Floor },
    /// Move one floor up (from the overview: the ground floor).
    StepUp,
    /// Move one floor down (from the overview: the top floor).
    StepDown,
}

impl SelectionRequest {
    /// Build a zone request for a catalog zone id, pairing it with the
    /// floor that owns it.
    pub fn zone_by_id(catalog: &Catalog, zone_id: &str) -> Option<Self> {
        catalog.zone(zone_id).map(|(floor, zone)| SelectionRequest::Zone {
            zone: Some(zone.clone()),
            floor: floor.clone(),
        })
    }
}
