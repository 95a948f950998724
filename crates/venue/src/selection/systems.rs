use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::VenueSet;

use super::{Selection, SelectionRequest};

/// Apply queued selection requests in the order they were sent.
pub fn apply_selection_requests(
    mut requests: EventReader<SelectionRequest>,
    catalog: Res<Catalog>,
    mut selection: ResMut<Selection>,
) {
    for request in requests.read() {
        let phase = match request {
            SelectionRequest::Floor(id) => selection.select_floor(*id, &catalog),
            SelectionRequest::Zone { zone, floor } => selection.select_zone(zone.clone(), floor),
            SelectionRequest::StepUp => {
                let Some(next) = catalog.floor_above(selection.floor_id()) else {
                    continue;
                };
                selection.select_floor(Some(next), &catalog)
            }
            SelectionRequest::StepDown => {
                let Some(next) = catalog.floor_below(selection.floor_id()) else {
                    continue;
                };
                selection.select_floor(Some(next), &catalog)
            }
        };
        debug!(
            "selection: {} -> {:?} (floor {:?}, zone {:?})",
            request_kind(request),
            phase,
            selection.floor_id(),
            selection.zone().map(|z| z.id.as_str())
        );
    }
}

fn request_kind(request: &SelectionRequest) -> &'static str {
    match request {
        SelectionRequest::Floor(_) => "floor",
        SelectionRequest::Zone { .. } => "zone",
        SelectionRequest::StepUp => "step up",
        SelectionRequest::StepDown => "step down",
    }
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .add_event::<SelectionRequest>()
            .add_systems(Update, apply_selection_requests.in_set(VenueSet::Selection));
    }
}
