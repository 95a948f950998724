use crate::catalog::Catalog;
use crate::selection::*;

fn floor(catalog: &Catalog, id: u32) -> Floor {
    catalog.floor(id).cloned().unwrap()
}

// -------------------------------------------------------------------------
// select_floor
// -------------------------------------------------------------------------

#[test]
fn test_default_is_unselected() {
    let sel = Selection::default();
    assert_eq!(sel.phase(), SelectionPhase::Unselected);
    assert!(sel.floor_id().is_none());
    assert!(sel.zone().is_none());
    assert!(sel.floor().is_none());
}

#[test]
fn test_select_floor_caches_floor_data() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let phase = sel.select_floor(Some(3), &catalog);
    assert_eq!(phase, SelectionPhase::FloorOnly);
    assert_eq!(sel.floor_id(), Some(3));
    assert_eq!(sel.floor().map(|f| f.id), Some(3));
    assert!(sel.zone().is_none());
}

#[test]
fn test_select_same_floor_twice_toggles_to_unselected() {
    let catalog = Catalog::builtin();
    for f in catalog.floors() {
        let mut sel = Selection::default();
        sel.select_floor(Some(f.id), &catalog);
        let phase = sel.select_floor(Some(f.id), &catalog);
        assert_eq!(phase, SelectionPhase::Unselected, "floor {}", f.id);
        assert_eq!(sel, Selection::default());
    }
}

#[test]
fn test_select_other_floor_switches() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    sel.select_floor(Some(2), &catalog);
    sel.select_floor(Some(5), &catalog);
    assert_eq!(sel.floor_id(), Some(5));
    assert_eq!(sel.floor().map(|f| f.id), Some(5));
}

#[test]
fn test_select_floor_none_clears_everything() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let f3 = floor(&catalog, 3);
    sel.select_zone(f3.zone("3f-pet").cloned(), &f3);
    assert_eq!(sel.select_floor(None, &catalog), SelectionPhase::Unselected);
    assert_eq!(sel, Selection::default());
}

#[test]
fn test_unknown_floor_id_clears_selection() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    sel.select_floor(Some(2), &catalog);
    assert_eq!(sel.select_floor(Some(42), &catalog), SelectionPhase::Unselected);
    assert!(sel.floor().is_none());
}

#[test]
fn test_select_floor_after_zone_drops_zone_only() {
    let catalog = Catalog::builtin();
    for f in catalog.floors() {
        for z in &f.zones {
            let mut sel = Selection::default();
            sel.select_zone(Some(z.clone()), f);
            let phase = sel.select_floor(Some(f.id), &catalog);
            assert_eq!(phase, SelectionPhase::FloorOnly, "zone {}", z.id);
            assert_eq!(sel.floor_id(), Some(f.id));
            assert!(sel.zone().is_none());
        }
    }
}

#[test]
fn test_select_floor_always_clears_zone_even_on_other_floor() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let f4 = floor(&catalog, 4);
    sel.select_zone(f4.zone("4f-studio-1").cloned(), &f4);
    sel.select_floor(Some(1), &catalog);
    assert_eq!(sel.phase(), SelectionPhase::FloorOnly);
    assert!(!sel.is_zone_selected("4f-studio-1"));
}

// -------------------------------------------------------------------------
// select_zone
// -------------------------------------------------------------------------

#[test]
fn test_select_zone_sets_all_three_values() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let f3 = floor(&catalog, 3);
    let phase = sel.select_zone(f3.zone("3f-pet").cloned(), &f3);
    assert_eq!(phase, SelectionPhase::ZoneSelected);
    assert_eq!(sel.floor_id(), Some(3));
    assert_eq!(sel.floor().map(|f| f.id), Some(3));
    assert!(sel.is_zone_selected("3f-pet"));
}

#[test]
fn test_select_zone_none_is_floor_only() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let phase = sel.select_zone(None, &floor(&catalog, 6));
    assert_eq!(phase, SelectionPhase::FloorOnly);
    assert_eq!(sel.floor_id(), Some(6));
}

#[test]
fn test_select_zone_does_not_validate_membership() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let (_, pet) = catalog.zone("3f-pet").unwrap();
    let f1 = floor(&catalog, 1);
    sel.select_zone(Some(pet.clone()), &f1);
    assert_eq!(sel.floor_id(), Some(1));
    assert!(sel.is_zone_selected("3f-pet"));
}

#[test]
fn test_select_zone_checked_rejects_foreign_zone() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    sel.select_floor(Some(2), &catalog);
    let before = sel.clone();
    let (_, pet) = catalog.zone("3f-pet").unwrap();
    let err = sel
        .select_zone_checked(Some(pet.clone()), &floor(&catalog, 1))
        .unwrap_err();
    assert_eq!(err.zone_id, "3f-pet");
    assert_eq!(err.floor_id, 1);
    assert_eq!(err.to_string(), "zone '3f-pet' does not belong to floor 1");
    assert_eq!(sel, before);
}

#[test]
fn test_select_zone_checked_accepts_member() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    let f3 = floor(&catalog, 3);
    let phase = sel
        .select_zone_checked(f3.zone("3f-socks").cloned(), &f3)
        .unwrap();
    assert_eq!(phase, SelectionPhase::ZoneSelected);
}

#[test]
fn test_is_above_selected() {
    let catalog = Catalog::builtin();
    let mut sel = Selection::default();
    assert!(!sel.is_above_selected(6));
    sel.select_floor(Some(3), &catalog);
    assert!(sel.is_above_selected(4));
    assert!(!sel.is_above_selected(3));
    assert!(!sel.is_above_selected(1));
}

#[test]
fn test_zone_by_id_pairs_owning_floor() {
    let catalog = Catalog::builtin();
    match SelectionRequest::zone_by_id(&catalog, "6f-terrace") {
        Some(SelectionRequest::Zone { zone, floor }) => {
            assert_eq!(floor.id, 6);
            assert_eq!(zone.map(|z| z.id), Some("6f-terrace".to_string()));
        }
        other => panic!("unexpected request {other:?}"),
    }
    assert!(SelectionRequest::zone_by_id(&catalog, "nope").is_none());
}
