//! Image paths for zone previews and floor plans.
//!
//! Paths are relative to the asset root. The UI shows a placeholder when a
//! zone has no image.

use crate::catalog::{Floor, Zone};

pub const GALLERY_STRUCTURE_IMAGE: &str = "/images/gallery-structure.jpg";

const ZONE_IMAGES: &[(&str, &str)] = &[
    ("1f-retail", "/images/zone-1f-retail.jpg"),
    ("1f-industry", "/images/zone-1f-industry.jpg"),
    ("1f-multifunction", "/images/zone-1f-multifunction.jpg"),
    ("1f-digital", "/images/zone-1f-digital.jpg"),
    ("2f-joint", "/images/zone-2f-joint.jpg"),
    ("3f-pet", "/images/zone-3f-pet.jpg"),
    ("3f-department", "/images/zone-3f-department.jpg"),
    ("3f-appliance", "/images/zone-3f-appliance.jpg"),
];

const FLOOR_PLAN_IMAGES: &[(u32, &str)] = &[
    (1, "/images/floor-plan-1f.png"),
    (2, "/images/floor-plan-2f.png"),
    (3, "/images/floor-plan-3f.png"),
    (4, "/images/floor-plan-4f.png"),
    (5, "/images/floor-plan-5f.png"),
    (6, "/images/floor-plan-6f.png"),
];

/// Preview image for a zone: the shared table first, then the zone's own
/// `image` field.
pub fn zone_image(zone: &Zone) -> Option<&str> {
    ZONE_IMAGES
        .iter()
        .find(|(id, _)| *id == zone.id)
        .map(|(_, path)| *path)
        .or(zone.image.as_deref())
}

/// Floor plan for a floor: the shared table first, then the floor's own
/// `floor_plan_image`, which may be empty.
pub fn floor_plan_image(floor: &Floor) -> Option<&str> {
    FLOOR_PLAN_IMAGES
        .iter()
        .find(|(id, _)| *id == floor.id)
        .map(|(_, path)| *path)
        .or_else(|| Some(floor.floor_plan_image.as_str()).filter(|p| !p.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_mapped_zone_has_image() {
        let catalog = Catalog::builtin();
        let (_, zone) = catalog.zone("3f-pet").unwrap();
        assert_eq!(zone_image(zone), Some("/images/zone-3f-pet.jpg"));
    }

    #[test]
    fn test_unmapped_zone_falls_back_to_own_image() {
        let catalog = Catalog::builtin();
        let (_, zone) = catalog.zone("6f-terrace").unwrap();
        let mut zone = zone.clone();
        zone.image = None;
        assert_eq!(zone_image(&zone), None);
        zone.image = Some("/images/custom.jpg".into());
        assert_eq!(zone_image(&zone), Some("/images/custom.jpg"));
    }

    #[test]
    fn test_every_builtin_floor_has_a_plan() {
        let catalog = Catalog::builtin();
        for floor in catalog.floors() {
            let plan = floor_plan_image(floor).unwrap();
            assert_eq!(plan, format!("/images/floor-plan-{}f.png", floor.id));
        }
    }
}
