//! Zone category filter shown in the top bar.
//!
//! The filter only changes how zones are presented (dimmed when they do not
//! match); it never touches the selection.

use bevy::prelude::*;

use crate::catalog::Zone;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZoneFilter {
    #[default]
    All,
    Retail,
    Livestream,
    Office,
    Showroom,
}

impl ZoneFilter {
    pub const ALL: [ZoneFilter; 5] = [
        ZoneFilter::All,
        ZoneFilter::Retail,
        ZoneFilter::Livestream,
        ZoneFilter::Office,
        ZoneFilter::Showroom,
    ];

    /// Category label this filter matches, `None` for [`ZoneFilter::All`].
    pub fn category(self) -> Option<&'static str> {
        match self {
            ZoneFilter::All => None,
            ZoneFilter::Retail => Some("Retail"),
            ZoneFilter::Livestream => Some("Livestream"),
            ZoneFilter::Office => Some("Office"),
            ZoneFilter::Showroom => Some("Showroom"),
        }
    }

    /// Localization key for the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            ZoneFilter::All => "filter.all",
            ZoneFilter::Retail => "filter.retail",
            ZoneFilter::Livestream => "filter.livestream",
            ZoneFilter::Office => "filter.office",
            ZoneFilter::Showroom => "filter.showroom",
        }
    }

    pub fn matches(self, zone: &Zone) -> bool {
        self.category()
            .is_none_or(|c| zone.category.eq_ignore_ascii_case(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn matching(filter: ZoneFilter) -> Vec<String> {
        Catalog::builtin()
            .zones()
            .filter(|(_, z)| filter.matches(z))
            .map(|(_, z)| z.id.clone())
            .collect()
    }

    #[test]
    fn test_all_matches_every_zone() {
        assert_eq!(matching(ZoneFilter::All).len(), 27);
    }

    #[test]
    fn test_livestream_filter() {
        assert_eq!(
            matching(ZoneFilter::Livestream),
            vec!["4f-livestream-large", "4f-tiktok"]
        );
    }

    #[test]
    fn test_showroom_filter() {
        assert_eq!(
            matching(ZoneFilter::Showroom),
            vec!["2f-independent-1", "2f-independent-2"]
        );
    }

    #[test]
    fn test_retail_and_office_filters() {
        assert_eq!(matching(ZoneFilter::Retail), vec!["1f-retail"]);
        assert_eq!(matching(ZoneFilter::Office), vec!["5f-open-office"]);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(ZoneFilter::default(), ZoneFilter::All);
        assert!(ZoneFilter::All.category().is_none());
    }
}
