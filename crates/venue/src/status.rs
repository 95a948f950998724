//! Fixed status display tables: colour and labels per [`ZoneStatus`].
//!
//! These values are a display contract shared by the 3D view, the side
//! panel and the legend. Unknown statuses fall back to gray / "Unknown".

use bevy::color::Color;

use crate::catalog::ZoneStatus;

pub const AVAILABLE_HEX: &str = "#22c55e";
pub const BOOKED_HEX: &str = "#ef4444";
pub const PENDING_HEX: &str = "#f59e0b";
pub const UNKNOWN_HEX: &str = "#6b7280";

/// Hex colour for a status.
pub fn status_color_hex(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Available => AVAILABLE_HEX,
        ZoneStatus::Booked => BOOKED_HEX,
        ZoneStatus::Pending => PENDING_HEX,
        ZoneStatus::Unknown => UNKNOWN_HEX,
    }
}

/// Status colour as sRGB bytes, for egui and other non-Bevy consumers.
pub fn status_rgb(status: ZoneStatus) -> [u8; 3] {
    match status {
        ZoneStatus::Available => [0x22, 0xc5, 0x5e],
        ZoneStatus::Booked => [0xef, 0x44, 0x44],
        ZoneStatus::Pending => [0xf5, 0x9e, 0x0b],
        ZoneStatus::Unknown => [0x6b, 0x72, 0x80],
    }
}

pub fn status_color(status: ZoneStatus) -> Color {
    let [r, g, b] = status_rgb(status);
    Color::srgb_u8(r, g, b)
}

/// Neutral (English) label.
pub fn status_label(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Available => "Available",
        ZoneStatus::Booked => "Booked",
        ZoneStatus::Pending => "Pending",
        ZoneStatus::Unknown => "Unknown",
    }
}

/// Chinese label.
pub fn status_label_zh(status: ZoneStatus) -> &'static str {
    match status {
        ZoneStatus::Available => "可预订",
        ZoneStatus::Booked => "已预订",
        ZoneStatus::Pending => "审核中",
        ZoneStatus::Unknown => "未知",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_hex_color, Catalog};

    const ALL: [ZoneStatus; 4] = [
        ZoneStatus::Available,
        ZoneStatus::Booked,
        ZoneStatus::Pending,
        ZoneStatus::Unknown,
    ];

    #[test]
    fn test_status_colors_match_table() {
        assert_eq!(status_color_hex(ZoneStatus::Available), "#22c55e");
        assert_eq!(status_color_hex(ZoneStatus::Booked), "#ef4444");
        assert_eq!(status_color_hex(ZoneStatus::Pending), "#f59e0b");
        assert_eq!(status_color_hex(ZoneStatus::Unknown), "#6b7280");
    }

    #[test]
    fn test_rgb_bytes_agree_with_hex() {
        for status in ALL {
            let from_hex = parse_hex_color(status_color_hex(status)).unwrap();
            assert_eq!(from_hex.to_srgba(), status_color(status).to_srgba());
        }
    }

    #[test]
    fn test_labels_both_locales() {
        assert_eq!(status_label(ZoneStatus::Available), "Available");
        assert_eq!(status_label(ZoneStatus::Unknown), "Unknown");
        assert_eq!(status_label_zh(ZoneStatus::Booked), "已预订");
        assert_eq!(status_label_zh(ZoneStatus::Pending), "审核中");
        assert_eq!(status_label_zh(ZoneStatus::Unknown), "未知");
    }

    #[test]
    fn test_mappings_are_stable_across_calls() {
        let catalog = Catalog::builtin();
        for (_, zone) in catalog.zones() {
            let first = (
                status_color_hex(zone.status),
                status_label(zone.status),
                status_label_zh(zone.status),
            );
            for _ in 0..3 {
                assert_eq!(
                    first,
                    (
                        status_color_hex(zone.status),
                        status_label(zone.status),
                        status_label_zh(zone.status),
                    )
                );
            }
        }
    }

    #[test]
    fn test_known_statuses_have_distinct_colors() {
        let colors: Vec<_> = ZoneStatus::KNOWN.iter().map(|s| status_color_hex(*s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
