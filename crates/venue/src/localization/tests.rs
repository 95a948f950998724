use super::tables::{CHINESE_KEYS, ENGLISH_KEYS};
use super::*;
use crate::catalog::Catalog;

#[test]
fn test_default_locale_is_english() {
    let l10n = LocalizationState::default();
    assert_eq!(l10n.active, Locale::En);
    assert_eq!(l10n.t("ui.title"), "Global Exhibition Center");
}

#[test]
fn test_chinese_lookup() {
    let mut l10n = LocalizationState::default();
    l10n.set_locale(Locale::Zh);
    assert_eq!(l10n.t("booking.reserve"), "预订展区");
    assert_eq!(l10n.t("filter.livestream"), "直播");
}

#[test]
fn test_unknown_key_falls_back_to_key() {
    let mut l10n = LocalizationState::default();
    l10n.set_locale(Locale::Zh);
    assert_eq!(l10n.t("no.such.key"), "no.such.key");
    assert!(l10n.get("no.such.key").is_none());
}

#[test]
fn test_tables_cover_the_same_keys() {
    assert_eq!(ENGLISH_KEYS, CHINESE_KEYS);
    let en = tables::build_english_table();
    let zh = tables::build_chinese_table();
    for key in en.keys() {
        assert!(zh.contains_key(key), "missing zh entry for {key}");
    }
}

#[test]
fn test_filter_keys_are_translated() {
    let l10n = LocalizationState::default();
    for filter in crate::filter::ZoneFilter::ALL {
        assert!(l10n.get(filter.label_key()).is_some());
    }
}

#[test]
fn test_format_number_groups_thousands() {
    let l10n = LocalizationState::default();
    assert_eq!(l10n.format_number(0), "0");
    assert_eq!(l10n.format_number(999), "999");
    assert_eq!(l10n.format_number(1000), "1,000");
    assert_eq!(l10n.format_number(1234567), "1,234,567");
}

#[test]
fn test_format_currency() {
    let l10n = LocalizationState::default();
    assert_eq!(l10n.format_currency(12800), "\u{00a5}12,800");
    assert_eq!(l10n.format_currency(0), "\u{00a5}0");
}

#[test]
fn test_format_area_drops_trailing_zero() {
    let l10n = LocalizationState::default();
    assert_eq!(l10n.format_area(280.0), "280 sqm");
    assert_eq!(l10n.format_area(12.5), "12.5 sqm");
}

#[test]
fn test_names_follow_locale() {
    let catalog = Catalog::builtin();
    let (floor, zone) = catalog.zone("3f-pet").unwrap();
    let mut l10n = LocalizationState::default();
    assert_eq!(l10n.zone_name(zone), zone.name_en);
    assert_eq!(l10n.zone_subtitle(zone), zone.name);
    assert_eq!(l10n.floor_name(floor), floor.name_en);
    l10n.set_locale(Locale::Zh);
    assert_eq!(l10n.zone_name(zone), zone.name);
    assert_eq!(l10n.floor_name(floor), floor.name);
}

#[test]
fn test_status_label_follows_locale() {
    let mut l10n = LocalizationState::default();
    assert_eq!(l10n.status_label(ZoneStatus::Booked), "Booked");
    l10n.set_locale(Locale::Zh);
    assert_eq!(l10n.status_label(ZoneStatus::Booked), "已预订");
}

#[test]
fn test_locale_from_code() {
    assert_eq!(Locale::from_code("en"), Some(Locale::En));
    assert_eq!(Locale::from_code("zh-CN"), Some(Locale::Zh));
    assert_eq!(Locale::from_code("ZH_tw"), Some(Locale::Zh));
    assert_eq!(Locale::from_code("fr"), None);
    assert_eq!(Locale::from_code(""), None);
}
