mod tables;
#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::collections::BTreeMap;

use crate::catalog::{Floor, Zone, ZoneStatus};
use crate::config::CURRENCY_PREFIX;
use crate::settings::VenueSettings;
use crate::status::{status_label, status_label_zh};

use tables::{build_chinese_table, build_english_table};

// =============================================================================
// Locales
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// Parse a locale code such as `en`, `zh` or `zh-CN`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

/// A string table maps localization keys to their translated text for a single locale.
pub type StringTable = BTreeMap<&'static str, &'static str>;

// =============================================================================
// Resource
// =============================================================================

/// Active UI locale plus the string tables for every supported locale.
#[derive(Resource, Debug, Clone)]
pub struct LocalizationState {
    pub active: Locale,
    tables: BTreeMap<Locale, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(Locale::En, build_english_table());
        tables.insert(Locale::Zh, build_chinese_table());
        Self {
            active: Locale::default(),
            tables,
        }
    }
}

impl LocalizationState {
    /// Look up a key in the active locale, falling back to English and then
    /// to the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.tables
            .get(&self.active)
            .and_then(|table| table.get(key).copied())
            .or_else(|| {
                self.tables
                    .get(&Locale::En)
                    .and_then(|table| table.get(key).copied())
            })
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.active = locale;
    }

    pub fn status_label(&self, status: ZoneStatus) -> &'static str {
        match self.active {
            Locale::En => status_label(status),
            Locale::Zh => status_label_zh(status),
        }
    }

    /// Zone name in the active locale.
    pub fn zone_name<'z>(&self, zone: &'z Zone) -> &'z str {
        match self.active {
            Locale::En => &zone.name_en,
            Locale::Zh => &zone.name,
        }
    }

    /// The other-language zone name, shown as a subtitle.
    pub fn zone_subtitle<'z>(&self, zone: &'z Zone) -> &'z str {
        match self.active {
            Locale::En => &zone.name,
            Locale::Zh => &zone.name_en,
        }
    }

    pub fn floor_name<'f>(&self, floor: &'f Floor) -> &'f str {
        match self.active {
            Locale::En => &floor.name_en,
            Locale::Zh => &floor.name,
        }
    }

    /// Integer with `,` thousands separators.
    pub fn format_number(&self, n: u64) -> String {
        format_with_separator(n, ',')
    }

    /// `¥` amount with thousands separators.
    pub fn format_currency(&self, amount: u64) -> String {
        format!("{}{}", CURRENCY_PREFIX, self.format_number(amount))
    }

    pub fn format_area(&self, area: f32) -> String {
        format!("{} {}", trim_float(area), self.t("unit.sqm"))
    }
}

// =============================================================================
// Formatting helpers
// =============================================================================

fn format_with_separator(n: u64, sep: char) -> String {
    let s = n.to_string();
    let len = s.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result
}

/// `280.0` -> `"280"`, `12.5` -> `"12.5"`.
fn trim_float(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

// =============================================================================
// Plugin
// =============================================================================

fn apply_locale_setting(settings: Res<VenueSettings>, mut l10n: ResMut<LocalizationState>) {
    if l10n.active != settings.locale {
        l10n.set_locale(settings.locale);
    }
}

pub struct LocalizationPlugin;

impl Plugin for LocalizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocalizationState>()
            .add_systems(Startup, apply_locale_setting);
    }
}
