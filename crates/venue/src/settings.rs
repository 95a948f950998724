//! Launch-time settings read from the environment.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::config::{CATALOG_ENV, LOCALE_ENV, SCREENSHOTS_ENV};
use crate::localization::Locale;

/// Settings fixed for the session. `Default` ignores the environment so tests
/// are deterministic; the app inserts [`VenueSettings::from_env`] instead.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueSettings {
    /// JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    pub locale: Locale,
    /// Walk the preset camera shots and save a screenshot of each.
    pub screenshot_tour: bool,
}

impl VenueSettings {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Build settings from a variable lookup. Unset or empty values keep
    /// their defaults; an unrecognised locale is logged and ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_path = get(CATALOG_ENV).map(PathBuf::from);
        let locale = match get(LOCALE_ENV) {
            Some(code) => Locale::from_code(code.trim()).unwrap_or_else(|| {
                warn!("Unsupported locale '{}', using English", code);
                Locale::En
            }),
            None => Locale::En,
        };
        let screenshot_tour = get(SCREENSHOTS_ENV).is_some_and(|v| v != "0");

        Self {
            catalog_path,
            locale,
            screenshot_tour,
        }
    }
}
