use std::time::Duration;

/// Vertical distance between two stacked floor plates, in world units.
pub const FLOOR_SPACING: f32 = 0.5;
/// Floor plate footprint (X, thickness, Z).
pub const PLATE_WIDTH: f32 = 4.5;
pub const PLATE_THICKNESS: f32 = 0.08;
pub const PLATE_DEPTH: f32 = 3.5;

/// Zone boxes sit this far above their floor plate origin.
pub const ZONE_LIFT: f32 = 0.15;
/// Extra lift applied to the selected zone while it bobs.
pub const SELECTED_ZONE_LIFT: f32 = 0.1;
/// Bob amplitude (world units) and angular rate (rad/s) of the selected zone.
pub const ZONE_BOB_AMPLITUDE: f32 = 0.02;
pub const ZONE_BOB_RATE: f32 = 2.0;

/// How long the simulated reservation request stays "in progress".
pub const BOOKING_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success notice stays up once the request completes.
pub const BOOKING_SUCCESS_HOLD: Duration = Duration::from_millis(3000);

/// Default stay length offered by the date picker (today + N days).
pub const DEFAULT_STAY_DAYS: i64 = 7;

/// Currency prefix used for daily rates and totals.
pub const CURRENCY_PREFIX: &str = "\u{00a5}";

/// Environment variable pointing at a JSON catalog that replaces the built-in one.
pub const CATALOG_ENV: &str = "EXHIBITION_CATALOG";
/// Environment variable selecting the UI locale (`en` or `zh`).
pub const LOCALE_ENV: &str = "EXHIBITION_LOCALE";
/// Environment variable enabling the preset screenshot tour.
pub const SCREENSHOTS_ENV: &str = "EXHIBITION_SCREENSHOTS";
