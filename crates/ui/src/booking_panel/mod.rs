mod dates_section;
mod floor_section;
mod panel;
mod view;
mod zone_section;


pub use panel::booking_panel_ui;
pub use view::{action_view, zone_notice, ActionView, DateShift, PanelActions, ZoneNotice};
