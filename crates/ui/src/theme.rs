//! Warm light theme for the side panel plus dark overlay chrome for the
//! floating bars, in the palette of the building renderer.

use bevy_egui::{egui, EguiContexts};

// Accent
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const PRIMARY_DARK: egui::Color32 = egui::Color32::from_rgb(0xd9, 0x77, 0x06);
pub const PRIMARY_SOFT: egui::Color32 = egui::Color32::from_rgb(0xfe, 0xf3, 0xc7);

// Panel surfaces
pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(0xfa, 0xf7, 0xf2);
pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(0xff, 0xff, 0xff);
pub const BG_MUTED: egui::Color32 = egui::Color32::from_rgb(0xf1, 0xec, 0xe4);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(0xe4, 0xdc, 0xd0);

// Floating overlays (header, filter bar, footer, help)
pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_rgba_premultiplied(15, 23, 42, 230);
pub const OVERLAY_BORDER: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 40, 40, 40);
pub const OVERLAY_TEXT: egui::Color32 = egui::Color32::from_rgb(0xe2, 0xe8, 0xf0);
pub const OVERLAY_TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(0x94, 0xa3, 0xb8);

// Text
pub const TEXT: egui::Color32 = egui::Color32::from_rgb(0x29, 0x25, 0x24);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(0x1c, 0x19, 0x17);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(0x78, 0x71, 0x6c);

pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0x16, 0xa3, 0x4a);
pub const SUCCESS_SOFT: egui::Color32 = egui::Color32::from_rgb(0xdc, 0xfc, 0xe7);

// Typography
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 14.0;
pub const FONT_BODY: f32 = 12.5;
pub const FONT_SMALL: f32 = 10.5;
pub const FONT_PRICE: f32 = 22.0;

// Geometry
pub const PANEL_WIDTH: f32 = 360.0;
pub const CARD_CORNER_RADIUS: u8 = 10;
pub const WIDGET_CORNER_RADIUS: u8 = 8;
pub const ITEM_SPACING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 14.0;

pub fn apply_exhibition_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let inactive = BG_MUTED;
    let hover = PRIMARY_SOFT;

    style.visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);
    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    style.visuals.window_fill = BG_PANEL;
    style.visuals.panel_fill = BG_PANEL;
    style.visuals.extreme_bg_color = BG_CARD;
    style.visuals.faint_bg_color = BG_MUTED;

    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY_DARK);

    let window_rounding = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(ITEM_SPACING, 6.0);

    ctx.set_style(style);
}
