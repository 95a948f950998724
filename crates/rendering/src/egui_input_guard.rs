//! Egui input guard: keeps clicks, drags, scrolls and shortcuts aimed at the
//! side panel or header from also reaching the 3D scene.

use bevy_egui::EguiContexts;

/// Returns `true` when the cursor is over an egui area or egui is handling a
/// drag/click. Scene input systems skip the frame when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// Returns `true` while an egui widget has keyboard focus.
#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_keyboard_input())
}
