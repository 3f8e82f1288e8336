use eframe::egui::Context;

use crate::app::{
    App,
    phases::phase_view::PhaseView,
    state::{AppState, IdleState, RegeneratingState},
};

impl PhaseView for RegeneratingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        // Synchronous: the new snapshot is in place before this frame paints,
        // so the user never sees a blank or half-replaced dashboard.
        app.regenerate_snapshot();
        app.tick_idle_state(ctx);

        if app.take_refresh_request() {
            AppState::Regenerating(RegeneratingState)
        } else {
            AppState::Idle(IdleState)
        }
    }
}
