use eframe::egui::Context;

use crate::app::{
    App,
    phases::phase_view::PhaseView,
    state::{AppState, IdleState, RegeneratingState},
};

impl PhaseView for IdleState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_idle_state(ctx);

        if app.take_refresh_request() {
            AppState::Regenerating(RegeneratingState)
        } else {
            AppState::Idle(IdleState)
        }
    }
}
