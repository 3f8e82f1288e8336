// src/app/state.rs

/// Showing the last-generated snapshot, waiting for input.
#[derive(Clone, Default)]
pub(crate) struct IdleState;

/// A refresh was requested; the next tick rebuilds the snapshot
/// synchronously and falls straight back to Idle. There is no partial or
/// error state because generation cannot fail.
#[derive(Clone, Default)]
pub(crate) struct RegeneratingState;

pub(crate) enum AppState {
    Idle(IdleState),
    Regenerating(RegeneratingState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle(IdleState)
    }
}
