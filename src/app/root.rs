use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    rand::{SeedableRng, rngs::StdRng},
    serde::{Deserialize, Serialize},
    std::mem,
};

use crate::{
    Cli,
    app::{AppState, PhaseView},
    config::{ASSET_COUNT, CATALOG, DF},
    config::constants::{SPARKLINE_POINTS, TREND_POINTS},
    market::MarketSnapshot,
    ui::{PlotScale, PlotVisibility, SortColumn, SortDirection, UI_CONFIG},
    utils::AppInstant,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // UI preferences persist across sessions.
    pub(crate) plot_visibility: PlotVisibility,
    pub(crate) plot_scale: PlotScale,
    pub(crate) show_market_table: bool,
    pub(crate) sort_col: SortColumn,
    pub(crate) sort_dir: SortDirection,

    // The snapshot never persists: a fresh session generates fresh data.
    #[serde(skip, default = "fresh_snapshot")]
    pub(crate) snapshot: MarketSnapshot,
    #[serde(skip, default = "fresh_rng")]
    pub(crate) rng: StdRng,
    #[serde(skip)]
    pub(crate) seeded: bool,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    refresh_requested: bool,
}

fn fresh_rng() -> StdRng {
    StdRng::from_os_rng()
}

fn fresh_snapshot() -> MarketSnapshot {
    MarketSnapshot::generate(CATALOG, &mut fresh_rng())
}

impl Default for App {
    fn default() -> Self {
        let mut rng = fresh_rng();
        let snapshot = MarketSnapshot::generate(CATALOG, &mut rng);

        Self {
            plot_visibility: PlotVisibility::default(),
            plot_scale: PlotScale::default(),
            show_market_table: true,
            sort_col: SortColumn::default(),
            sort_dir: SortDirection::default(),
            snapshot,
            rng,
            seeded: false,
            state: AppState::default(),
            refresh_requested: false,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(seed) = args.seed {
            app.rng = StdRng::seed_from_u64(seed);
            app.seeded = true;
            app.regenerate_snapshot();
        }

        if DF.log_startup {
            log::info!(
                "Tracking {} assets ({} trend pts, {} spark pts per asset); seed: {:?}",
                ASSET_COUNT,
                TREND_POINTS,
                SPARKLINE_POINTS,
                args.seed
            );
        }

        app
    }

    /// Queue a refresh; the state machine picks it up at the end of the
    /// current tick.
    pub(crate) fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    pub(crate) fn take_refresh_request(&mut self) -> bool {
        mem::take(&mut self.refresh_requested)
    }

    /// Discard the current snapshot and draw a new one. Total replacement:
    /// nothing from the old series is carried over or merged.
    pub(crate) fn regenerate_snapshot(&mut self) {
        let start = AppInstant::now();
        self.snapshot = MarketSnapshot::generate(CATALOG, &mut self.rng);
        self.refresh_requested = false;

        if DF.log_refresh_events {
            log::info!(
                "Snapshot regenerated at {}",
                self.snapshot.generated_at.format("%H:%M:%S")
            );
        }
        if DF.log_performance {
            log::info!("Regeneration took {}us", start.elapsed().as_micros());
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in a text box, don't trigger global hotkeys.
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::R) {
                self.refresh_requested = true;
            }
            if i.key_pressed(Key::T) {
                self.show_market_table = !self.show_market_table;
            }

            // 1-8 toggle the matching trend line
            let line_keys = [
                Key::Num1,
                Key::Num2,
                Key::Num3,
                Key::Num4,
                Key::Num5,
                Key::Num6,
                Key::Num7,
                Key::Num8,
            ];
            for (idx, key) in line_keys.iter().enumerate().take(ASSET_COUNT) {
                if i.key_pressed(*key) {
                    self.plot_visibility.toggle(idx);
                }
            }
        });
    }

    /// IDLE PHASE MAIN LOOP (also reused by the Regenerating tick once the
    /// new snapshot is in place)
    pub(crate) fn tick_idle_state(&mut self, ctx: &Context) {
        let start = AppInstant::now();

        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_cards_panel(ctx);
        self.render_status_panel(ctx);
        if self.show_market_table {
            self.render_table_panel(ctx);
        }
        self.render_central_panel(ctx);

        let frame_time = start.elapsed().as_micros();
        if frame_time > 100_000 {
            if DF.log_performance {
                log::warn!("🐢 SLOW FRAME: {}us", frame_time);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Idle(mut s) => s.tick(self, ctx),
            AppState::Regenerating(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_replaces_the_snapshot_wholesale() {
        let mut app = App::default();
        let before = app.snapshot.trend.flatten();

        app.request_refresh();
        assert!(app.take_refresh_request());
        app.regenerate_snapshot();

        assert_eq!(app.snapshot.trend.len(), TREND_POINTS);
        assert_eq!(app.snapshot.sparklines.len(), CATALOG.len());
        assert_ne!(app.snapshot.trend.flatten(), before);
    }

    #[test]
    fn take_refresh_request_consumes_the_flag() {
        let mut app = App::default();
        assert!(!app.take_refresh_request());
        app.request_refresh();
        assert!(app.take_refresh_request());
        assert!(!app.take_refresh_request());
    }

    #[test]
    fn seeded_apps_generate_identical_series() {
        let mut a = App::default();
        let mut b = App::default();
        a.rng = StdRng::seed_from_u64(42);
        b.rng = StdRng::seed_from_u64(42);
        a.regenerate_snapshot();
        b.regenerate_snapshot();

        assert_eq!(a.snapshot.trend.flatten(), b.snapshot.trend.flatten());
        for (sa, sb) in a.snapshot.sparklines.iter().zip(&b.snapshot.sparklines) {
            assert_eq!(sa.values, sb.values);
            assert_eq!(sa.len(), SPARKLINE_POINTS);
        }
    }
}
