use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel};

use crate::app::App;
use crate::config::CATALOG;
use crate::config::plot::PLOT_CONFIG;
use crate::ui::{
    PlotScale, UI_CONFIG, UI_TEXT, UiStyleExt, render_market_table, render_metric_cards,
    render_trend_plot,
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                // --- TOP TOOLBAR ---
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );

                    ui.separator();

                    // 1. REFRESH
                    if ui
                        .button(RichText::new(&UI_TEXT.tb_refresh).strong())
                        .on_hover_text(&UI_TEXT.tb_refresh_hover)
                        .clicked()
                    {
                        self.request_refresh();
                    }

                    ui.separator();

                    // 2. Y-AXIS SCALE
                    ui.label(&UI_TEXT.tb_scale);
                    ui.selectable_value(
                        &mut self.plot_scale,
                        PlotScale::BandPct,
                        PlotScale::BandPct.to_string(),
                    );
                    ui.selectable_value(
                        &mut self.plot_scale,
                        PlotScale::Raw,
                        PlotScale::Raw.to_string(),
                    );

                    ui.separator();

                    // 3. LINE VISIBILITY (keys 1-8 do the same)
                    ui.label(&UI_TEXT.tb_lines);
                    for (idx, asset) in CATALOG.iter().enumerate() {
                        ui.checkbox(&mut self.plot_visibility.lines[idx], asset.symbol);
                    }

                    ui.separator();

                    ui.checkbox(&mut self.show_market_table, &UI_TEXT.tb_markets);
                });
            });
    }

    pub(crate) fn render_cards_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("cards_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                render_metric_cards(ui);
            });
    }

    pub(crate) fn render_table_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("market_table_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.label_subheader(&UI_TEXT.heading_markets);
                ScrollArea::horizontal().show(ui, |ui| {
                    render_market_table(
                        ui,
                        &self.snapshot,
                        &mut self.sort_col,
                        &mut self.sort_dir,
                    );
                });
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric(
                        &UI_TEXT.sp_generated,
                        &self.snapshot.generated_at.format("%H:%M:%S").to_string(),
                        PLOT_CONFIG.color_text_neutral,
                    );

                    ui.separator();
                    ui.metric(
                        &UI_TEXT.sp_assets,
                        &CATALOG.len().to_string(),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    ui.metric(
                        &UI_TEXT.sp_trend_points,
                        &self.snapshot.trend.len().to_string(),
                        PLOT_CONFIG.color_text_neutral,
                    );
                    ui.metric(
                        &UI_TEXT.sp_spark_points,
                        &self
                            .snapshot
                            .sparklines
                            .first()
                            .map(|s| s.len())
                            .unwrap_or(0)
                            .to_string(),
                        PLOT_CONFIG.color_text_neutral,
                    );

                    if self.seeded {
                        ui.separator();
                        ui.label(
                            RichText::new(&UI_TEXT.sp_seeded)
                                .small()
                                .color(PLOT_CONFIG.color_warning),
                        );
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label_subheader(&UI_TEXT.heading_trend);
                });
                render_trend_plot(ui, &self.snapshot, &self.plot_visibility, self.plot_scale);
            });
    }
}
