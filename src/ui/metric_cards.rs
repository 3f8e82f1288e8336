use eframe::egui::{Align, Layout, RichText, Ui};

use crate::config::CATALOG;
use crate::config::plot::PLOT_CONFIG;
use crate::ui::UI_CONFIG;
use crate::ui::styles::change_color;
use crate::ui::ui_text::{ICON_DOWN, ICON_UP};
use crate::ui::utils::{format_percent_magnitude, format_price};

const CARDS_PER_ROW: usize = 4;

/// The top grid of per-asset metric cards: name, symbol, price, 24h change.
/// All of it is static catalog data; only the trend plot and sparklines
/// change on refresh.
pub(crate) fn render_metric_cards(ui: &mut Ui) {
    let spacing = 8.0;
    let card_width =
        (ui.available_width() - spacing * (CARDS_PER_ROW as f32 - 1.0)) / CARDS_PER_ROW as f32;

    ui.spacing_mut().item_spacing = [spacing, spacing].into();

    for row in CATALOG.chunks(CARDS_PER_ROW) {
        ui.horizontal(|ui| {
            for asset in row {
                render_card(ui, asset, card_width);
            }
        });
    }
}

fn render_card(ui: &mut Ui, asset: &crate::market::AssetSpec, width: f32) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(width - 20.0); // Frame inner margin eats into the budget

        ui.horizontal(|ui| {
            ui.label(RichText::new(asset.name).strong().small());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(asset.symbol)
                        .small()
                        .color(PLOT_CONFIG.color_text_subdued),
                );
            });
        });

        ui.label(
            RichText::new(format_price(asset.base_price))
                .size(18.0)
                .strong()
                .color(PLOT_CONFIG.color_text_primary),
        );

        let arrow = if asset.is_up() { ICON_UP } else { ICON_DOWN };
        ui.label(
            RichText::new(format!(
                "{} {}",
                arrow,
                format_percent_magnitude(asset.change_percent)
            ))
            .small()
            .color(change_color(asset.change_percent)),
        );
    });
}
