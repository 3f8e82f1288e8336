use eframe::egui::{Grid, RichText, Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoints};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::plot::PLOT_CONFIG;
use crate::config::{CATALOG, DF};
use crate::market::{AssetSpec, MarketSnapshot, Sparkline};
use crate::ui::styles::change_color;
use crate::ui::ui_text::{ICON_DOWN, ICON_UP, UI_TEXT};
use crate::ui::utils::{format_compact_usd, format_percent_magnitude, format_price};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default)]
pub(crate) enum SortColumn {
    #[strum(serialize = "Asset")]
    Name,
    #[strum(serialize = "Price")]
    Price,
    #[strum(serialize = "24h")]
    Change,
    #[default]
    #[strum(serialize = "Mkt Cap")]
    MarketCap,
    #[strum(serialize = "Vol 24h")]
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    fn toggle(&mut self) {
        *self = match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        };
    }

    fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => ICON_UP,
            Self::Desc => ICON_DOWN,
        }
    }
}

/// Catalog indices in display order. Sorting never touches the catalog
/// itself, only the view over it.
fn sorted_indices(col: SortColumn, dir: SortDirection) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..CATALOG.len()).collect();
    indices.sort_by(|&a, &b| {
        let (x, y) = (&CATALOG[a], &CATALOG[b]);
        let ord = match col {
            SortColumn::Name => x.name.cmp(y.name),
            SortColumn::Price => x.base_price.total_cmp(&y.base_price),
            SortColumn::Change => x.change_percent.total_cmp(&y.change_percent),
            SortColumn::MarketCap => x.market_cap.total_cmp(&y.market_cap),
            SortColumn::Volume => x.volume.total_cmp(&y.volume),
        };
        match dir {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    indices
}

pub(crate) fn render_market_table(
    ui: &mut Ui,
    snapshot: &MarketSnapshot,
    sort_col: &mut SortColumn,
    sort_dir: &mut SortDirection,
) {
    Grid::new("market_table")
        .striped(true)
        .spacing([24.0, 6.0])
        .min_col_width(70.0)
        .show(ui, |ui| {
            for col in SortColumn::iter() {
                render_header_cell(ui, col, sort_col, sort_dir);
            }
            ui.label(
                RichText::new(&UI_TEXT.col_trend)
                    .strong()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
            ui.end_row();

            for idx in sorted_indices(*sort_col, *sort_dir) {
                let asset = &CATALOG[idx];
                render_row(ui, asset, &snapshot.sparklines[idx]);
                ui.end_row();
            }
        });
}

fn render_header_cell(
    ui: &mut Ui,
    col: SortColumn,
    sort_col: &mut SortColumn,
    sort_dir: &mut SortDirection,
) {
    let is_active = *sort_col == col;
    let text = if is_active {
        format!("{} {}", col, sort_dir.arrow())
    } else {
        col.to_string()
    };

    let color = if is_active {
        PLOT_CONFIG.color_warning
    } else {
        PLOT_CONFIG.color_text_subdued
    };

    if ui
        .selectable_label(is_active, RichText::new(text).strong().color(color))
        .clicked()
    {
        if is_active {
            sort_dir.toggle();
        } else {
            *sort_col = col;
            *sort_dir = SortDirection::default();
        }
        if DF.log_table_sorting {
            log::info!("Market table sorted by {} {:?}", sort_col, sort_dir);
        }
    }
}

fn render_row(ui: &mut Ui, asset: &AssetSpec, sparkline: &Sparkline) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(asset.name).strong());
        ui.label(
            RichText::new(asset.symbol)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    });

    ui.label(RichText::new(format_price(asset.base_price)).color(PLOT_CONFIG.color_text_neutral));

    let arrow = if asset.is_up() { ICON_UP } else { ICON_DOWN };
    ui.label(
        RichText::new(format!(
            "{} {}",
            arrow,
            format_percent_magnitude(asset.change_percent)
        ))
        .color(change_color(asset.change_percent)),
    );

    ui.label(RichText::new(format_compact_usd(asset.market_cap)));
    ui.label(RichText::new(format_compact_usd(asset.volume)));

    render_sparkline(ui, asset, sparkline);
}

/// Tiny axis-less plot in the trend column. Fixed bounds so every row shares
/// the same visual scale regardless of its draws.
fn render_sparkline(ui: &mut Ui, asset: &AssetSpec, sparkline: &Sparkline) {
    let n = sparkline.len() as f64;

    Plot::new(("sparkline", asset.symbol))
        .width(PLOT_CONFIG.sparkline_width)
        .height(PLOT_CONFIG.sparkline_height)
        .show_axes(Vec2b::FALSE)
        .show_grid(Vec2b::FALSE)
        .show_x(false)
        .show_y(false)
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.5..=n + 0.5);
            plot_ui.set_plot_bounds_y(-5.0..=crate::config::constants::SPARKLINE_MAX + 5.0);
            plot_ui.line(
                Line::new("", PlotPoints::new(sparkline.line_points()))
                    .color(change_color(asset.change_percent))
                    .width(PLOT_CONFIG.sparkline_line_width),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_market_cap_desc() {
        let order = sorted_indices(SortColumn::default(), SortDirection::default());
        assert_eq!(CATALOG[order[0]].symbol, "BTC");
        assert_eq!(CATALOG[order[1]].symbol, "ETH");
        // Sorting is a view: the catalog itself stays in definition order.
        assert_eq!(CATALOG[0].symbol, "BTC");
    }

    #[test]
    fn ascending_change_starts_with_the_worst_performer() {
        let order = sorted_indices(SortColumn::Change, SortDirection::Asc);
        assert_eq!(CATALOG[order[0]].symbol, "AVAX"); // -2.3%
        assert_eq!(CATALOG[order[CATALOG.len() - 1]].symbol, "SOL"); // +4.1%
    }

    #[test]
    fn name_sort_is_alphabetical() {
        let order = sorted_indices(SortColumn::Name, SortDirection::Asc);
        let names: Vec<&str> = order.iter().map(|&i| CATALOG[i].name).collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn every_asset_appears_exactly_once() {
        for col in SortColumn::iter() {
            let mut order = sorted_indices(col, SortDirection::Desc);
            order.sort();
            let expected: Vec<usize> = (0..CATALOG.len()).collect();
            assert_eq!(order, expected);
        }
    }
}
