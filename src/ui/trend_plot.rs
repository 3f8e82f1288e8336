use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, GridMark, HPlacement, Line, Plot, PlotPoints, VPlacement};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::assets::{ASSET_COUNT, CATALOG};
use crate::config::constants::TREND_POINTS;
use crate::config::plot::PLOT_CONFIG;
use crate::market::MarketSnapshot;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;

/// Per-asset line toggles, index-aligned with the catalog. Persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlotVisibility {
    pub lines: [bool; ASSET_COUNT],
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            lines: [true; ASSET_COUNT],
        }
    }
}

impl PlotVisibility {
    pub fn toggle(&mut self, idx: usize) {
        if let Some(flag) = self.lines.get_mut(idx) {
            *flag = !*flag;
        }
    }
}

/// How the y axis maps samples. `BandPct` remaps every sample to its own
/// band (0..100) so BTC at $30k and DOGE at $0.08 share one readable chart;
/// `Raw` shows dollar values and lets the big caps flatten the small ones,
/// exactly like a naive shared axis would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
pub enum PlotScale {
    #[default]
    #[strum(serialize = "Band %")]
    BandPct,
    #[strum(serialize = "Raw $")]
    Raw,
}

pub(crate) fn render_trend_plot(
    ui: &mut Ui,
    snapshot: &MarketSnapshot,
    visibility: &PlotVisibility,
    scale: PlotScale,
) {
    let (y_min, y_max) = y_bounds(visibility, scale);
    let y_pad = (y_max - y_min) * PLOT_CONFIG.plot_y_padding_pct;
    let x_pad = TREND_POINTS as f64 * PLOT_CONFIG.plot_x_padding_pct;

    Plot::new("trend_plot")
        .custom_x_axes(vec![create_day_axis()])
        .custom_y_axes(vec![create_value_axis(scale)])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(|input| {
            // Day marks every 5, minor every 1
            let mut marks = Vec::new();
            let (min, max) = input.bounds;
            let start = min.ceil() as i64;
            let end = max.floor() as i64;
            for d in start..=end {
                if d < 1 || d > TREND_POINTS as i64 {
                    continue;
                }
                let step = if d % 5 == 0 { 5.0 } else { 1.0 };
                marks.push(GridMark {
                    value: d as f64,
                    step_size: step,
                });
            }
            marks
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(1.0 - x_pad..=TREND_POINTS as f64 + x_pad);
            plot_ui.set_plot_bounds_y(y_min - y_pad..=y_max + y_pad);

            for (idx, asset) in CATALOG.iter().enumerate() {
                if !visibility.lines[idx] {
                    continue;
                }

                let points: Vec<[f64; 2]> = match scale {
                    PlotScale::Raw => snapshot.trend.line_points(idx),
                    PlotScale::BandPct => snapshot
                        .trend
                        .points
                        .iter()
                        .map(|p| [p.day as f64, asset.band.position(p.samples[idx]) * 100.0])
                        .collect(),
                };

                plot_ui.line(
                    Line::new(asset.symbol, PlotPoints::new(points))
                        .color(asset.color)
                        .width(PLOT_CONFIG.trend_line_width),
                );
            }
        });
}

/// Visible y extent before padding. Bands are static config, so no pass over
/// the sample data is needed.
fn y_bounds(visibility: &PlotVisibility, scale: PlotScale) -> (f64, f64) {
    match scale {
        PlotScale::BandPct => (0.0, 100.0),
        PlotScale::Raw => {
            let mut min = f64::MAX;
            let mut max = f64::MIN;
            for (idx, asset) in CATALOG.iter().enumerate() {
                if !visibility.lines[idx] {
                    continue;
                }
                min = min.min(asset.band.min);
                max = max.max(asset.band.max());
            }
            if min >= max {
                // Every line toggled off; keep the frame stable.
                (0.0, 1.0)
            } else {
                (min, max)
            }
        }
    }
}

fn create_day_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.clone())
        .formatter(|mark, _range| {
            let day = mark.value;
            // Only label whole days on the coarse marks
            if day.fract().abs() < f64::EPSILON && (day as i64) % 5 == 0 {
                format!("{}", day as i64)
            } else {
                String::new()
            }
        })
        .placement(VPlacement::Bottom)
}

fn create_value_axis(scale: PlotScale) -> AxisHints<'static> {
    let (label, formatter): (String, fn(GridMark, &std::ops::RangeInclusive<f64>) -> String) =
        match scale {
            PlotScale::Raw => (UI_TEXT.plot_y_axis_raw.clone(), |mark, _range| {
                format_price(mark.value)
            }),
            PlotScale::BandPct => (UI_TEXT.plot_y_axis_band.clone(), |mark, _range| {
                format!("{:.0}%", mark.value)
            }),
        };

    AxisHints::new_y()
        .label(label)
        .formatter(formatter)
        .placement(HPlacement::Right)
}
