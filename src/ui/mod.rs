mod market_table;
mod metric_cards;
mod styles;
mod trend_plot;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use market_table::{SortColumn, SortDirection, render_market_table};
pub(crate) use metric_cards::render_metric_cards;
pub(crate) use styles::UiStyleExt;
pub(crate) use trend_plot::{PlotScale, PlotVisibility, render_trend_plot};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
