use std::sync::LazyLock;

pub const ICON_UP: &str = "\u{25b2}"; // ▲
pub const ICON_DOWN: &str = "\u{25bc}"; // ▼
pub const ICON_REFRESH: &str = "\u{1f504}"; // 🔄

pub struct UiText {
    pub app_title: String,

    // --- Toolbar ---
    pub tb_refresh: String,
    pub tb_refresh_hover: String,
    pub tb_scale: String,
    pub tb_markets: String,
    pub tb_lines: String,

    // --- Panel headings ---
    pub heading_trend: String,
    pub heading_markets: String,

    // --- Market table ---
    pub col_trend: String,

    // --- Status panel ---
    pub sp_generated: String,
    pub sp_assets: String,
    pub sp_trend_points: String,
    pub sp_spark_points: String,
    pub sp_seeded: String,

    // --- Plot axes ---
    pub plot_x_axis: String,
    pub plot_y_axis_raw: String,
    pub plot_y_axis_band: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Crypto Pulse".to_string(),

    tb_refresh: format!("{} Refresh", ICON_REFRESH),
    tb_refresh_hover: "Discard and regenerate all series (R)".to_string(),
    tb_scale: "Scale:".to_string(),
    tb_markets: "Markets".to_string(),
    tb_lines: "Lines:".to_string(),

    heading_trend: "Price Trends (30 Days)".to_string(),
    heading_markets: "Markets".to_string(),

    col_trend: "Trend".to_string(),

    sp_generated: "Generated".to_string(),
    sp_assets: "assets".to_string(),
    sp_trend_points: "trend pts".to_string(),
    sp_spark_points: "spark pts".to_string(),
    sp_seeded: "SEEDED RUN".to_string(),

    plot_x_axis: "Day".to_string(),
    plot_y_axis_raw: "Price (USD)".to_string(),
    plot_y_axis_band: "Band position (%)".to_string(),
});
