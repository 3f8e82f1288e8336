//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Width of the per-asset trend lines
    pub trend_line_width: f32,
    /// Width of the inline sparkline stroke
    pub sparkline_line_width: f32,
    /// Inline sparkline cell size (pixels)
    pub sparkline_width: f32,
    pub sparkline_height: f32,

    /// Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    pub plot_x_padding_pct: f64,

    /// Plot x axis target label count
    pub plot_axis_divisions: f64,

    // --- SEMANTIC COLORS ---
    pub color_up: Color32,
    pub color_down: Color32,

    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32, // For the galley tint (Light Gray)
    pub color_text_subdued: Color32,

    // UI WIDGET STYLES
    pub color_card_background: Color32, // Dark background for metric cards
    pub color_widget_border: Color32,   // Subtle border
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    trend_line_width: 2.0,
    sparkline_line_width: 1.5,
    sparkline_width: 120.0,
    sparkline_height: 22.0,

    plot_y_padding_pct: 0.04,

    // X-Axis Padding (Horizontal)
    // 2% of the width is added to Left and Right, so day 1 and day 30 don't
    // sit flush against the plot frame.
    plot_x_padding_pct: 0.02,

    plot_axis_divisions: 10.0,

    // SEMANTICS
    color_up: Color32::from_rgb(100, 255, 100),
    color_down: Color32::from_rgb(255, 80, 80),

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    // UI WIDGETS
    color_card_background: Color32::from_black_alpha(40),
    color_widget_border: Color32::from_gray(60),
};
