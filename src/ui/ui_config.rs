use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

use crate::config::plot::PLOT_CONFIG;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::from_rgb(255, 215, 0), // Sets every heading
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(16, 18, 24), // Near-black slate behind the plot
        side_panel: Color32::from_rgb(25, 25, 25),
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }

    /// Frame for one metric card in the top grid
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: PLOT_CONFIG.color_card_background,
            stroke: Stroke::new(1.0, PLOT_CONFIG.color_widget_border),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }

    // Frame for the Plot area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin {
                left: 0,
                right: 8, // <--- THE GAP keeps the y-axis labels off the window edge
                top: 0,
                bottom: 0,
            },
            ..Default::default()
        }
    }
}
