// Top Level Constants

/// Points in the simulated 30-day price trend. Every generated series has
/// exactly this many, one sample per asset per point.
pub const TREND_POINTS: usize = 30;

/// Points in each per-asset sparkline.
pub const SPARKLINE_POINTS: usize = 20;

/// Sparkline samples are uniform in [0, SPARKLINE_MAX).
pub const SPARKLINE_MAX: f64 = 100.0;
