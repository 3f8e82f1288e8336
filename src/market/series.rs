use rand::Rng;

use crate::config::constants::{SPARKLINE_MAX, SPARKLINE_POINTS, TREND_POINTS};
use crate::market::AssetSpec;

// ============================================================================
// TrendSeries: the 30-day simulated history for every tracked asset
// ============================================================================

/// One simulated day. `samples` is index-aligned with the asset catalog,
/// one independent uniform draw per asset.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub day: usize,
    pub samples: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Fresh 30-point series, no dependency on any prior output. Each call
    /// draws every sample anew; nothing is cached, so a refresh visibly
    /// changes the plot.
    pub fn generate(assets: &[AssetSpec], rng: &mut impl Rng) -> Self {
        let points = (1..=TREND_POINTS)
            .map(|day| TrendPoint {
                day,
                samples: assets.iter().map(|a| a.band.sample(rng)).collect(),
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// [day, value] pairs for one asset, ready for egui_plot.
    pub fn line_points(&self, asset_idx: usize) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.day as f64, p.samples[asset_idx]])
            .collect()
    }

    /// Flat copy of every sample in generation order. Handy for whole-series
    /// comparisons (refresh must replace everything).
    pub fn flatten(&self) -> Vec<f64> {
        self.points
            .iter()
            .flat_map(|p| p.samples.iter().copied())
            .collect()
    }
}

// ============================================================================
// Sparkline: 20 compact samples per asset for the market table
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub values: Vec<f64>,
}

impl Sparkline {
    /// 20 uniform draws in [0, 100), regenerated wholesale on every call.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let values = (0..SPARKLINE_POINTS)
            .map(|_| rng.random_range(0.0..SPARKLINE_MAX))
            .collect();

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// [index, value] pairs for the inline table plot, 1-based like the
    /// trend series.
    pub fn line_points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| [(i + 1) as f64, *v])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::assets::CATALOG;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn trend_series_has_exactly_thirty_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = TrendSeries::generate(CATALOG, &mut rng);
        assert_eq!(series.len(), TREND_POINTS);
        for (i, point) in series.points.iter().enumerate() {
            assert_eq!(point.day, i + 1);
            assert_eq!(point.samples.len(), CATALOG.len());
        }
    }

    #[test]
    fn trend_samples_fall_inside_each_assets_band() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let series = TrendSeries::generate(CATALOG, &mut rng);
            for point in &series.points {
                for (asset, sample) in CATALOG.iter().zip(&point.samples) {
                    assert!(
                        asset.band.contains(*sample),
                        "{} sample {} outside [{}, {})",
                        asset.symbol,
                        sample,
                        asset.band.min,
                        asset.band.max()
                    );
                }
            }
        }
    }

    #[test]
    fn consecutive_unseeded_series_differ() {
        // Non-determinism property: not strict inequality, but 240 fresh
        // uniform draws colliding exactly is beyond astronomical.
        let mut rng = rand::rng();
        let a = TrendSeries::generate(CATALOG, &mut rng);
        let b = TrendSeries::generate(CATALOG, &mut rng);
        assert_ne!(a.flatten(), b.flatten());
    }

    #[test]
    fn sparkline_has_twenty_values_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let spark = Sparkline::generate(&mut rng);
            assert_eq!(spark.len(), SPARKLINE_POINTS);
            for v in &spark.values {
                assert!((0.0..SPARKLINE_MAX).contains(v), "value {v} outside [0, 100)");
            }
        }
    }

    #[test]
    fn consecutive_sparklines_differ() {
        let mut rng = rand::rng();
        let a = Sparkline::generate(&mut rng);
        let b = Sparkline::generate(&mut rng);
        assert_ne!(a.values, b.values);
    }

    #[test]
    fn line_points_are_one_based_and_aligned() {
        let mut rng = StdRng::seed_from_u64(4);
        let series = TrendSeries::generate(CATALOG, &mut rng);
        let pts = series.line_points(0);
        assert_eq!(pts.len(), TREND_POINTS);
        assert_eq!(pts[0][0], 1.0);
        assert_eq!(pts[TREND_POINTS - 1][0], TREND_POINTS as f64);
        assert_eq!(pts[5][1], series.points[5].samples[0]);
    }
}
