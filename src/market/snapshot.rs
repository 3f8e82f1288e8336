use chrono::{DateTime, Local};
use rand::Rng;

use crate::market::{AssetSpec, Sparkline, TrendSeries};

/// Everything the dashboard shows for one generation: the 30-day trend plus
/// one sparkline per asset, stamped with the wall-clock time it was made.
///
/// A refresh builds a whole new snapshot and drops this one. The series are
/// never patched in place.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub trend: TrendSeries,
    pub sparklines: Vec<Sparkline>,
    pub generated_at: DateTime<Local>,
}

impl MarketSnapshot {
    pub fn generate(assets: &[AssetSpec], rng: &mut impl Rng) -> Self {
        Self {
            trend: TrendSeries::generate(assets, rng),
            sparklines: assets.iter().map(|_| Sparkline::generate(rng)).collect(),
            generated_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::assets::CATALOG;
    use crate::config::constants::{SPARKLINE_POINTS, TREND_POINTS};

    #[test]
    fn snapshot_carries_one_sparkline_per_asset() {
        let mut rng = rand::rng();
        let snap = MarketSnapshot::generate(CATALOG, &mut rng);
        assert_eq!(snap.trend.len(), TREND_POINTS);
        assert_eq!(snap.sparklines.len(), CATALOG.len());
        for spark in &snap.sparklines {
            assert_eq!(spark.len(), SPARKLINE_POINTS);
        }
    }

    #[test]
    fn regeneration_replaces_the_whole_snapshot() {
        let mut rng = rand::rng();
        let old = MarketSnapshot::generate(CATALOG, &mut rng);
        let old_trend = old.trend.flatten();
        let old_sparks: Vec<Vec<f64>> =
            old.sparklines.iter().map(|s| s.values.clone()).collect();

        let new = MarketSnapshot::generate(CATALOG, &mut rng);

        // Same shape, entirely new values. No element of the old sequence
        // survives into the new one by construction; the draws being fresh is
        // what we can observe.
        assert_eq!(new.trend.len(), TREND_POINTS);
        assert_ne!(new.trend.flatten(), old_trend);
        for (new_spark, old_values) in new.sparklines.iter().zip(&old_sparks) {
            assert_eq!(new_spark.len(), SPARKLINE_POINTS);
            assert_ne!(&new_spark.values, old_values);
        }
    }
}
