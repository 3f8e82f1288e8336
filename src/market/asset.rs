use eframe::egui::Color32;
use rand::Rng;

/// Half-open sampling interval for one asset. Every simulated price for the
/// asset falls in [min, min + range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub range: f64,
}

impl PriceBand {
    pub const fn new(min: f64, range: f64) -> Self {
        Self { min, range }
    }

    pub fn max(&self) -> f64 {
        self.min + self.range
    }

    /// One uniform sample from the band.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.random_range(self.min..self.max())
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max()
    }

    /// Where `value` sits inside the band, 0.0 at the floor, 1.0 at the cap.
    /// Used by the plot's normalized scale so a $0.05 coin and a $30k coin
    /// share one readable axis.
    pub fn position(&self, value: f64) -> f64 {
        if self.range <= f64::EPSILON {
            return 0.0;
        }
        (value - self.min) / self.range
    }
}

// Define the AssetSpec struct with all its properties
pub struct AssetSpec {
    pub name: &'static str,
    pub symbol: &'static str,

    // Static metrics, fixed at catalog-definition time
    pub base_price: f64,
    pub change_percent: f64,
    pub market_cap: f64,
    pub volume: f64,

    /// Sampling band for the trend series
    pub band: PriceBand,

    /// Line color on the trend plot
    pub color: Color32,
}

impl AssetSpec {
    pub fn is_up(&self) -> bool {
        self.change_percent >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn band_samples_stay_inside_the_band() {
        let band = PriceBand::new(28_000.0, 5_000.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = band.sample(&mut rng);
            assert!(band.contains(v), "sample {v} escaped [28000, 33000)");
        }
    }

    #[test]
    fn band_contains_is_half_open() {
        let band = PriceBand::new(1_800.0, 500.0);
        assert!(band.contains(1_800.0));
        assert!(band.contains(2_299.999));
        assert!(!band.contains(2_300.0));
        assert!(!band.contains(1_799.999));
    }

    #[test]
    fn band_position_maps_floor_and_cap() {
        let band = PriceBand::new(0.4, 0.2);
        assert!((band.position(0.4)).abs() < 1e-12);
        assert!((band.position(0.6) - 1.0).abs() < 1e-12);
        assert!((band.position(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_band_position_is_zero() {
        let band = PriceBand::new(10.0, 0.0);
        assert_eq!(band.position(10.0), 0.0);
    }
}
