//! The asset catalog. Static per session: names, symbols, seed metrics and
//! sampling bands never change after startup. Only the generated series do.

use eframe::egui::Color32;

use crate::market::{AssetSpec, PriceBand};

pub const CATALOG: &[AssetSpec] = &[
    AssetSpec {
        name: "Bitcoin",
        symbol: "BTC",
        base_price: 30_000.0,
        change_percent: 2.5,
        market_cap: 584_300_000_000.0,
        volume: 12_100_000_000.0,
        band: PriceBand::new(28_000.0, 5_000.0),
        color: Color32::from_rgb(0xf7, 0x93, 0x1a), // Bitcoin orange
    },
    AssetSpec {
        name: "Ethereum",
        symbol: "ETH",
        base_price: 2_000.0,
        change_percent: -1.8,
        market_cap: 240_500_000_000.0,
        volume: 6_800_000_000.0,
        band: PriceBand::new(1_800.0, 500.0),
        color: Color32::from_rgb(0x62, 0x7e, 0xea), // Ethereum blue
    },
    AssetSpec {
        name: "Cardano",
        symbol: "ADA",
        base_price: 0.5,
        change_percent: 3.2,
        market_cap: 17_200_000_000.0,
        volume: 412_000_000.0,
        band: PriceBand::new(0.4, 0.2),
        color: Color32::from_rgb(0x00, 0x33, 0xad),
    },
    AssetSpec {
        name: "Dogecoin",
        symbol: "DOGE",
        base_price: 0.08,
        change_percent: 1.5,
        market_cap: 11_100_000_000.0,
        volume: 268_000_000.0,
        band: PriceBand::new(0.05, 0.05),
        color: Color32::from_rgb(0xba, 0x9f, 0x33),
    },
    AssetSpec {
        name: "Solana",
        symbol: "SOL",
        base_price: 22.0,
        change_percent: 4.1,
        market_cap: 9_000_000_000.0,
        volume: 580_000_000.0,
        band: PriceBand::new(18.0, 8.0),
        color: Color32::from_rgb(0x99, 0x45, 0xff),
    },
    AssetSpec {
        name: "Polkadot",
        symbol: "DOT",
        base_price: 5.2,
        change_percent: -0.7,
        market_cap: 6_500_000_000.0,
        volume: 142_000_000.0,
        band: PriceBand::new(4.5, 1.5),
        color: Color32::from_rgb(0xe6, 0x00, 0x7a),
    },
    AssetSpec {
        name: "Chainlink",
        symbol: "LINK",
        base_price: 7.4,
        change_percent: 0.9,
        market_cap: 4_000_000_000.0,
        volume: 310_000_000.0,
        band: PriceBand::new(6.0, 2.5),
        color: Color32::from_rgb(0x2a, 0x5a, 0xda),
    },
    AssetSpec {
        name: "Avalanche",
        symbol: "AVAX",
        base_price: 12.5,
        change_percent: -2.3,
        market_cap: 4_300_000_000.0,
        volume: 190_000_000.0,
        band: PriceBand::new(10.0, 5.0),
        color: Color32::from_rgb(0xe8, 0x41, 0x42),
    },
];

pub const ASSET_COUNT: usize = CATALOG.len();

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eight_assets_with_unique_symbols() {
        assert_eq!(CATALOG.len(), 8);
        let symbols: HashSet<&str> = CATALOG.iter().map(|a| a.symbol).collect();
        assert_eq!(symbols.len(), CATALOG.len());
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        for asset in CATALOG {
            assert!(!asset.name.is_empty());
            assert!(!asset.symbol.is_empty());
            assert!(asset.base_price > 0.0, "{} base price", asset.symbol);
            assert!(asset.market_cap > 0.0, "{} market cap", asset.symbol);
            assert!(asset.volume > 0.0, "{} volume", asset.symbol);
        }
    }

    #[test]
    fn bands_are_positive_and_distinct() {
        for asset in CATALOG {
            assert!(asset.band.min > 0.0, "{} band floor", asset.symbol);
            assert!(asset.band.range > 0.0, "{} band width", asset.symbol);
        }
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert!(
                    (a.band.min, a.band.range) != (b.band.min, b.band.range),
                    "{} and {} share a band",
                    a.symbol,
                    b.symbol
                );
            }
        }
    }

    #[test]
    fn base_price_sits_inside_its_band() {
        for asset in CATALOG {
            assert!(
                asset.band.contains(asset.base_price),
                "{} base price {} outside its band",
                asset.symbol,
                asset.base_price
            );
        }
    }
}
