//! Ticker-to-asset-class heuristic used only as a fallback correlation
//! synthesis input (spec.md §4.2). Grounded in the tag sets the original
//! Python source hard-codes in `_generate_correlation_matrix`
//! (`original_source/PortfolioPath/backend/app/services/monte_carlo.py`).

use crate::engine::config::AssetClass;

const TECH_EQUITY: &[&str] = &["AAPL", "MSFT", "GOOGL", "GOOG", "NVDA", "META", "AMD", "QQQ"];
const EQUITY: &[&str] = &[
    "SPY", "VTI", "IWM", "AMZN", "TSLA", "INTC", "NFLX", "AAPL", "MSFT", "GOOGL", "GOOG", "NVDA",
    "META", "AMD", "QQQ",
];
const BOND: &[&str] = &["BND", "AGG", "TLT"];
const COMMODITY: &[&str] = &["GLD", "SLV", "USO"];

pub fn classify(ticker: &str) -> AssetClass {
    let upper = ticker.to_uppercase();
    let t = upper.as_str();
    if TECH_EQUITY.contains(&t) {
        AssetClass::TechEquity
    } else if BOND.contains(&t) {
        AssetClass::Bond
    } else if COMMODITY.contains(&t) {
        AssetClass::Commodity
    } else if EQUITY.contains(&t) {
        AssetClass::Equity
    } else {
        AssetClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_tickers() {
        assert_eq!(classify("NVDA"), AssetClass::TechEquity);
        assert_eq!(classify("tlt"), AssetClass::Bond);
        assert_eq!(classify("GLD"), AssetClass::Commodity);
        assert_eq!(classify("SPY"), AssetClass::Equity);
        assert_eq!(classify("ZZZZ"), AssetClass::Other);
    }
}
