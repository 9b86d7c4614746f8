//! Instrument catalog types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// National Stock Exchange of India (".NS" suffix)
    Nse,
    /// Bombay Stock Exchange (".BO" suffix)
    Bse,
}

impl Exchange {
    /// Infer the exchange from a symbol suffix.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol.ends_with(".NS") {
            Some(Exchange::Nse)
        } else if symbol.ends_with(".BO") {
            Some(Exchange::Bse)
        } else {
            None
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Exchange::Nse => "NSE",
            Exchange::Bse => "BSE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Exchange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NSE" => Ok(Exchange::Nse),
            "BSE" => Ok(Exchange::Bse),
            _ => Err(format!("Invalid exchange: {}", s)),
        }
    }
}

/// Market capitalization band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketCapBand {
    Large,
    Mid,
    Small,
}

impl fmt::Display for MarketCapBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarketCapBand::Large => "Large",
            MarketCapBand::Mid => "Mid",
            MarketCapBand::Small => "Small",
        };
        write!(f, "{}", s)
    }
}

/// A listed instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Ticker symbol including exchange suffix, e.g. "RELIANCE.NS"
    pub symbol: String,
    /// Company name
    pub name: String,
    /// Sector classification
    pub sector: String,
    /// Market cap band
    pub market_cap: MarketCapBand,
    /// Listing exchange
    pub exchange: Exchange,
}

impl Instrument {
    pub fn new(
        symbol: &str,
        name: &str,
        sector: &str,
        market_cap: MarketCapBand,
        exchange: Exchange,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
            market_cap,
            exchange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_from_symbol() {
        assert_eq!(Exchange::from_symbol("RELIANCE.NS"), Some(Exchange::Nse));
        assert_eq!(Exchange::from_symbol("500325.BO"), Some(Exchange::Bse));
        assert_eq!(Exchange::from_symbol("AAPL"), None);
    }

    #[test]
    fn test_exchange_parse() {
        assert_eq!(Exchange::from_str("nse").unwrap(), Exchange::Nse);
        assert_eq!(Exchange::from_str("BSE").unwrap(), Exchange::Bse);
        assert!(Exchange::from_str("NYSE").is_err());
    }

    #[test]
    fn test_exchange_display() {
        assert_eq!(Exchange::Nse.to_string(), "NSE");
        assert_eq!(Exchange::Bse.to_string(), "BSE");
    }
}
