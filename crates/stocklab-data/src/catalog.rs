//! Built-in instrument catalog.
//!
//! A fixed list of exchange-listed symbols with sector and market-cap
//! classification. NSE symbols carry the ".NS" suffix, BSE scrip codes the
//! ".BO" suffix.

use stocklab_core::types::{Exchange, Instrument, MarketCapBand};

/// The instrument catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    instruments: Vec<Instrument>,
}

impl Catalog {
    /// The built-in NSE/BSE list.
    pub fn builtin() -> Self {
        use Exchange::{Bse, Nse};
        use MarketCapBand::{Large, Mid, Small};

        let instruments = vec![
            // NSE large caps
            Instrument::new("RELIANCE.NS", "Reliance Industries Ltd", "Oil & Gas", Large, Nse),
            Instrument::new("TCS.NS", "Tata Consultancy Services Ltd", "IT", Large, Nse),
            Instrument::new("HDFCBANK.NS", "HDFC Bank Ltd", "Banking", Large, Nse),
            Instrument::new("INFY.NS", "Infosys Ltd", "IT", Large, Nse),
            Instrument::new("HINDUNILVR.NS", "Hindustan Unilever Ltd", "FMCG", Large, Nse),
            Instrument::new("ITC.NS", "ITC Ltd", "FMCG", Large, Nse),
            Instrument::new("SBIN.NS", "State Bank of India", "Banking", Large, Nse),
            Instrument::new("BHARTIARTL.NS", "Bharti Airtel Ltd", "Telecom", Large, Nse),
            Instrument::new("ASIANPAINT.NS", "Asian Paints Ltd", "Paints", Large, Nse),
            Instrument::new("MARUTI.NS", "Maruti Suzuki India Ltd", "Auto", Large, Nse),
            Instrument::new("KOTAKBANK.NS", "Kotak Mahindra Bank Ltd", "Banking", Large, Nse),
            Instrument::new("LT.NS", "Larsen & Toubro Ltd", "Construction", Large, Nse),
            Instrument::new("AXISBANK.NS", "Axis Bank Ltd", "Banking", Large, Nse),
            Instrument::new("ICICIBANK.NS", "ICICI Bank Ltd", "Banking", Large, Nse),
            Instrument::new("BAJFINANCE.NS", "Bajaj Finance Ltd", "NBFC", Large, Nse),
            Instrument::new("HCLTECH.NS", "HCL Technologies Ltd", "IT", Large, Nse),
            Instrument::new("WIPRO.NS", "Wipro Ltd", "IT", Large, Nse),
            Instrument::new("SUNPHARMA.NS", "Sun Pharmaceutical Industries Ltd", "Pharma", Large, Nse),
            Instrument::new("TATAMOTORS.NS", "Tata Motors Ltd", "Auto", Large, Nse),
            Instrument::new("TATASTEEL.NS", "Tata Steel Ltd", "Steel", Large, Nse),
            // NSE mid caps
            Instrument::new("HDFCLIFE.NS", "HDFC Life Insurance Company Ltd", "Insurance", Mid, Nse),
            Instrument::new("DRREDDY.NS", "Dr. Reddy's Laboratories Ltd", "Pharma", Mid, Nse),
            Instrument::new("CIPLA.NS", "Cipla Ltd", "Pharma", Mid, Nse),
            Instrument::new("BRITANNIA.NS", "Britannia Industries Ltd", "FMCG", Mid, Nse),
            Instrument::new("DABUR.NS", "Dabur India Ltd", "FMCG", Mid, Nse),
            Instrument::new("SHREECEM.NS", "Shree Cement Ltd", "Cement", Mid, Nse),
            Instrument::new("AMBUJACEM.NS", "Ambuja Cements Ltd", "Cement", Mid, Nse),
            Instrument::new("MPHASIS.NS", "Mphasis Ltd", "IT", Mid, Nse),
            Instrument::new("EICHERMOT.NS", "Eicher Motors Ltd", "Auto", Mid, Nse),
            // NSE small caps
            Instrument::new("TATAPOWER.NS", "Tata Power Company Ltd", "Power", Small, Nse),
            Instrument::new("SAIL.NS", "Steel Authority of India Ltd", "Steel", Small, Nse),
            Instrument::new("VEDL.NS", "Vedanta Ltd", "Metals", Small, Nse),
            Instrument::new("PNB.NS", "Punjab National Bank", "Banking", Small, Nse),
            Instrument::new("FEDERALBNK.NS", "Federal Bank Ltd", "Banking", Small, Nse),
            Instrument::new("COFORGE.NS", "Coforge Ltd", "IT", Small, Nse),
            Instrument::new("BIOCON.NS", "Biocon Ltd", "Pharma", Small, Nse),
            // BSE scrip codes
            Instrument::new("500325.BO", "Reliance Industries Ltd", "Oil & Gas", Large, Bse),
            Instrument::new("532540.BO", "Tata Consultancy Services Ltd", "IT", Large, Bse),
            Instrument::new("500180.BO", "HDFC Bank Ltd", "Banking", Large, Bse),
            Instrument::new("500209.BO", "Infosys Ltd", "IT", Large, Bse),
            Instrument::new("500696.BO", "Hindustan Unilever Ltd", "FMCG", Large, Bse),
            Instrument::new("500875.BO", "ITC Ltd", "FMCG", Large, Bse),
            Instrument::new("500112.BO", "State Bank of India", "Banking", Large, Bse),
            Instrument::new("532500.BO", "Maruti Suzuki India Ltd", "Auto", Large, Bse),
        ];

        Self { instruments }
    }

    /// All instruments.
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Look up an instrument by exact symbol.
    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    /// Instruments listed on the given exchange.
    pub fn by_exchange(&self, exchange: Exchange) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter().filter(move |i| i.exchange == exchange)
    }

    /// Instruments in the given sector (case-insensitive).
    pub fn by_sector<'a>(&'a self, sector: &'a str) -> impl Iterator<Item = &'a Instrument> {
        self.instruments
            .iter()
            .filter(move |i| i.sector.eq_ignore_ascii_case(sector))
    }

    /// Distinct sectors, sorted.
    pub fn sectors(&self) -> Vec<&str> {
        let mut sectors: Vec<&str> = self.instruments.iter().map(|i| i.sector.as_str()).collect();
        sectors.sort_unstable();
        sectors.dedup();
        sectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();

        let reliance = catalog.get("RELIANCE.NS").unwrap();
        assert_eq!(reliance.name, "Reliance Industries Ltd");
        assert_eq!(reliance.exchange, Exchange::Nse);
        assert_eq!(reliance.market_cap, MarketCapBand::Large);

        assert!(catalog.get("AAPL").is_none());
    }

    #[test]
    fn test_exchange_filter() {
        let catalog = Catalog::builtin();
        let bse: Vec<_> = catalog.by_exchange(Exchange::Bse).collect();

        assert!(!bse.is_empty());
        assert!(bse.iter().all(|i| i.symbol.ends_with(".BO")));
    }

    #[test]
    fn test_sector_filter() {
        let catalog = Catalog::builtin();
        let banks: Vec<_> = catalog.by_sector("banking").collect();

        assert!(banks.len() >= 5);
        assert!(banks.iter().all(|i| i.sector == "Banking"));
    }

    #[test]
    fn test_sectors_are_distinct() {
        let catalog = Catalog::builtin();
        let sectors = catalog.sectors();

        assert!(sectors.contains(&"IT"));
        assert!(sectors.contains(&"Pharma"));
        let mut deduped = sectors.clone();
        deduped.dedup();
        assert_eq!(sectors.len(), deduped.len());
    }
}
