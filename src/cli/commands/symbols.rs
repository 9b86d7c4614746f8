//! List symbols command.

use anyhow::Result;
use std::str::FromStr;
use stocklab_core::types::Exchange;
use stocklab_data::Catalog;

use crate::cli::SymbolsArgs;

pub fn run(args: SymbolsArgs) -> Result<()> {
    let catalog = Catalog::builtin();
    let exchange = args
        .exchange
        .as_deref()
        .map(Exchange::from_str)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    println!("Instrument Catalog");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let mut shown = 0;
    for instrument in catalog.instruments() {
        if let Some(exchange) = exchange {
            if instrument.exchange != exchange {
                continue;
            }
        }
        if let Some(sector) = &args.sector {
            if !instrument.sector.eq_ignore_ascii_case(sector) {
                continue;
            }
        }
        println!(
            "  {:<16} {:<40} {:<12} {:<6} {}",
            instrument.symbol,
            instrument.name,
            instrument.sector,
            instrument.market_cap,
            instrument.exchange
        );
        shown += 1;
    }

    println!();
    println!("{} of {} instruments", shown, catalog.len());
    println!();
    println!("Sectors: {}", catalog.sectors().join(", "));

    Ok(())
}
