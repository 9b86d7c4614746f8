//! Technical indicator pipeline over daily bar series.
//!
//! This crate computes the standard indicator set over an ordered price
//! series and returns it index-aligned with the input:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD, Stochastic)
//! - Volatility indicators (ATR, Bollinger Bands)
//! - Volume SMA and volume ratio
//!
//! Every computation is pure and position-based: the value at position `i`
//! depends only on bars at positions `<= i`, and a field stays absent
//! (`None`) until its trailing window is filled. The [`pipeline`] module
//! assembles the per-indicator outputs into [`stocklab_core::IndicatorRow`]s.

pub mod momentum;
pub mod moving_average;
pub mod pipeline;
pub mod snapshot;
pub mod volatility;
pub mod volume;

pub use momentum::{Macd, MacdPoint, Rsi, Stochastic, StochasticPoint};
pub use moving_average::{Ema, Sma};
pub use pipeline::{IndicatorConfig, Pipeline};
pub use snapshot::IndicatorSnapshot;
pub use volatility::{Atr, BollingerBands, BollingerPoint};
pub use volume::{VolumePoint, VolumeStats};
