//! Momentum indicators.

use serde::{Deserialize, Serialize};
use stocklab_core::traits::{BarIndicator, Indicator};
use stocklab_core::types::Bar;

use crate::moving_average::Ema;

/// Relative Strength Index (RSI).
///
/// Plain rolling-mean variant: mean gain over mean loss across the trailing
/// `window` one-bar deltas (no Wilder smoothing). Needs `window` deltas, so
/// the first `window` positions are absent.
///
/// Degenerate windows resolve locally: zero mean loss with positive gains is
/// 100, all-zero deltas (0/0) stay absent.
#[derive(Debug, Clone)]
pub struct Rsi {
    window: usize,
}

impl Rsi {
    /// Create a new RSI indicator. The common window is 14.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl Indicator for Rsi {
    type Output = Option<f64>;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        if data.len() <= self.window {
            return vec![None; data.len()];
        }
        let mut result = vec![None; self.window];

        // Running sums of gains and losses over the trailing window of
        // one-bar deltas. Delta j covers data[j-1] -> data[j].
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        let window_f64 = self.window as f64;

        for i in 1..data.len() {
            let delta = data[i] - data[i - 1];
            if delta > 0.0 {
                gain_sum += delta;
            } else {
                loss_sum += -delta;
            }

            if i > self.window {
                let leaving = data[i - self.window] - data[i - self.window - 1];
                if leaving > 0.0 {
                    gain_sum -= leaving;
                } else {
                    loss_sum -= -leaving;
                }
            }

            if i >= self.window {
                let mean_gain = gain_sum / window_f64;
                let mean_loss = loss_sum / window_f64;
                result.push(rsi_value(mean_gain, mean_loss));
            }
        }

        result
    }

    fn window(&self) -> usize {
        // One extra bar to form the first delta.
        self.window + 1
    }

    fn name(&self) -> &'static str {
        "RSI"
    }
}

fn rsi_value(mean_gain: f64, mean_loss: f64) -> Option<f64> {
    if mean_loss <= 0.0 {
        if mean_gain <= 0.0 {
            // 0/0: a flat window has no momentum to measure.
            None
        } else {
            Some(100.0)
        }
    } else {
        Some(100.0 - 100.0 / (1.0 + mean_gain / mean_loss))
    }
}

/// One MACD output position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of the MACD line)
    pub signal: f64,
    /// Histogram (MACD - signal)
    pub histogram: f64,
}

/// MACD (Moving Average Convergence Divergence).
///
/// Built from the seeded [`Ema`], so every position is defined; the early
/// values inherit the EMA seed bias.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a MACD with the given spans. The classic setup is (12, 26, 9).
    pub fn new(fast_span: usize, slow_span: usize, signal_span: usize) -> Self {
        assert!(fast_span > 0 && slow_span > 0 && signal_span > 0);
        assert!(
            fast_span < slow_span,
            "Fast span must be less than slow span"
        );
        Self {
            fast: Ema::new(fast_span),
            slow: Ema::new(slow_span),
            signal: Ema::new(signal_span),
        }
    }
}

impl Indicator for Macd {
    type Output = MacdPoint;

    fn compute(&self, data: &[f64]) -> Vec<MacdPoint> {
        let fast = self.fast.compute(data);
        let slow = self.slow.compute(data);

        let macd_line: Vec<f64> = fast
            .iter()
            .zip(slow.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = self.signal.compute(&macd_line);

        macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdPoint {
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect()
    }

    fn window(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "MACD"
    }
}

/// One stochastic oscillator output position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticPoint {
    /// %K (fast stochastic); absent while the window fills or when the
    /// high/low range is zero.
    pub k: Option<f64>,
    /// %D (SMA of %K); absent until enough defined %K values exist.
    pub d: Option<f64>,
}

/// Stochastic oscillator.
///
/// %K places the close within the trailing high/low range; %D smooths %K.
/// A zero range leaves %K absent rather than substituting a midpoint.
#[derive(Debug, Clone)]
pub struct Stochastic {
    k_window: usize,
    d_window: usize,
}

impl Stochastic {
    /// Create a stochastic oscillator. The classic setup is (14, 3).
    pub fn new(k_window: usize, d_window: usize) -> Self {
        assert!(k_window > 0 && d_window > 0);
        Self { k_window, d_window }
    }
}

impl BarIndicator for Stochastic {
    type Output = StochasticPoint;

    fn compute(&self, bars: &[Bar]) -> Vec<StochasticPoint> {
        let mut k_values: Vec<Option<f64>> = Vec::with_capacity(bars.len());

        for i in 0..bars.len() {
            if i + 1 < self.k_window {
                k_values.push(None);
                continue;
            }
            let start = i + 1 - self.k_window;
            let highest = bars[start..=i]
                .iter()
                .map(|b| b.high)
                .fold(f64::NEG_INFINITY, f64::max);
            let lowest = bars[start..=i]
                .iter()
                .map(|b| b.low)
                .fold(f64::INFINITY, f64::min);

            let range = highest - lowest;
            if range == 0.0 {
                k_values.push(None);
            } else {
                k_values.push(Some(((bars[i].close - lowest) / range) * 100.0));
            }
        }

        let d_window_f64 = self.d_window as f64;
        let mut result = Vec::with_capacity(bars.len());

        for i in 0..bars.len() {
            let k = k_values[i];
            let d = if i + 1 >= self.d_window {
                let window = &k_values[i + 1 - self.d_window..=i];
                if window.iter().all(|k| k.is_some()) {
                    Some(window.iter().map(|k| k.unwrap()).sum::<f64>() / d_window_f64)
                } else {
                    None
                }
            } else {
                None
            };
            result.push(StochasticPoint { k, d });
        }

        result
    }

    fn window(&self) -> usize {
        self.k_window + self.d_window - 1
    }

    fn name(&self) -> &'static str {
        "Stochastic"
    }
}
