//! Volatility indicators.

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use stocklab_core::traits::{BarIndicator, Indicator};
use stocklab_core::types::Bar;

/// One Bollinger Bands output position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    /// Upper band
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
}

/// Bollinger Bands.
///
/// Middle band is the trailing SMA; upper/lower sit `k` sample standard
/// deviations around it. The band width is therefore `2k` standard
/// deviations.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    window: usize,
    k: f64,
}

impl BollingerBands {
    /// Create Bollinger Bands. The classic setup is (20, 2.0).
    pub fn new(window: usize, k: f64) -> Self {
        assert!(window > 1, "Window must be greater than 1");
        assert!(k > 0.0, "Band multiplier must be positive");
        Self { window, k }
    }
}

impl Indicator for BollingerBands {
    type Output = Option<BollingerPoint>;

    fn compute(&self, data: &[f64]) -> Vec<Option<BollingerPoint>> {
        let mut result = Vec::with_capacity(data.len());
        let window_f64 = self.window as f64;

        let mut sum = 0.0;
        for (i, &value) in data.iter().enumerate() {
            sum += value;
            if i >= self.window {
                sum -= data[i - self.window];
            }
            if i + 1 < self.window {
                result.push(None);
                continue;
            }

            let middle = sum / window_f64;
            let std_dev = data[i + 1 - self.window..=i].iter().copied().std_dev();
            let band = self.k * std_dev;

            result.push(Some(BollingerPoint {
                upper: middle + band,
                middle,
                lower: middle - band,
            }));
        }

        result
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &'static str {
        "Bollinger Bands"
    }
}

/// Average True Range (ATR).
///
/// Arithmetic mean of the trailing `window` true ranges. The first bar has
/// no previous close, so its true range collapses to high - low.
#[derive(Debug, Clone)]
pub struct Atr {
    window: usize,
}

impl Atr {
    /// Create a new ATR indicator. The common window is 14.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl BarIndicator for Atr {
    type Output = Option<f64>;

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let mut tr = Vec::with_capacity(bars.len());
        let mut prev_close = None;
        for bar in bars {
            tr.push(bar.true_range(prev_close));
            prev_close = Some(bar.close);
        }

        let window_f64 = self.window as f64;
        let mut result = Vec::with_capacity(bars.len());
        let mut sum = 0.0;

        for (i, &value) in tr.iter().enumerate() {
            sum += value;
            if i >= self.window {
                sum -= tr[i - self.window];
            }
            if i + 1 >= self.window {
                result.push(Some(sum / window_f64));
            } else {
                result.push(None);
            }
        }

        result
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &'static str {
        "ATR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bars_from_hlc(data: &[(f64, f64, f64)]) -> Vec<Bar> {
        data.iter()
            .enumerate()
            .map(|(i, &(high, low, close))| {
                let date = NaiveDate::from_num_days_from_ce_opt(738000 + i as i32).unwrap();
                Bar::new(date, close, high, low, close, 1000)
            })
            .collect()
    }

    #[test]
    fn test_bollinger_width_is_4_sample_std_devs() {
        let bb = BollingerBands::new(20, 2.0);
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.1).sin() * 5.0)
            .collect();
        let result = bb.compute(&data);

        assert_eq!(result.len(), data.len());
        for value in &result[..19] {
            assert!(value.is_none());
        }
        for (i, point) in result.iter().enumerate().skip(19) {
            let point = point.unwrap();
            let std_dev = data[i - 19..=i].iter().copied().std_dev();
            assert!((point.upper - point.lower - 4.0 * std_dev).abs() < 1e-9);
            assert!(point.upper >= point.middle && point.middle >= point.lower);
        }
    }

    #[test]
    fn test_bollinger_middle_is_sma() {
        let bb = BollingerBands::new(5, 2.0);
        let data = vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
        let result = bb.compute(&data);

        assert!((result[4].unwrap().middle - 6.0).abs() < 1e-10); // (2+4+6+8+10)/5
        assert!((result[5].unwrap().middle - 8.0).abs() < 1e-10); // (4+6+8+10+12)/5
    }

    #[test]
    fn test_bollinger_constant_input_collapses() {
        let bb = BollingerBands::new(5, 2.0);
        let data = vec![100.0; 8];
        let result = bb.compute(&data);

        let point = result[7].unwrap();
        assert!((point.upper - 100.0).abs() < 1e-10);
        assert!((point.lower - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_atr_first_true_range_is_high_minus_low() {
        let atr = Atr::new(1);
        let bars = bars_from_hlc(&[(110.0, 95.0, 105.0)]);
        let result = atr.compute(&bars);

        // Window of 1: ATR(0) is exactly the first true range.
        assert!((result[0].unwrap() - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_atr_alignment_and_mean() {
        let atr = Atr::new(3);
        let data = vec![
            (10.0, 8.0, 9.0),
            (11.0, 9.0, 10.0),
            (12.0, 10.0, 11.0),
            (11.0, 9.0, 10.0),
            (13.0, 11.0, 12.0),
        ];
        let bars = bars_from_hlc(&data);
        let result = atr.compute(&bars);

        assert_eq!(result.len(), 5);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        // TR: [2, 2, 2, 2, 3] (last bar gaps over prev close 10 -> high 13)
        assert!((result[2].unwrap() - 2.0).abs() < 1e-10);
        assert!((result[3].unwrap() - 2.0).abs() < 1e-10);
        assert!((result[4].unwrap() - 7.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_atr_gap_uses_previous_close() {
        let atr = Atr::new(1);
        // Second bar gaps up: prev close 10, low 15, high 16.
        let bars = bars_from_hlc(&[(11.0, 9.0, 10.0), (16.0, 15.0, 16.0)]);
        let result = atr.compute(&bars);

        // TR = max(16-15, |16-10|, |15-10|) = 6
        assert!((result[1].unwrap() - 6.0).abs() < 1e-10);
    }
}
