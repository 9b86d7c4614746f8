//! Moving average indicators.

use stocklab_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the trailing `window` values, inclusive of the
/// current one. Absent for the first `window - 1` positions.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl Indicator for Sma {
    type Output = Option<f64>;

    fn compute(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = Vec::with_capacity(data.len());
        let window_f64 = self.window as f64;

        // Running sum; drop the element leaving the window each step.
        let mut sum = 0.0;
        for (i, &value) in data.iter().enumerate() {
            sum += value;
            if i >= self.window {
                sum -= data[i - self.window];
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
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Recursive exponential mean with smoothing factor `alpha = 2 / (span + 1)`,
/// seeded with the first input value. Defined from position 0; the first
/// roughly `span` outputs are biased toward the seed.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    alpha: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        let alpha = 2.0 / (span as f64 + 1.0);
        Self { span, alpha }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn compute(&self, data: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(data.len());
        let one_minus_alpha = 1.0 - self.alpha;

        let mut ema = match data.first() {
            Some(&first) => first,
            None => return result,
        };
        result.push(ema);

        for &value in &data[1..] {
            ema = value * self.alpha + ema * one_minus_alpha;
            result.push(ema);
        }

        result
    }

    fn window(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "EMA"
    }
}
