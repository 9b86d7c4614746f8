//! Volume indicators.

use serde::{Deserialize, Serialize};
use stocklab_core::traits::BarIndicator;
use stocklab_core::types::Bar;

/// One volume output position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    /// Trailing SMA of volume
    pub sma: Option<f64>,
    /// Current volume relative to its SMA; absent when the SMA is zero.
    pub ratio: Option<f64>,
}

/// Volume SMA and volume ratio.
#[derive(Debug, Clone)]
pub struct VolumeStats {
    window: usize,
}

impl VolumeStats {
    /// Create volume stats over the given window. The common window is 20.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "Window must be greater than 0");
        Self { window }
    }
}

impl BarIndicator for VolumeStats {
    type Output = VolumePoint;

    fn compute(&self, bars: &[Bar]) -> Vec<VolumePoint> {
        let mut result = Vec::with_capacity(bars.len());
        let window_f64 = self.window as f64;

        let mut sum = 0u64;
        for (i, bar) in bars.iter().enumerate() {
            sum += bar.volume;
            if i >= self.window {
                sum -= bars[i - self.window].volume;
            }
            if i + 1 < self.window {
                result.push(VolumePoint {
                    sma: None,
                    ratio: None,
                });
                continue;
            }

            let sma = sum as f64 / window_f64;
            let ratio = if sma > 0.0 {
                Some(bar.volume as f64 / sma)
            } else {
                None
            };
            result.push(VolumePoint {
                sma: Some(sma),
                ratio,
            });
        }

        result
    }

    fn window(&self) -> usize {
        self.window
    }

    fn name(&self) -> &'static str {
        "Volume SMA"
    }
}
