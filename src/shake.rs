use crate::config::SiteConfig;

/// Acceleration including gravity; axes the device does not report are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSample {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl MotionSample {
    pub fn magnitude(&self) -> f64 {
        [self.x, self.y, self.z]
            .into_iter()
            .map(|axis| axis.filter(|value| value.is_finite()).unwrap_or(0.0).abs())
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShakeDetector {
    threshold: f64,
    min_interval_ms: f64,
    shakes_to_trigger: u32,
    last_shake_ms: Option<f64>,
    count: u32,
}

impl ShakeDetector {
    pub fn new(threshold: f64, min_interval_ms: f64, shakes_to_trigger: u32) -> Self {
        Self {
            threshold,
            min_interval_ms,
            shakes_to_trigger: shakes_to_trigger.max(1),
            last_shake_ms: None,
            count: 0,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.shake_threshold, config.shake_interval_ms, config.shakes_to_trigger)
    }

    /// Feeds one motion sample taken at `now_ms`. Returns true when this
    /// sample completes the run of shakes that should open the popup.
    pub fn register(&mut self, sample: MotionSample, now_ms: f64) -> bool {
        if sample.magnitude() <= self.threshold {
            return false;
        }
        if let Some(last) = self.last_shake_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }

        self.last_shake_ms = Some(now_ms);
        self.count += 1;

        if self.count >= self.shakes_to_trigger {
            self.count = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
impl ShakeDetector {
    fn count(&self) -> u32 {
        self.count
    }
}
