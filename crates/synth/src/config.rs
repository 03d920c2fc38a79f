//! Generator settings.

use chrono::{DateTime, Utc};

use crate::error::SynthError;

/// Settings for [`generate_classroom()`](crate::generate_classroom).
///
/// Loads are in kW. The defaults describe a classroom building: 2 kW base
/// load, 50 W per occupant, a 1.5 kW daytime bump between 09:00 and 16:59,
/// Gaussian noise with 0.2 kW standard deviation, and a 0.5 kW floor.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Number of whole days to generate (24 rows each).
    days: usize,
    /// Timestamp of the first row.
    start: DateTime<Utc>,
    /// RNG seed; `None` draws from the OS.
    seed: Option<u64>,
    base_load: f64,
    per_person_load: f64,
    peak_bump: f64,
    noise_sd: f64,
    floor: f64,
}

impl SynthConfig {
    /// Creates a configuration for `days` days starting at `start`.
    pub fn new(days: usize, start: DateTime<Utc>) -> Self {
        Self {
            days,
            start,
            seed: None,
            base_load: 2.0,
            per_person_load: 0.05,
            peak_bump: 1.5,
            noise_sd: 0.2,
            floor: 0.5,
        }
    }

    /// Sets the RNG seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the always-on load.
    pub fn with_base_load(mut self, kw: f64) -> Self {
        self.base_load = kw;
        self
    }

    /// Sets the additional load per occupant.
    pub fn with_per_person_load(mut self, kw: f64) -> Self {
        self.per_person_load = kw;
        self
    }

    /// Sets the daytime (09-16h) load bump.
    pub fn with_peak_bump(mut self, kw: f64) -> Self {
        self.peak_bump = kw;
        self
    }

    /// Sets the noise standard deviation.
    pub fn with_noise_sd(mut self, kw: f64) -> Self {
        self.noise_sd = kw;
        self
    }

    /// Sets the lower clip applied to every draw.
    pub fn with_floor(mut self, kw: f64) -> Self {
        self.floor = kw;
        self
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn base_load(&self) -> f64 {
        self.base_load
    }

    pub fn per_person_load(&self) -> f64 {
        self.per_person_load
    }

    pub fn peak_bump(&self) -> f64 {
        self.peak_bump
    }

    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidConfig`] if `days` is zero, a load is
    /// negative or non-finite, or the floor exceeds the base load.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.days == 0 {
            return Err(invalid("days must be > 0".to_string()));
        }
        for (name, value) in [
            ("base_load", self.base_load),
            ("per_person_load", self.per_person_load),
            ("peak_bump", self.peak_bump),
            ("noise_sd", self.noise_sd),
            ("floor", self.floor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if self.floor > self.base_load {
            return Err(invalid(format!(
                "floor ({}) must not exceed base_load ({})",
                self.floor, self.base_load
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> SynthError {
    SynthError::InvalidConfig { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config() -> SynthConfig {
        SynthConfig::new(7, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn defaults_describe_a_classroom() {
        let c = config();
        assert_eq!(c.days(), 7);
        assert_eq!(c.seed(), None);
        assert_eq!(c.base_load(), 2.0);
        assert_eq!(c.per_person_load(), 0.05);
        assert_eq!(c.peak_bump(), 1.5);
        assert_eq!(c.noise_sd(), 0.2);
        assert_eq!(c.floor(), 0.5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let c = config().with_seed(9).with_base_load(3.0).with_noise_sd(0.0);
        assert_eq!(c.seed(), Some(9));
        assert_eq!(c.base_load(), 3.0);
        assert_eq!(c.noise_sd(), 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_days_rejected() {
        let c = SynthConfig::new(0, config().start());
        assert!(matches!(c.validate(), Err(SynthError::InvalidConfig { .. })));
    }

    #[test]
    fn negative_load_rejected() {
        let err = config().with_per_person_load(-0.1).validate().unwrap_err();
        assert!(err.to_string().contains("per_person_load"));
    }

    #[test]
    fn nan_noise_rejected() {
        let err = config().with_noise_sd(f64::NAN).validate().unwrap_err();
        assert!(err.to_string().contains("noise_sd"));
    }

    #[test]
    fn floor_above_base_rejected() {
        let err = config().with_floor(2.5).validate().unwrap_err();
        assert!(err.to_string().contains("floor"));
    }
}
