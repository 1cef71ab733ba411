use crate::error::WindProfileError;

pub const DEFAULT_FREQUENCY: f64 = 0.2475;
pub const DEFAULT_SAMPLES_PER_PERIOD: usize = 30;
pub const DEFAULT_DURATION: f64 = 121.0;
pub const DEFAULT_PEAK_SPEED: f64 = 12.0;
pub const DEFAULT_RAMP_START: f64 = 5.0;
pub const DEFAULT_RAMP_DURATION: f64 = 10.0;

/// Columns that hold the same value on every row of the profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuxiliaryFields {
    pub direction: f64,
    pub vertical_speed: f64,
    pub horizontal_shear: f64,
    pub vertical_shear: f64,
    pub linear_vertical_shear: f64,
    pub gust_speed: f64,
}

impl Default for AuxiliaryFields {
    fn default() -> Self {
        Self {
            direction: 0.0,
            vertical_speed: 0.0,
            horizontal_shear: 0.2,
            vertical_shear: 0.0,
            linear_vertical_shear: 0.0,
            gust_speed: 0.0,
        }
    }
}

impl AuxiliaryFields {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.direction,
            self.vertical_speed,
            self.horizontal_shear,
            self.vertical_shear,
            self.linear_vertical_shear,
            self.gust_speed,
        ]
    }
}

/// Parameters of a ramped sinusoidal wind profile.
///
/// `frequency` is in Hz, `duration`, `ramp_start` and `ramp_duration` in
/// seconds. `peak_speed` is the upper bound of the steady-state sinusoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindProfileConfig {
    pub frequency: f64,
    pub samples_per_period: usize,
    pub duration: f64,
    pub peak_speed: f64,
    pub ramp_start: f64,
    pub ramp_duration: f64,
    pub aux: AuxiliaryFields,
}

impl Default for WindProfileConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            samples_per_period: DEFAULT_SAMPLES_PER_PERIOD,
            duration: DEFAULT_DURATION,
            peak_speed: DEFAULT_PEAK_SPEED,
            ramp_start: DEFAULT_RAMP_START,
            ramp_duration: DEFAULT_RAMP_DURATION,
            aux: AuxiliaryFields::default(),
        }
    }
}

impl WindProfileConfig {
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn time_step(&self) -> f64 {
        1.0 / (self.frequency * self.samples_per_period as f64)
    }

    pub fn sample_count(&self) -> usize {
        self.checked_sample_count().unwrap_or(usize::MAX)
    }

    fn checked_sample_count(&self) -> Option<usize> {
        let steps = (self.duration / self.time_step()).floor();
        if steps.is_finite() && steps < usize::MAX as f64 {
            (steps as usize).checked_add(1)
        } else {
            None
        }
    }

    pub fn ramp_end(&self) -> f64 {
        self.ramp_start + self.ramp_duration
    }

    pub fn validate(&self) -> Result<(), WindProfileError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(WindProfileError::invalid(
                "frequency",
                self.frequency,
                "must be finite and positive",
            ));
        }
        if self.samples_per_period == 0 {
            return Err(WindProfileError::invalid(
                "samples_per_period",
                self.samples_per_period,
                "must be positive",
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(WindProfileError::invalid(
                "duration",
                self.duration,
                "must be finite and positive",
            ));
        }
        if !self.ramp_duration.is_finite() || self.ramp_duration <= 0.0 {
            return Err(WindProfileError::invalid(
                "ramp_duration",
                self.ramp_duration,
                "must be finite and positive",
            ));
        }
        if !self.ramp_start.is_finite() || self.ramp_start < 0.0 {
            return Err(WindProfileError::invalid(
                "ramp_start",
                self.ramp_start,
                "must be finite and non-negative",
            ));
        }
        if !self.peak_speed.is_finite() || self.peak_speed < 0.0 {
            return Err(WindProfileError::invalid(
                "peak_speed",
                self.peak_speed,
                "must be finite and non-negative",
            ));
        }
        let time_step = self.time_step();
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(WindProfileError::invalid(
                "time_step",
                time_step,
                "derived step must be finite and positive",
            ));
        }
        if self.checked_sample_count().is_none() {
            return Err(WindProfileError::invalid(
                "sample_count",
                self.duration / time_step,
                "duration spans more samples than can be indexed",
            ));
        }
        if let Some((name, value)) = self
            .aux
            .as_array()
            .iter()
            .zip(AUX_NAMES)
            .find(|(value, _)| !value.is_finite())
            .map(|(value, name)| (name, *value))
        {
            return Err(WindProfileError::invalid(name, value, "must be finite"));
        }

        Ok(())
    }
}

const AUX_NAMES: [&str; 6] = [
    "direction",
    "vertical_speed",
    "horizontal_shear",
    "vertical_shear",
    "linear_vertical_shear",
    "gust_speed",
];
