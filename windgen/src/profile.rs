use std::iter::FusedIterator;
use std::ops::Range;

use log::debug;
use nalgebra::DVector;

use crate::config::WindProfileConfig;
use crate::error::WindProfileError;
use crate::sample::Sample;
use crate::signal::{generate_offset_sine_wave, offset_sine, ramp_window, time_vector};

#[derive(Clone, Copy, Debug)]
pub struct WindProfileGenerator {
    config: WindProfileConfig,
    time_step: f64,
    sample_count: usize,
}

impl WindProfileGenerator {
    pub fn new(config: WindProfileConfig) -> Result<Self, WindProfileError> {
        config.validate()?;
        let time_step = config.time_step();
        let sample_count = config.sample_count();
        debug!(
            "wind profile: frequency={} Hz, time_step={} s, sample_count={}",
            config.frequency, time_step, sample_count
        );

        Ok(Self {
            config,
            time_step,
            sample_count,
        })
    }

    pub fn config(&self) -> &WindProfileConfig {
        &self.config
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.time_step
    }

    /// Dead zone before `ramp_start`, a sine-windowed ramp up to `ramp_end`,
    /// then the full offset sinusoid.
    pub fn wind_speed(&self, t: f64) -> f64 {
        let config = &self.config;
        if t < config.ramp_start {
            return 0.0;
        }

        let steady = offset_sine(t, config.frequency, config.peak_speed);
        if t < config.ramp_end() {
            ramp_window((t - config.ramp_start) / config.ramp_duration) * steady
        } else {
            steady
        }
    }

    pub fn sample(&self, index: usize) -> Sample {
        let time = self.time(index);
        Sample {
            time,
            wind_speed: self.wind_speed(time),
            aux: self.config.aux,
        }
    }

    pub fn generate(&self) -> Samples {
        Samples {
            generator: *self,
            indices: 0..self.sample_count,
        }
    }

    pub fn times(&self) -> DVector<f64> {
        time_vector(self.time_step, self.sample_count)
    }

    pub fn wind_speeds(&self) -> DVector<f64> {
        self.times().map(|t| self.wind_speed(t))
    }

    pub fn steady_state_speeds(&self) -> DVector<f64> {
        generate_offset_sine_wave(&self.times(), self.config.frequency, self.config.peak_speed)
    }
}

#[derive(Clone, Debug)]
pub struct Samples {
    generator: WindProfileGenerator,
    indices: Range<usize>,
}

impl Iterator for Samples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        self.indices.next().map(|i| self.generator.sample(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Sample> {
        self.indices.nth(n).map(|i| self.generator.sample(i))
    }
}

impl DoubleEndedIterator for Samples {
    fn next_back(&mut self) -> Option<Sample> {
        self.indices.next_back().map(|i| self.generator.sample(i))
    }
}

impl ExactSizeIterator for Samples {}

impl FusedIterator for Samples {}
