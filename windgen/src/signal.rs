use std::f64::consts::PI;

use nalgebra::DVector;

pub fn offset_sine(t: f64, freq: f64, peak: f64) -> f64 {
    (peak * (2.0 * PI * freq * t).sin() + peak) / 2.0
}

pub fn ramp_window(progress: f64) -> f64 {
    (progress * PI / 2.0).sin()
}

pub fn generate_offset_sine_wave(t: &DVector<f64>, freq: f64, peak: f64) -> DVector<f64> {
    t.map(|e| offset_sine(e, freq, peak))
}

pub fn time_vector(step: f64, count: usize) -> DVector<f64> {
    DVector::from_fn(count, |i, _| i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    #[test]
    fn test_offset_sine() {
        assert_relative_eq!(offset_sine(0.0, 1.0, 12.0), 6.0);
        assert_relative_eq!(offset_sine(0.25, 1.0, 12.0), 12.0);
        assert_relative_eq!(offset_sine(0.75, 1.0, 12.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ramp_window() {
        assert_relative_eq!(ramp_window(0.0), 0.0);
        assert_relative_eq!(ramp_window(0.5), std::f64::consts::FRAC_1_SQRT_2);
        assert_relative_eq!(ramp_window(1.0), 1.0);

        let mut previous = ramp_window(0.0);
        for i in 1..=100 {
            let current = ramp_window(i as f64 / 100.0);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_generate_offset_sine_wave() {
        let t = dvector![0.0, 0.25, 0.5, 0.75];
        let wave = generate_offset_sine_wave(&t, 1.0, 2.0);
        assert_relative_eq!(wave, dvector![1.0, 2.0, 1.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn test_time_vector() {
        let t = time_vector(0.5, 5);
        assert_eq!(t.len(), 5);
        assert_eq!(t, dvector![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(time_vector(0.5, 0).len(), 0);
    }
}
