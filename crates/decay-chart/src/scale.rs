//! Linear domain-to-range mapping for chart axes.

/// Maps a data domain onto pixel coordinates.
///
/// The range may be inverted (`range_min > range_max`), which is how the
/// vertical axis maps fractions onto a top-left-origin canvas.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        LinearScale {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    /// Map a domain value into the range, clamped to the range ends.
    /// A degenerate domain (zero or negative width) maps everything to
    /// the range start.
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span <= 0.0 {
            return self.range_min;
        }
        let t = ((value - self.domain_min) / span).clamp(0.0, 1.0);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// `count + 1` evenly spaced domain values covering the domain ends.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return vec![self.domain_min];
        }
        let span = self.domain_max - self.domain_min;
        (0..=count)
            .map(|index| self.domain_min + span * index as f64 / count as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_map_to_range_ends() {
        let scale = LinearScale::new(0.0, 10.0, 100.0, 500.0);
        assert!((scale.map(0.0) - 100.0).abs() < 1e-10);
        assert!((scale.map(10.0) - 500.0).abs() < 1e-10);
        assert!((scale.map(5.0) - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_out_of_domain_values_clamp() {
        let scale = LinearScale::new(0.0, 10.0, 100.0, 500.0);
        assert!((scale.map(-3.0) - 100.0).abs() < 1e-10);
        assert!((scale.map(42.0) - 500.0).abs() < 1e-10);
    }

    #[test]
    fn test_inverted_range_for_vertical_axis() {
        // Fractions 0..1 onto pixel rows 560 (bottom) .. 40 (top).
        let scale = LinearScale::new(0.0, 1.0, 560.0, 40.0);
        assert!((scale.map(0.0) - 560.0).abs() < 1e-10);
        assert!((scale.map(1.0) - 40.0).abs() < 1e-10);
        assert!((scale.map(0.5) - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_domain_collapses() {
        let scale = LinearScale::new(0.0, 0.0, 100.0, 500.0);
        assert!((scale.map(0.0) - 100.0).abs() < 1e-10);
        assert!((scale.map(7.0) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_tick_spacing() {
        let scale = LinearScale::new(0.0, 100.0, 0.0, 1.0);
        let ticks = scale.ticks(4);
        assert_eq!(ticks.len(), 5);
        assert!((ticks[0] - 0.0).abs() < 1e-10);
        assert!((ticks[2] - 50.0).abs() < 1e-10);
        assert!((ticks[4] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_tick_count() {
        let scale = LinearScale::new(2.0, 8.0, 0.0, 1.0);
        assert_eq!(scale.ticks(0), vec![2.0]);
    }
}
