/// The interval `[start, end]` over which an initial value problem is solved.
///
/// `start` may be greater than `end`, in which case the problem is integrated
/// backward in time with a negative step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    /// Creates a span from `start` to `end`.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns the signed length `end - start`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if both endpoints are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl From<[f64; 2]> for TimeSpan {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}

impl From<(f64, f64)> for TimeSpan {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_signed() {
        assert_eq!(TimeSpan::new(0.0, 5.0).length(), 5.0);
        assert_eq!(TimeSpan::new(5.0, 0.0).length(), -5.0);
    }

    #[test]
    fn converts_from_pairs() {
        assert_eq!(TimeSpan::from([1.0, 2.0]), TimeSpan::new(1.0, 2.0));
        assert_eq!(TimeSpan::from((1.0, 2.0)), TimeSpan::new(1.0, 2.0));
    }

    #[test]
    fn infinite_endpoint_is_not_finite() {
        assert!(TimeSpan::new(0.0, 1.0).is_finite());
        assert!(!TimeSpan::new(0.0, f64::INFINITY).is_finite());
        assert!(!TimeSpan::new(f64::NAN, 1.0).is_finite());
    }
}
