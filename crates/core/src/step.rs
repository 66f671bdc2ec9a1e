/// A trait for states that can be stepped using their derivative.
///
/// Implementing this trait enables the Euler solver to advance the type via
/// `self + derivative * delta`, where the derivative is with respect to
/// `Delta`. While typically used for time integration, `Delta` can represent
/// any independent variable (spatial coordinate, arc length, etc.).
///
/// `Delta` can be a plain scalar like `f64` or a dimensioned type like
/// `uom::si::f64::Time` for compile-time unit checking.
///
/// Scalar (`f64`) and fixed-length vector (`[f64; N]`) states are provided.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + delta * derivative
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: [f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + delta * derivative[i])
    }
}
