use itertools::Itertools;

use crate::misc::FloatingPoint;

/// Cumulative integral of a scalar function over an interval,
/// computed with the composite trapezoidal rule.
/// Keeps the whole running-sum table rather than only the final estimate,
/// so that callers can read off the antiderivative at every sample point.
#[derive(Clone, Debug)]
pub struct CumulativeIntegral<T: FloatingPoint> {
    parameters: Vec<T>,
    values: Vec<T>,
}

impl<T: FloatingPoint> CumulativeIntegral<T> {
    /// Integrate `f` over `[t_min, t_max]` with `steps` trapezoids.
    /// The returned table has `steps + 1` entries, `values[0] == 0` and
    /// `values[steps]` is the full-interval estimate.
    /// # Failures
    /// - if `steps` is zero
    /// - if the interval is inverted
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let integral = CumulativeIntegral::try_trapezoidal(|t: f64| t, 0., 1., 100).unwrap();
    /// assert_relative_eq!(integral.total(), 0.5, epsilon = 1e-10);
    /// ```
    pub fn try_trapezoidal<F>(f: F, t_min: T, t_max: T, steps: usize) -> anyhow::Result<Self>
    where
        F: Fn(T) -> T,
    {
        anyhow::ensure!(steps >= 1, "At least one integration step is required");
        anyhow::ensure!(
            t_min <= t_max,
            "Inverted integration interval: [{:?}, {:?}]",
            t_min,
            t_max
        );

        let dt = (t_max - t_min) / T::from_usize(steps).unwrap();
        let half = T::from_f64(0.5).unwrap();

        let parameters = (0..=steps)
            .map(|i| t_min + dt * T::from_usize(i).unwrap())
            .collect_vec();

        let mut values = Vec::with_capacity(steps + 1);
        values.push(T::zero());
        let mut previous = f(t_min);
        for t in parameters.iter().skip(1) {
            let current = f(*t);
            let last = *values.last().unwrap();
            values.push(last + half * dt * (previous + current));
            previous = current;
        }

        Ok(Self { parameters, values })
    }

    /// Sample positions, strictly increasing from `t_min` to `t_max`
    pub fn parameters(&self) -> &[T] {
        &self.parameters
    }

    /// Running sums aligned with `parameters`
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The full-interval integral estimate
    pub fn total(&self) -> T {
        *self.values.last().unwrap()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
