use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OVector};

use crate::misc::FloatingPoint;

use super::{OdeStepper, RungeKutta4};

/// Fixed-step integration settings
/// `dt` and `steps` fully determine the trajectory; there is no
/// adaptive step size control and no error estimation.
#[derive(Clone, Debug)]
pub struct IntegrationOptions<T: FloatingPoint, S = RungeKutta4> {
    /// Step size
    pub dt: T,
    /// Number of steps to take
    pub steps: usize,
    /// Stepping scheme
    pub stepper: S,
}

impl<T: FloatingPoint> Default for IntegrationOptions<T, RungeKutta4> {
    fn default() -> Self {
        Self {
            dt: T::from_f64(1e-2).unwrap(),
            steps: 100,
            stepper: RungeKutta4,
        }
    }
}

impl<T: FloatingPoint, S> IntegrationOptions<T, S> {
    pub fn with_dt(mut self, dt: T) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_stepper<S2>(self, stepper: S2) -> IntegrationOptions<T, S2> {
        IntegrationOptions {
            dt: self.dt,
            steps: self.steps,
            stepper,
        }
    }
}

/// The state sequence produced by a fixed-step integration,
/// index-aligned with its time stamps starting at `t = 0`.
#[derive(Clone, Debug)]
pub struct Trajectory<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    states: Vec<OVector<T, D>>,
    times: Vec<T>,
}

impl<T: FloatingPoint, D: DimName> Trajectory<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Integrate `derivative` from `initial` over `steps` fixed steps.
    /// # Example
    /// ```
    /// use lathe::prelude::*;
    /// use nalgebra::Vector1;
    /// use approx::assert_relative_eq;
    ///
    /// // exponential growth: y' = y
    /// let options = IntegrationOptions::default().with_dt(1e-2).with_steps(100);
    /// let trajectory =
    ///     Trajectory::try_integrate(|_t, y: &Vector1<f64>| *y, Vector1::new(1.), &options)
    ///         .unwrap();
    /// assert_eq!(trajectory.len(), 101);
    /// assert_relative_eq!(trajectory.states().last().unwrap().x, 1_f64.exp(), epsilon = 1e-6);
    /// ```
    pub fn try_integrate<F, S>(
        derivative: F,
        initial: OVector<T, D>,
        options: &IntegrationOptions<T, S>,
    ) -> anyhow::Result<Self>
    where
        F: Fn(T, &OVector<T, D>) -> OVector<T, D>,
        S: OdeStepper<T, D>,
    {
        Self::try_integrate_until(derivative, initial, options, |_, _| false)
    }

    /// Integrate with an early termination predicate evaluated on each
    /// freshly computed state. When the predicate returns true that state is
    /// discarded and the trajectory ends, so the returned sequences are
    /// shorter than `steps + 1`.
    pub fn try_integrate_until<F, S, P>(
        derivative: F,
        initial: OVector<T, D>,
        options: &IntegrationOptions<T, S>,
        stop: P,
    ) -> anyhow::Result<Self>
    where
        F: Fn(T, &OVector<T, D>) -> OVector<T, D>,
        S: OdeStepper<T, D>,
        P: Fn(&OVector<T, D>, T) -> bool,
    {
        anyhow::ensure!(options.steps >= 1, "At least one step is required");

        let mut states = Vec::with_capacity(options.steps + 1);
        let mut times = Vec::with_capacity(options.steps + 1);
        states.push(initial);
        times.push(T::zero());

        let mut t = T::zero();
        for _ in 0..options.steps {
            let next = options
                .stepper
                .step(&derivative, states.last().unwrap(), t, options.dt);
            t += options.dt;
            if stop(&next, t) {
                break;
            }
            states.push(next);
            times.push(t);
        }

        Ok(Self { states, times })
    }

    pub fn states(&self) -> &[OVector<T, D>] {
        &self.states
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
