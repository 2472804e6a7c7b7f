use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OVector};

use crate::misc::FloatingPoint;

/// One explicit step of a fixed-step ODE scheme.
/// Any conforming stepper can be swapped into [`crate::ode::Trajectory`]
/// integration via [`crate::ode::IntegrationOptions::with_stepper`].
pub trait OdeStepper<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// Advance `state` at time `t` by `dt`
    fn step<F>(&self, derivative: &F, state: &OVector<T, D>, t: T, dt: T) -> OVector<T, D>
    where
        F: Fn(T, &OVector<T, D>) -> OVector<T, D>;
}

/// The classic fourth-order Runge-Kutta scheme
#[derive(Clone, Copy, Debug, Default)]
pub struct RungeKutta4;

impl<T: FloatingPoint, D: DimName> OdeStepper<T, D> for RungeKutta4
where
    DefaultAllocator: Allocator<D>,
{
    fn step<F>(&self, derivative: &F, state: &OVector<T, D>, t: T, dt: T) -> OVector<T, D>
    where
        F: Fn(T, &OVector<T, D>) -> OVector<T, D>,
    {
        let half = dt * T::from_f64(0.5).unwrap();
        let two = T::from_f64(2.0).unwrap();

        let k1 = derivative(t, state);
        let k2 = derivative(t + half, &(state + &k1 * half));
        let k3 = derivative(t + half, &(state + &k2 * half));
        let k4 = derivative(t + dt, &(state + &k3 * dt));

        state + (k1 + k2 * two + k3 * two + k4) * (dt / T::from_f64(6.0).unwrap())
    }
}

/// First-order explicit Euler scheme
/// Mostly useful as a cheap baseline when comparing steppers
#[derive(Clone, Copy, Debug, Default)]
pub struct ExplicitEuler;

impl<T: FloatingPoint, D: DimName> OdeStepper<T, D> for ExplicitEuler
where
    DefaultAllocator: Allocator<D>,
{
    fn step<F>(&self, derivative: &F, state: &OVector<T, D>, t: T, dt: T) -> OVector<T, D>
    where
        F: Fn(T, &OVector<T, D>) -> OVector<T, D>,
    {
        state + derivative(t, state) * dt
    }
}
