use itertools::Itertools;
use nalgebra::{Point2, Vector3};

use crate::misc::FloatingPoint;
use crate::ode::{IntegrationOptions, Trajectory};
use crate::quadrature::CumulativeIntegral;

use super::{CurvatureCase, Profile};

/// Profile curve solver for surfaces of constant Gaussian curvature.
/// One solver serves every [`CurvatureCase`]; the cases differ only in the
/// radius formula and the rule that resolves the arc length domain.
///
/// The radius `r(s)` comes from the closed form of the case, the height
/// `h(s)` from cumulative quadrature of `h'(s) = sqrt(1 - r'(s)^2)`.
/// Between 200 and 400 subintervals is the tested range; higher counts trade
/// cost for smoothness of the spline fit applied downstream.
#[derive(Clone, Copy, Debug)]
pub struct ProfileSolver<T: FloatingPoint> {
    case: CurvatureCase,
    shape: T,
}

impl<T: FloatingPoint> ProfileSolver<T> {
    /// Create a solver for a case and its shape parameter `a`.
    /// # Failures
    /// Out-of-range shape parameters fail here rather than degrading into
    /// NaN-bearing output downstream:
    /// - `a <= 0` for any case
    /// - `a > 1` for the spindle case
    /// - `a <= 1` for the barrel case
    /// - `a >= 1` for the pseudosphere case
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// // a unit sphere profile: the accumulated height is the diameter
    /// let solver = ProfileSolver::try_new(CurvatureCase::Spindle, 1.).unwrap();
    /// let profile = solver.try_solve(200).unwrap();
    /// assert_relative_eq!(profile.total_height(), 2., epsilon = 1e-3);
    /// ```
    pub fn try_new(case: CurvatureCase, shape: T) -> anyhow::Result<Self> {
        anyhow::ensure!(
            shape > T::zero(),
            "Shape parameter must be positive, got {:?}",
            shape
        );
        match case {
            CurvatureCase::Spindle => {
                anyhow::ensure!(
                    shape <= T::one(),
                    "Spindle case requires a <= 1, got {:?}",
                    shape
                );
            }
            CurvatureCase::Barrel => {
                anyhow::ensure!(
                    shape > T::one(),
                    "Barrel case requires a > 1, got {:?}",
                    shape
                );
            }
            CurvatureCase::Trumpet => {}
            CurvatureCase::Pseudosphere => {
                anyhow::ensure!(
                    shape < T::one(),
                    "Pseudosphere case requires a < 1, got {:?}",
                    shape
                );
            }
        }
        Ok(Self { case, shape })
    }

    pub fn case(&self) -> CurvatureCase {
        self.case
    }

    pub fn shape(&self) -> T {
        self.shape
    }

    /// Radius of the profile at arc length `s`
    pub fn radius(&self, s: T) -> T {
        let a = self.shape;
        match self.case {
            CurvatureCase::Spindle | CurvatureCase::Barrel => a * s.sin(),
            CurvatureCase::Trumpet => a * s.cosh(),
            CurvatureCase::Pseudosphere => a * s.sinh(),
        }
    }

    /// Derivative of the radius at arc length `s`
    pub fn radius_derivative(&self, s: T) -> T {
        let a = self.shape;
        match self.case {
            CurvatureCase::Spindle | CurvatureCase::Barrel => a * s.cos(),
            CurvatureCase::Trumpet => a * s.sinh(),
            CurvatureCase::Pseudosphere => a * s.cosh(),
        }
    }

    /// Height derivative `sqrt(1 - r'(s)^2)` at arc length `s`.
    /// The radicand is clamped to zero to absorb floating point overshoot at
    /// domain boundaries where it is analytically zero.
    pub fn height_derivative(&self, s: T) -> T {
        let rp = self.radius_derivative(s);
        (T::one() - rp * rp).max(T::zero()).sqrt()
    }

    /// The resolved arc length domain of the case.
    /// The trumpet case reports only its positive half; solving mirrors it.
    pub fn domain(&self) -> (T, T) {
        let inv = T::one() / self.shape;
        match self.case {
            CurvatureCase::Spindle => (T::zero(), T::pi()),
            CurvatureCase::Barrel => {
                let edge = inv.acos();
                (edge, T::pi() - edge)
            }
            CurvatureCase::Trumpet => (T::zero(), inv.asinh()),
            CurvatureCase::Pseudosphere => (T::zero(), inv.acosh()),
        }
    }

    /// Solve the profile with `steps` quadrature subintervals
    pub fn try_solve(&self, steps: usize) -> anyhow::Result<Profile<T>> {
        let (s_min, s_max) = self.domain();
        let integral =
            CumulativeIntegral::try_trapezoidal(|s| self.height_derivative(s), s_min, s_max, steps)?;
        let points = integral
            .parameters()
            .iter()
            .zip(integral.values())
            .map(|(s, h)| Point2::new(self.radius(*s), *h))
            .collect_vec();
        Ok(Profile::new(self.mirrored(points)))
    }

    /// Solve the profile by integrating the constant curvature relation
    /// `r'' = -K * r` directly with a fixed-step Runge-Kutta scheme, carrying
    /// the height as part of the state `[r, r', h]`.
    /// Agrees with [`Self::try_solve`] to integration accuracy; for positive
    /// curvature the trajectory is cut where the radius crosses zero, so the
    /// result may hold one sample less than the quadrature route.
    pub fn try_solve_ode(&self, steps: usize) -> anyhow::Result<Profile<T>> {
        let (s_min, s_max) = self.domain();
        anyhow::ensure!(steps >= 1, "At least one integration step is required");

        let k: T = self.case.gaussian_curvature();
        let derivative = |_s: T, state: &Vector3<T>| {
            let rp = state.y;
            Vector3::new(rp, -k * state.x, (T::one() - rp * rp).max(T::zero()).sqrt())
        };
        let initial = Vector3::new(self.radius(s_min), self.radius_derivative(s_min), T::zero());
        let options = IntegrationOptions::default()
            .with_dt((s_max - s_min) / T::from_usize(steps).unwrap())
            .with_steps(steps);

        let trajectory = if k > T::zero() {
            Trajectory::try_integrate_until(derivative, initial, &options, |state, _| {
                state.x < T::zero()
            })?
        } else {
            Trajectory::try_integrate(derivative, initial, &options)?
        };

        let points = trajectory
            .states()
            .iter()
            .map(|state| Point2::new(state.x, state.z))
            .collect_vec();
        Ok(Profile::new(self.mirrored(points)))
    }

    /// Reflect a half profile about `s = 0` for mirrored cases:
    /// heights are negated, the order reversed and the duplicated
    /// `s = 0` sample dropped
    fn mirrored(&self, half: Vec<Point2<T>>) -> Vec<Point2<T>> {
        if !self.case.is_mirrored() {
            return half;
        }
        let mut points = half
            .iter()
            .skip(1)
            .rev()
            .map(|p| Point2::new(p.x, -p.y))
            .collect_vec();
        points.extend(half);
        points
    }
}
