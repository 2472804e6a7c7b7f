use approx::assert_relative_eq;
use nalgebra::Vector2;

use super::{ExplicitEuler, IntegrationOptions, Trajectory};

fn harmonic_oscillator(_t: f64, state: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(state.y, -state.x)
}

#[test]
fn harmonic_oscillator_one_period() {
    let options = IntegrationOptions::default().with_dt(0.01).with_steps(628);
    let trajectory =
        Trajectory::try_integrate(harmonic_oscillator, Vector2::new(0., 1.), &options).unwrap();

    assert_eq!(trajectory.len(), 629);
    assert_eq!(trajectory.times()[0], 0.);

    for (state, t) in trajectory.states().iter().zip(trajectory.times()) {
        assert_relative_eq!(state.x, t.sin(), epsilon = 1e-6);
        assert_relative_eq!(state.y, t.cos(), epsilon = 1e-6);
    }
}

#[test]
fn early_termination() {
    let options = IntegrationOptions::default().with_dt(0.01).with_steps(628);
    // stop once the oscillator crosses zero downwards, just past a half period
    let trajectory = Trajectory::try_integrate_until(
        harmonic_oscillator,
        Vector2::new(0., 1.),
        &options,
        |state, _| state.x < 0.,
    )
    .unwrap();

    assert!(trajectory.len() < 629);
    let last = trajectory.states().last().unwrap();
    assert!(last.x >= 0.);
    let end = *trajectory.times().last().unwrap();
    assert_relative_eq!(end, std::f64::consts::PI, epsilon = 0.02);
}

#[test]
fn stepper_is_substitutable() {
    let rk4 = IntegrationOptions::default().with_dt(0.01).with_steps(100);
    let euler = rk4.clone().with_stepper(ExplicitEuler);

    let initial = Vector2::new(0., 1.);
    let fine = Trajectory::try_integrate(harmonic_oscillator, initial, &rk4).unwrap();
    let coarse = Trajectory::try_integrate(harmonic_oscillator, initial, &euler).unwrap();

    assert_eq!(fine.len(), coarse.len());

    let t = 1.0_f64;
    let rk4_error = (fine.states().last().unwrap().x - t.sin()).abs();
    let euler_error = (coarse.states().last().unwrap().x - t.sin()).abs();
    assert!(rk4_error < euler_error);
    assert!(rk4_error < 1e-8);
}

#[test]
fn zero_steps_is_rejected() {
    let options = IntegrationOptions::default().with_steps(0);
    let result = Trajectory::try_integrate(harmonic_oscillator, Vector2::new(0., 1.), &options);
    assert!(result.is_err());
}
