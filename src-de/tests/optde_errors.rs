use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use debench_de::{
    DEConfigBuilder, DEError, DEIntermediate, DifferentialEvolution, Fallible, ObjectiveError,
    differential_evolution,
};
use debench_testfunctions::sphere;
use ndarray::Array1;

fn expect_config_error(bounds: &[(f64, f64)], builder: DEConfigBuilder) -> DEError {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    let config = builder
        .seed(1)
        .callback(Box::new(move |_: &DEIntermediate<'_>| flag.store(true, Ordering::SeqCst)))
        .build();
    let err = differential_evolution(&sphere, bounds, config).unwrap_err();
    assert!(err.is_config_error(), "expected a configuration error, got {:?}", err);
    assert!(!called.load(Ordering::SeqCst), "no generation may run on a rejected configuration");
    err
}

#[test]
fn test_population_too_small() {
    let err = expect_config_error(&[(-1.0, 1.0); 2], DEConfigBuilder::new().popsize(3));
    assert!(matches!(err, DEError::PopulationTooSmall { pop_size: 3 }));
}

#[test]
fn test_empty_dimension() {
    let err = expect_config_error(&[], DEConfigBuilder::new());
    assert!(matches!(err, DEError::EmptyDimension));
}

#[test]
fn test_degenerate_and_inverted_bounds() {
    let err = expect_config_error(&[(-1.0, 1.0), (2.0, 2.0)], DEConfigBuilder::new());
    assert!(matches!(err, DEError::InvalidBounds { index: 1, .. }));
    let err = expect_config_error(&[(3.0, -3.0)], DEConfigBuilder::new());
    assert!(err.is_bounds_error());
    let err = expect_config_error(&[(f64::NAN, 1.0)], DEConfigBuilder::new());
    assert!(err.is_bounds_error());
}

#[test]
fn test_unbounded_box_is_rejected() {
    let constant = |_: &Array1<f64>| 1.0;
    for bounds in [
        [(f64::NEG_INFINITY, f64::INFINITY); 2],
        [(-1.0, 1.0), (0.0, f64::INFINITY)],
        [(-f64::MAX, f64::MAX); 2],
    ] {
        let config = DEConfigBuilder::new().seed(1).maxiter(5).popsize(5).build();
        let err = differential_evolution(&constant, &bounds, config).unwrap_err();
        assert!(matches!(err, DEError::InvalidBounds { .. }), "{:?} accepted", bounds);
    }
}

#[test]
fn test_wide_finite_box_stays_inside() {
    let constant = |_: &Array1<f64>| 1.0;
    let bounds = [(-f64::MAX / 2.0, f64::MAX / 2.0); 2];
    let config = DEConfigBuilder::new().seed(2).maxiter(5).popsize(5).build();
    let report = differential_evolution(&constant, &bounds, config).unwrap();
    for c in &report.population {
        for &xi in c.position().iter() {
            assert!(xi.is_finite() && xi.abs() <= f64::MAX / 2.0, "escaped the box: {}", xi);
        }
    }
}

#[test]
fn test_non_finite_parameters() {
    let err = expect_config_error(&[(-1.0, 1.0)], DEConfigBuilder::new().mutation(f64::NAN));
    assert!(matches!(err, DEError::InvalidMutationFactor { .. }));
    let err =
        expect_config_error(&[(-1.0, 1.0)], DEConfigBuilder::new().recombination(f64::INFINITY));
    assert!(matches!(err, DEError::InvalidCrossoverRate { .. }));
}

#[test]
fn test_out_of_range_parameters_are_accepted() {
    // F and CR are not clamped: CR > 1 simply always takes the mutant
    let config = DEConfigBuilder::new()
        .seed(2)
        .maxiter(20)
        .popsize(6)
        .mutation(1.5)
        .recombination(1.5)
        .build();
    assert!(differential_evolution(&sphere, &[(-1.0, 1.0); 2], config).is_ok());
}

#[test]
fn test_bounds_length_mismatch() {
    let mut de = DifferentialEvolution::new(
        &sphere,
        Array1::from(vec![-1.0, -1.0]),
        Array1::from(vec![1.0]),
    );
    let err = de.solve().unwrap_err();
    assert!(matches!(err, DEError::BoundsMismatch { lower_len: 2, upper_len: 1 }));
}

#[test]
fn test_nan_fitness_is_propagated() {
    let nan_when_positive = |x: &Array1<f64>| if x[0] > 0.0 { f64::NAN } else { x[0] * x[0] };
    let config = DEConfigBuilder::new().seed(3).maxiter(50).popsize(10).build();
    let err = differential_evolution(&nan_when_positive, &[(-1.0, 1.0)], config).unwrap_err();
    assert!(matches!(err, DEError::NonNumericFitness { .. }));
    assert!(err.is_objective_error());
}

#[test]
fn test_evaluator_failure_mid_run_is_propagated() {
    let calls = Cell::new(0usize);
    let flaky = Fallible(|x: &Array1<f64>| -> Result<f64, ObjectiveError> {
        calls.set(calls.get() + 1);
        if calls.get() > 25 {
            return Err(ObjectiveError::new("simulation diverged"));
        }
        Ok(sphere(x))
    });
    let config = DEConfigBuilder::new().seed(4).maxiter(10).popsize(10).build();
    let err = differential_evolution(&flaky, &[(-1.0, 1.0); 2], config).unwrap_err();
    match err {
        DEError::Objective(e) => assert_eq!(e.message, "simulation diverged"),
        other => panic!("unexpected error: {:?}", other),
    }
    // no retry: the run stops at the first failure
    assert_eq!(calls.get(), 26);
}
