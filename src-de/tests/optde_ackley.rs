use debench_de::{DEConfigBuilder, differential_evolution};
use debench_testfunctions::ackley;

#[test]
fn test_de_ackley_2d() {
    // Global minimum at the origin with f(x) = 0
    let b2 = vec![(-32.0, 32.0), (-32.0, 32.0)];
    let c2 = DEConfigBuilder::new()
        .seed(12)
        .maxiter(400)
        .popsize(30)
        .mutation(0.8)
        .recombination(0.9)
        .build();
    let report = differential_evolution(&ackley, &b2, c2).unwrap();
    assert!(report.fun < 1e-2, "Function value too high: {}", report.fun);
    for &xi in report.x.iter() {
        assert!(xi.abs() < 1e-2, "Variable too far from 0: {}", xi);
    }
}
