use debench_de::{DEConfigBuilder, Updating, differential_evolution};
use debench_testfunctions::rosenbrock;

#[test]
fn test_de_rosenbrock_2d() {
    // Global minimum at (1, 1) with f(x) = 0
    let b = vec![(-5.0, 5.0); 2];
    for updating in [Updating::Immediate, Updating::Deferred] {
        let c = DEConfigBuilder::new()
            .seed(50)
            .maxiter(600)
            .popsize(30)
            .mutation(0.8)
            .recombination(0.9)
            .updating(updating)
            .build();
        let report = differential_evolution(&rosenbrock, &b, c).unwrap();
        assert!(report.fun < 1e-2, "{:?}: function value too high: {}", updating, report.fun);
    }
}
