use debench_de::{DEConfigBuilder, differential_evolution};
use debench_testfunctions::{schwefel_1_2, schwefel_2_21, schwefel_2_22, schwefel_2_26};

fn config(seed: u64) -> debench_de::DEConfig {
    DEConfigBuilder::new()
        .seed(seed)
        .maxiter(500)
        .popsize(20)
        .mutation(0.6)
        .recombination(0.9)
        .build()
}

#[test]
fn test_de_schwefel_unimodal_family() {
    let b = vec![(-10.0, 10.0); 3];
    let r = differential_evolution(&schwefel_2_22, &b, config(60)).unwrap();
    assert!(r.fun < 1e-3, "Schwefel 2.22 value too high: {}", r.fun);
    let r = differential_evolution(&schwefel_1_2, &b, config(61)).unwrap();
    assert!(r.fun < 1e-3, "Schwefel 1.2 value too high: {}", r.fun);
    let r = differential_evolution(&schwefel_2_21, &b, config(62)).unwrap();
    assert!(r.fun < 1e-3, "Schwefel 2.21 value too high: {}", r.fun);
}

#[test]
fn test_de_schwefel_2_26_2d() {
    // Minimum is about -418.9829 per coordinate
    let b = vec![(-500.0, 500.0); 2];
    let c = DEConfigBuilder::new()
        .seed(63)
        .maxiter(500)
        .popsize(40)
        .mutation(0.5)
        .recombination(0.9)
        .build();
    let report = differential_evolution(&schwefel_2_26, &b, c).unwrap();
    assert!(report.fun >= -2.0 * 418.983, "below the global minimum: {}", report.fun);
    assert!(report.fun < -600.0, "Function value too high: {}", report.fun);
}
