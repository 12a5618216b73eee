use debench_de::{DEConfigBuilder, differential_evolution};
use debench_testfunctions::rastrigin;

#[test]
fn test_de_rastrigin_2d() {
    let b2 = vec![(-5.12, 5.12), (-5.12, 5.12)];
    let c2 = DEConfigBuilder::new()
        .seed(40)
        .maxiter(400)
        .popsize(30)
        .mutation(0.5)
        .recombination(0.9)
        .build();
    let report = differential_evolution(&rastrigin, &b2, c2).unwrap();
    // a neighbouring basin is worth ~1 per coordinate
    assert!(report.fun < 3.0, "Function value too high: {}", report.fun);
    assert!(report.fun >= 0.0);
}

#[test]
fn test_de_rastrigin_presets_keep_budget() {
    let b = vec![(-5.12, 5.12); 4];
    for (mutation, recombination) in [(0.8, 0.9), (0.9, 0.5), (0.5, 0.9), (0.6, 0.6), (1.0, 0.3)] {
        let c = DEConfigBuilder::new()
            .seed(41)
            .maxiter(100)
            .popsize(20)
            .mutation(mutation)
            .recombination(recombination)
            .build();
        let report = differential_evolution(&rastrigin, &b, c).unwrap();
        assert_eq!(report.nit, 100);
        assert_eq!(report.nfev, 20 + 100 * 20);
        assert!(report.fun.is_finite());
    }
}
