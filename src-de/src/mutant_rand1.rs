use ndarray::{Array1, Zip};
use rand::Rng;

use crate::distinct_indices::distinct_indices;
use crate::population::Population;

/// DE/rand/1 mutant for target `i`: `x[r1] + f * (x[r2] - x[r3])`
pub(crate) fn mutant_rand1<R: Rng + ?Sized>(
    i: usize,
    pop: &Population,
    f: f64,
    rng: &mut R,
) -> Array1<f64> {
    let idxs = distinct_indices(i, 3, pop.len(), rng);
    let (r1, r2, r3) = (idxs[0], idxs[1], idxs[2]);
    log::trace!("target {} donors ({}, {}, {})", i, r1, r2, r3);
    let mut v = pop[r1].position().clone();
    Zip::from(&mut v)
        .and(pop[r2].position())
        .and(pop[r3].position())
        .for_each(|vj, &a, &b| *vj += f * (a - b));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_weight_returns_a_donor() {
        let lower = Array1::from(vec![-1.0, -1.0]);
        let upper = Array1::from(vec![1.0, 1.0]);
        let sphere = |x: &Array1<f64>| x.iter().map(|v| v * v).sum::<f64>();
        let mut rng = StdRng::seed_from_u64(13);
        let pop = Population::init_random(6, &lower, &upper, &sphere, &mut rng).unwrap();
        for i in 0..6 {
            let v = mutant_rand1(i, &pop, 0.0, &mut rng);
            let donor = (0..6).filter(|&k| k != i).find(|&k| pop[k].position() == &v);
            assert!(donor.is_some(), "mutant for {} is not a population member", i);
        }
    }

    #[test]
    fn test_difference_vector_scaled_by_weight() {
        let lower = Array1::from(vec![0.0]);
        let upper = Array1::from(vec![1.0]);
        let identity = |x: &Array1<f64>| x[0];
        let mut rng = StdRng::seed_from_u64(17);
        let pop = Population::init_random(4, &lower, &upper, &identity, &mut rng).unwrap();
        let v = mutant_rand1(0, &pop, 0.5, &mut rng);
        // the mutant is x[r1] + 0.5 * (x[r2] - x[r3]) for some ordering of slots 1..4
        let xs: Vec<f64> = (1..4).map(|k| pop[k].position()[0]).collect();
        let mut matched = false;
        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    if a != b && b != c && a != c {
                        let expected = xs[a] + 0.5 * (xs[b] - xs[c]);
                        matched |= (v[0] - expected).abs() < 1e-15;
                    }
                }
            }
        }
        assert!(matched);
    }
}
