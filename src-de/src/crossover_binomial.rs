use ndarray::Array1;
use rand::Rng;

/// Binomial crossover of `target` with `mutant`.
///
/// Coordinate `jrand` always comes from the mutant. A uniform draw is made for
/// every coordinate, including `jrand`, so each call consumes `1 + n` draws.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
    target: &Array1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut R,
) -> Array1<f64> {
    let n = target.len();
    let jrand = rng.random_range(0..n);
    let mut trial = target.clone();
    for j in 0..n {
        if rng.random::<f64>() < cr || j == jrand {
            trial[j] = mutant[j];
        }
    }
    trial
}
