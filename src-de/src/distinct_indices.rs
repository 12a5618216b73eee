use rand::Rng;

/// Draw `count` indices in `[0, pool_size)`, pairwise distinct and all
/// different from `exclude`, by rejection sampling in draw order.
///
/// Terminates as long as `count <= pool_size - 1`.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    exclude: usize,
    count: usize,
    pool_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    debug_assert!(count <= pool_size.saturating_sub(1));
    let mut out: Vec<usize> = Vec::with_capacity(count);
    while out.len() < count {
        let r = rng.random_range(0..pool_size);
        if r != exclude && !out.contains(&r) {
            out.push(r);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_indices_distinct_and_exclude_target() {
        let mut rng = StdRng::seed_from_u64(5);
        for npop in 4..12 {
            for i in 0..npop {
                for _ in 0..50 {
                    let idx = distinct_indices(i, 3, npop, &mut rng);
                    assert_eq!(idx.len(), 3);
                    assert!(idx.iter().all(|&r| r != i && r < npop));
                    assert!(idx[0] != idx[1] && idx[0] != idx[2] && idx[1] != idx[2]);
                }
            }
        }
    }

    #[test]
    fn test_minimal_pool_uses_every_other_slot() {
        let mut rng = StdRng::seed_from_u64(9);
        for i in 0..4 {
            let mut idx = distinct_indices(i, 3, 4, &mut rng);
            idx.sort_unstable();
            let expected: Vec<usize> = (0..4).filter(|&r| r != i).collect();
            assert_eq!(idx, expected);
        }
    }
}
