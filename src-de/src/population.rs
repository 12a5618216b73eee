use std::ops::Index;

use ndarray::{Array1, Array2};
use rand::Rng;

use crate::candidate::Candidate;
use crate::error::Result;
use crate::objective::Objective;

/// Fixed-size ordered collection of candidates.
///
/// Slot indices are stable identities used for donor selection.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Candidate>,
}

impl Population {
    /// Draw `npop` points uniformly in `[lower, upper]` and evaluate each one.
    ///
    /// Coordinates are drawn individual by individual, `npop * n` draws in total.
    pub fn init_random<O, R>(
        npop: usize,
        lower: &Array1<f64>,
        upper: &Array1<f64>,
        objective: &O,
        rng: &mut R,
    ) -> Result<Self>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        let n = lower.len();
        let mut members = Vec::with_capacity(npop);
        for _ in 0..npop {
            let mut x = Array1::<f64>::zeros(n);
            for j in 0..n {
                let u: f64 = rng.random::<f64>();
                x[j] = lower[j] + u * (upper[j] - lower[j]);
            }
            let mut candidate = Candidate::new(n);
            candidate.set_position(x, objective)?;
            members.push(candidate);
        }
        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.members.iter()
    }

    /// Overwrite slot `i` with an already evaluated candidate
    pub fn replace(&mut self, i: usize, candidate: Candidate) {
        self.members[i] = candidate;
    }

    /// Index and fitness of the best member; the first one wins ties
    pub fn argmin(&self) -> (usize, f64) {
        let mut best_i = 0usize;
        let mut best_f = self.members[0].fitness();
        for (i, c) in self.members.iter().enumerate() {
            if c.fitness() < best_f {
                best_f = c.fitness();
                best_i = i;
            }
        }
        (best_i, best_f)
    }

    /// Fitness of every member, in slot order
    pub fn energies(&self) -> Array1<f64> {
        self.members.iter().map(Candidate::fitness).collect()
    }

    /// Positions as an `npop x n` matrix, in slot order
    pub fn positions(&self) -> Array2<f64> {
        let n = self.members.first().map_or(0, Candidate::dim);
        let mut out = Array2::<f64>::zeros((self.members.len(), n));
        for (i, c) in self.members.iter().enumerate() {
            out.row_mut(i).assign(c.position());
        }
        out
    }

    /// Mean and standard deviation of the fitness values
    pub fn fitness_stats(&self) -> (f64, f64) {
        let energies = self.energies();
        (energies.mean().unwrap_or(0.0), energies.std(0.0))
    }
}

impl Index<usize> for Population {
    type Output = Candidate;

    fn index(&self, i: usize) -> &Candidate {
        &self.members[i]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
