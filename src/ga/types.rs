//! Core type definitions for the GA engine.
//!
//! The engine works on integer genomes and integer costs. Problems plug in
//! through [`CostFunction`]; the goal test is a plain `Fn(u64) -> bool`.

/// A candidate solution: a fixed-length sequence of alleles in `[0, alphabet_size)`.
///
/// Length and alphabet size are run parameters, not stored per genome.
/// Genomes are owned values; every selection or recombination step hands
/// out a fresh copy.
pub type Genome = Vec<usize>;

/// Integer cost of a genome. Lower is better.
pub type Cost = u64;

/// Maps a genome to its cost.
///
/// This is the only problem-specific hook the engine needs besides the goal
/// predicate. Adapters that carry fixed context (a graph, a palette size)
/// implement this trait directly; plain closures are accepted through the
/// blanket impl.
///
/// # Examples
///
/// ```
/// use u_palette::ga::CostFunction;
///
/// let ones = |g: &[usize]| g.iter().filter(|&&a| a == 1).count() as u64;
/// assert_eq!(ones.cost(&[1, 0, 1]), 2);
/// ```
pub trait CostFunction {
    /// Evaluates a genome. Called exactly once per genome per generation.
    fn cost(&self, genome: &[usize]) -> Cost;
}

impl<F> CostFunction for F
where
    F: Fn(&[usize]) -> Cost,
{
    fn cost(&self, genome: &[usize]) -> Cost {
        self(genome)
    }
}

/// Best-ever genome of one engine invocation.
///
/// Replaced only by a strictly cheaper genome, so its cost never increases
/// over the lifetime of a run. It is never reset between generations: the
/// same value drives elitism and the goal test.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elite {
    /// Copy of the best genome seen so far.
    pub genome: Genome,
    /// Its cost.
    pub cost: Cost,
}

impl Elite {
    /// Folds one evaluated generation into the running best.
    ///
    /// Scans in population order; a candidate replaces the incumbent only on
    /// strictly lower cost, so among equal costs the earliest find is kept.
    /// Returns `true` if the best changed.
    pub fn absorb(best: &mut Option<Elite>, population: &[Genome], costs: &[Cost]) -> bool {
        let mut improved = false;
        for (genome, &cost) in population.iter().zip(costs) {
            let better = match best {
                Some(elite) => cost < elite.cost,
                None => true,
            };
            if better {
                *best = Some(Elite {
                    genome: genome.clone(),
                    cost,
                });
                improved = true;
            }
        }
        improved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_as_cost_function() {
        let sum = |g: &[usize]| g.iter().sum::<usize>() as u64;
        assert_eq!(sum.cost(&[1, 2, 3]), 6);
    }

    #[test]
    fn test_absorb_takes_first_of_ties() {
        let pop = vec![vec![0, 0], vec![1, 1], vec![2, 2]];
        let costs: Vec<Cost> = vec![5, 3, 3];
        let mut best = None;
        assert!(Elite::absorb(&mut best, &pop, &costs));
        let elite = best.unwrap();
        assert_eq!(elite.genome, vec![1, 1]);
        assert_eq!(elite.cost, 3);
    }

    #[test]
    fn test_absorb_never_increases_cost() {
        let mut best = Some(Elite {
            genome: vec![9],
            cost: 2,
        });
        let improved = Elite::absorb(&mut best, &[vec![1], vec![2]], &[2, 7]);
        assert!(!improved);
        assert_eq!(best.as_ref().unwrap().genome, vec![9]);

        let improved = Elite::absorb(&mut best, &[vec![4]], &[1]);
        assert!(improved);
        assert_eq!(best.unwrap().cost, 1);
    }

    #[test]
    fn test_absorb_copies_genome() {
        let mut pop = vec![vec![3, 3]];
        let mut best = None;
        Elite::absorb(&mut best, &pop, &[0]);
        pop[0][0] = 0;
        assert_eq!(best.unwrap().genome, vec![3, 3]);
    }
}
