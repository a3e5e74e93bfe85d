use crate::{Pond, Result};

/// Survival rule of the automaton.
///
/// Must be a pure function of its arguments: it is invoked for every cell
/// on every generation, including cells that were never alive.
pub trait Rule: Send + Sync {
    /// Whether the cell is alive in the next generation.
    fn next_state(&self, live_neighbors: usize, alive: bool) -> bool;
}

impl<F> Rule for F
where
    F: Fn(usize, bool) -> bool + Send + Sync,
{
    fn next_state(&self, live_neighbors: usize, alive: bool) -> bool {
        self(live_neighbors, alive)
    }
}

/// Strategy that advances a pond by exactly one generation.
pub trait Processor: Send + Sync {
    /// Applies `rule` to the pond once.
    ///
    /// Fails only if the strategy writes outside of the pond.
    fn apply(&self, pond: &mut Pond, rule: &dyn Rule) -> Result<()>;
}

impl<F> Processor for F
where
    F: Fn(&mut Pond, &dyn Rule) -> Result<()> + Send + Sync,
{
    fn apply(&self, pond: &mut Pond, rule: &dyn Rule) -> Result<()> {
        self(pond, rule)
    }
}
