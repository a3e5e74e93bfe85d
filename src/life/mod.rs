mod rules;
mod simultaneous;
mod stream;

pub use rules::Standard;
pub use simultaneous::Simultaneous;
pub use stream::{generation_channel, StreamHandle};

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Dimensions, Location, NiceInt, Pond, Processor, Result, Rule, Topology};

/// Snapshot of one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub num: u64,
    /// Living organisms, in no particular order.
    pub living: Vec<Location>,
}

impl Generation {
    pub fn population(&self) -> usize {
        self.living.len()
    }

    /// Living organisms in row-major order, for order-insensitive comparison.
    pub fn sorted(&self) -> Vec<Location> {
        let mut living = self.living.clone();
        living.sort();
        living
    }
}

struct LiveState {
    pond: Pond,
    generation: u64,
}

struct Shared {
    seed: Vec<Location>,
    rule: Box<dyn Rule>,
    processor: Box<dyn Processor>,
    state: Mutex<LiveState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, LiveState> {
        // A panicking rule leaves at worst a half-processed generation behind.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The step runs on a copy, so a failing processor leaves the live pond
    /// at the last complete generation.
    fn process(&self) -> Result<Generation> {
        let mut state = self.lock();
        let mut next = state.pond.try_clone()?;
        self.processor.apply(&mut next, self.rule.as_ref())?;
        state.pond = next;
        state.generation += 1;
        Ok(Generation {
            num: state.generation,
            living: state.pond.all_living(),
        })
    }
}

/// The simulation: a pond evolving from a fixed seed under a rule.
///
/// The handle is cheap to clone; clones drive the same simulation. Only
/// [`Life::process`] (called directly or by a stream started with
/// [`Life::start`]) changes the live pond. Manual and streamed processing
/// are not coordinated with each other.
#[derive(Clone)]
pub struct Life {
    shared: Arc<Shared>,
    dims: Dimensions,
    topology: Topology,
}

impl Life {
    /// Builds a pond of `dims` and seeds it with the output of `initializer`.
    ///
    /// Fails on zero-sized dimensions, if the board can't be allocated or if
    /// the seed contains a location outside of the pond.
    pub fn new(
        dims: Dimensions,
        topology: Topology,
        initializer: impl FnOnce(Dimensions) -> Vec<Location>,
        rule: impl Rule + 'static,
        processor: impl Processor + 'static,
    ) -> Result<Self> {
        let mut pond = Pond::new(dims, topology)?;
        let seed = initializer(pond.dimensions());
        pond.set_organisms(&seed)?;

        Ok(Self {
            shared: Arc::new(Shared {
                seed,
                rule: Box::new(rule),
                processor: Box::new(processor),
                state: Mutex::new(LiveState {
                    pond,
                    generation: 0,
                }),
            }),
            dims,
            topology,
        })
    }

    /// Advances the live pond by one generation.
    pub fn process(&self) -> Result<Generation> {
        self.shared.process()
    }

    /// Snapshot of generation `num`.
    ///
    /// The current generation is read from the live pond. Any other one is
    /// recomputed by replaying the seed on a private copy of the pond, so the
    /// live simulation is never touched. Fails if the copy can't be
    /// allocated.
    pub fn generation_at(&self, num: u64) -> Result<Generation> {
        let mut pond = {
            let state = self.shared.lock();
            if state.generation == num {
                return Ok(Generation {
                    num,
                    living: state.pond.all_living(),
                });
            }
            state.pond.try_clone()?
        };

        pond.set_organisms(&self.shared.seed)?;
        for _ in 0..num {
            self.shared
                .processor
                .apply(&mut pond, self.shared.rule.as_ref())?;
        }
        Ok(Generation {
            num,
            living: pond.all_living(),
        })
    }

    /// Number of generations processed so far.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    pub fn population(&self) -> usize {
        self.shared.lock().pond.living_count()
    }

    pub fn seed(&self) -> &[Location] {
        &self.shared.seed
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns multiline string reporting simulation stats.
    pub fn statistics(&self) -> String {
        let state = self.shared.lock();
        let mut s = String::new();
        s.push_str(&format!("Dimensions: {}\n", self.dims));
        s.push_str(&format!("Neighbors: {}\n", self.topology));
        s.push_str(&format!(
            "Generation: {}\n",
            NiceInt::from(state.generation)
        ));
        s.push_str(&format!(
            "Population: {}\n",
            NiceInt::from_usize(state.pond.living_count())
        ));
        s.push_str(&format!(
            "Seed size: {}\n",
            NiceInt::from_usize(self.shared.seed.len())
        ));
        s
    }
}

impl std::fmt::Display for Life {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        writeln!(f)?;
        write!(f, "{}", state.pond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{patterns, LifeError};

    fn blinker_life() -> Life {
        Life::new(
            Dimensions::new(3, 3),
            Topology::All,
            patterns::blinkers,
            Standard,
            Simultaneous,
        )
        .unwrap()
    }

    #[test]
    fn test_creation_seeds_pond() {
        let life = blinker_life();
        let seed = [Location::new(0, 1), Location::new(1, 1), Location::new(2, 1)];
        assert_eq!(life.seed(), seed);
        assert_eq!(life.generation(), 0);
        assert_eq!(life.population(), 3);
        assert_eq!(life.dimensions(), Dimensions::new(3, 3));
    }

    #[test]
    fn test_creation_errors() {
        let bad_dims = Life::new(
            Dimensions::new(0, 3),
            Topology::All,
            |_| vec![],
            Standard,
            Simultaneous,
        );
        assert!(matches!(bad_dims, Err(LifeError::InvalidDimensions { .. })));

        let bad_seed = Life::new(
            Dimensions::new(3, 3),
            Topology::All,
            |_| vec![Location::new(5, 0)],
            Standard,
            Simultaneous,
        );
        assert!(matches!(bad_seed, Err(LifeError::OutOfBounds { .. })));
    }

    #[test]
    fn test_process() {
        let life = blinker_life();
        let generation = life.process().unwrap();
        assert_eq!(generation.num, 1);
        assert_eq!(
            generation.sorted(),
            [Location::new(1, 0), Location::new(1, 1), Location::new(1, 2)]
        );
        assert_eq!(life.generation(), 1);

        let generation = life.process().unwrap();
        assert_eq!(generation.num, 2);
        assert_eq!(generation.sorted(), life.seed());
    }

    #[test]
    fn test_generation_at() {
        let life = blinker_life();
        let zero = life.generation_at(0).unwrap();
        assert_eq!(zero.num, 0);
        assert_eq!(zero.sorted(), life.seed());

        let gen31 = life.generation_at(31).unwrap();
        assert_eq!(gen31.num, 31);
        assert_eq!(gen31.population(), 3);
        assert_eq!(
            gen31.sorted(),
            [Location::new(1, 0), Location::new(1, 1), Location::new(1, 2)]
        );
        // replay leaves the live simulation alone
        assert_eq!(life.generation(), 0);
        assert_eq!(life.generation_at(0).unwrap().sorted(), life.seed());
    }

    #[test]
    fn test_generation_at_is_deterministic() {
        let life = Life::new(
            Dimensions::new(16, 16),
            Topology::All,
            |dims| patterns::random(dims, Some(0.4), Some(7)),
            Standard,
            Simultaneous,
        )
        .unwrap();

        let first = life.generation_at(12).unwrap();
        for _ in 0..5 {
            life.process().unwrap();
        }
        let second = life.generation_at(12).unwrap();
        assert_eq!(first.sorted(), second.sorted());

        for _ in 0..7 {
            life.process().unwrap();
        }
        let live = life.generation_at(12).unwrap();
        assert_eq!(live.sorted(), first.sorted());
    }

    #[test]
    fn test_failed_process_keeps_generation() {
        // writes one organism, then fails halfway through the pass
        let half_done = |pond: &mut Pond, _: &dyn Rule| -> Result<()> {
            pond.set_cell(Location::new(0, 0), crate::Cell::Alive(0))?;
            pond.set_cell(Location::new(9, 9), crate::Cell::Alive(0))
        };
        let life = Life::new(
            Dimensions::new(3, 3),
            Topology::All,
            |_| vec![],
            Standard,
            half_done,
        )
        .unwrap();

        assert!(matches!(life.process(), Err(LifeError::OutOfBounds { .. })));
        assert_eq!(life.generation(), 0);
        assert_eq!(life.population(), 0);
        assert!(life.generation_at(0).unwrap().living.is_empty());
    }

    #[test]
    fn test_statistics_and_display() {
        let life = blinker_life();
        let stats = life.statistics();
        assert!(stats.contains("Generation: 0"));
        assert!(stats.contains("Population: 3"));
        assert!(!life.to_string().is_empty());
    }
}
