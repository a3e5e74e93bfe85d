mod board;
mod cell;
mod living;
mod location;

pub use board::Board;
pub use cell::Cell;
pub use living::LivingIndex;
pub use location::{Dimensions, Location};

use crate::{LifeError, NiceInt, Result, Topology};

/// Lifecycle of a pond.
///
/// Only `Active` is ever used, the other states are reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PondStatus {
    #[default]
    Active,
    Stable,
    Dead,
}

impl std::fmt::Display for PondStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PondStatus::Active => "Active",
            PondStatus::Stable => "Stable",
            PondStatus::Dead => "Dead",
        };
        f.write_str(name)
    }
}

/// The field of organisms: a [`Board`] together with the [`LivingIndex`]
/// of its living cells.
///
/// Every write goes through [`Pond::set_cell`], which keeps both structures
/// in agreement: a location is in the index iff its cell is alive.
#[derive(Debug)]
pub struct Pond {
    board: Board,
    living: LivingIndex,
    topology: Topology,
    status: PondStatus,
}

impl Pond {
    pub fn new(dims: Dimensions, topology: Topology) -> Result<Self> {
        Ok(Self {
            board: Board::new(dims)?,
            living: LivingIndex::new(),
            topology,
            status: PondStatus::Active,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn status(&self) -> PondStatus {
        self.status
    }

    /// Clears the pond and makes every location of `seed` alive.
    ///
    /// Neighbor counts of the seed start at zero and are computed by the
    /// first processing pass. Nothing is changed if any location is
    /// outside of the pond.
    pub fn set_organisms(&mut self, seed: &[Location]) -> Result<()> {
        let dims = self.dimensions();
        if let Some(&location) = seed.iter().find(|&&loc| !dims.contains(loc)) {
            return Err(LifeError::OutOfBounds {
                location,
                dimensions: dims,
            });
        }

        self.board = Board::new(dims)?;
        self.living = LivingIndex::new();
        for &location in seed {
            self.set_cell(location, Cell::Alive(0))?;
        }
        Ok(())
    }

    pub fn cell(&self, location: Location) -> Cell {
        self.board.get(location)
    }

    /// Writes `cell`, moving the location in or out of the living index
    /// when it crosses between dead and alive.
    pub fn set_cell(&mut self, location: Location, cell: Cell) -> Result<()> {
        let previous = self.board.set(location, cell)?;
        match (previous.is_alive(), cell.is_alive()) {
            (false, true) => self.living.set(location),
            (true, false) => self.living.remove(location),
            _ => {}
        }
        Ok(())
    }

    /// Raw value of the cell: its neighbor count if alive, negative if dead.
    pub fn organism_value(&self, location: Location) -> i32 {
        self.cell(location).value()
    }

    pub fn set_organism_value(&mut self, location: Location, value: i32) -> Result<()> {
        self.set_cell(location, Cell::from_value(value))
    }

    pub fn is_alive(&self, location: Location) -> bool {
        self.cell(location).is_alive()
    }

    pub fn neighbors_of(&self, location: Location) -> Vec<Location> {
        self.board.neighbors(location, self.topology)
    }

    /// Number of living neighbors together with all the neighbors that were
    /// inspected.
    pub fn count_live_neighbors(&self, location: Location) -> (usize, Vec<Location>) {
        let neighbors = self.neighbors_of(location);
        let count = neighbors.iter().filter(|&&n| self.is_alive(n)).count();
        (count, neighbors)
    }

    pub fn living_count(&self) -> usize {
        self.living.count()
    }

    pub fn all_living(&self) -> Vec<Location> {
        self.living.all()
    }

    /// Deep copy of the pond; mutating it never affects `self`.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            board: self.board.try_clone()?,
            living: self.living.try_clone()?,
            topology: self.topology,
            status: self.status,
        })
    }
}

impl PartialEq for Pond {
    /// Dimensions, topology and every cell match. The living index follows
    /// from the board.
    fn eq(&self, other: &Self) -> bool {
        self.topology == other.topology && self.board == other.board
    }
}

impl Eq for Pond {}

impl std::fmt::Display for Pond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Neighbor selection: {}", self.topology)?;
        writeln!(
            f,
            "Living organisms: {}\tStatus: {}",
            NiceInt::from_usize(self.living_count()),
            self.status
        )?;
        write!(f, "{}", self.board)
    }
}
