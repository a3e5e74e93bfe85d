use super::Cell;
use crate::{Dimensions, LifeError, Location, Result, Topology};

/// Dense storage with one [`Cell`] per location.
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    dims: Dimensions,
}

impl Board {
    /// Creates a board of dead cells.
    pub fn new(dims: Dimensions) -> Result<Self> {
        let dims = dims.validate()?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(dims.area())?;
        cells.resize(dims.area(), Cell::Dead);
        Ok(Self { cells, dims })
    }

    /// Copy that shares no storage with `self`.
    pub fn try_clone(&self) -> Result<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(self.cells.len())?;
        cells.extend_from_slice(&self.cells);
        Ok(Self {
            cells,
            dims: self.dims,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Cells outside of the board are reported dead.
    pub fn get(&self, location: Location) -> Cell {
        self.dims
            .index(location)
            .map_or(Cell::Dead, |i| self.cells[i])
    }

    /// Stores `cell` and returns the previous state.
    pub fn set(&mut self, location: Location, cell: Cell) -> Result<Cell> {
        let i = self.dims.index(location).ok_or(LifeError::OutOfBounds {
            location,
            dimensions: self.dims,
        })?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Neighbors of `location` under `topology`, clipped at the edges.
    pub fn neighbors(&self, location: Location, topology: Topology) -> Vec<Location> {
        topology
            .offsets()
            .iter()
            .filter_map(|&(dx, dy)| location.offset(dx, dy, self.dims))
            .collect()
    }

    pub fn orthogonal_neighbors(&self, location: Location) -> Vec<Location> {
        self.neighbors(location, Topology::Orthogonal)
    }

    pub fn oblique_neighbors(&self, location: Location) -> Vec<Location> {
        self.neighbors(location, Topology::Oblique)
    }

    pub fn all_neighbors(&self, location: Location) -> Vec<Location> {
        self.neighbors(location, Topology::All)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.dims.width) {
            for cell in row {
                match cell {
                    Cell::Dead => f.write_str("-")?,
                    Cell::Alive(n) if *n < 10 => write!(f, "{}", n)?,
                    Cell::Alive(_) => f.write_str("+")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Board {
        Board::new(Dimensions::new(3, 3)).unwrap()
    }

    #[test]
    fn test_new_is_dead() {
        let board = board_3x3();
        assert!(Dimensions::new(3, 3)
            .locations()
            .all(|loc| board.get(loc) == Cell::Dead));
        assert_eq!(board.get(Location::new(10, 10)), Cell::Dead);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Board::new(Dimensions::new(0, 3)),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_set_get() {
        let mut board = board_3x3();
        let loc = Location::new(2, 1);
        assert_eq!(board.set(loc, Cell::Alive(2)).unwrap(), Cell::Dead);
        assert_eq!(board.get(loc), Cell::Alive(2));
        assert_eq!(board.set(loc, Cell::Dead).unwrap(), Cell::Alive(2));
        assert!(matches!(
            board.set(Location::new(3, 0), Cell::Alive(0)),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_neighbor_counts_at_edges() {
        let board = board_3x3();
        let corner = Location::new(0, 0);
        let edge = Location::new(1, 0);
        let center = Location::new(1, 1);

        assert_eq!(board.all_neighbors(corner).len(), 3);
        assert_eq!(board.all_neighbors(edge).len(), 5);
        assert_eq!(board.all_neighbors(center).len(), 8);

        assert_eq!(board.orthogonal_neighbors(corner).len(), 2);
        assert_eq!(board.orthogonal_neighbors(edge).len(), 3);
        assert_eq!(board.orthogonal_neighbors(center).len(), 4);

        assert_eq!(board.oblique_neighbors(corner).len(), 1);
        assert_eq!(board.oblique_neighbors(edge).len(), 2);
        assert_eq!(board.oblique_neighbors(center).len(), 4);
    }

    #[test]
    fn test_neighbors_exact() {
        let board = board_3x3();
        let mut actual = board.all_neighbors(Location::new(0, 1));
        actual.sort();
        let mut expected = vec![
            Location::new(0, 0),
            Location::new(1, 0),
            Location::new(1, 1),
            Location::new(0, 2),
            Location::new(1, 2),
        ];
        expected.sort();
        assert_eq!(actual, expected);

        let single = Board::new(Dimensions::new(1, 1)).unwrap();
        assert!(single.all_neighbors(Location::new(0, 0)).is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = board_3x3();
        board.set(Location::new(1, 1), Cell::Alive(0)).unwrap();
        let mut copy = board.try_clone().unwrap();
        assert_eq!(copy, board);

        copy.set(Location::new(0, 0), Cell::Alive(1)).unwrap();
        assert_eq!(board.get(Location::new(0, 0)), Cell::Dead);
        assert_ne!(copy, board);
    }

    #[test]
    fn test_display() {
        let mut board = board_3x3();
        board.set(Location::new(1, 0), Cell::Alive(2)).unwrap();
        assert_eq!(board.to_string(), "-2-\n---\n---\n");
    }
}
