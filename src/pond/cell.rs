/// State of a single cell.
///
/// A living cell remembers how many living neighbors it had when it was
/// last evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive(usize),
}

impl Cell {
    /// Value reported for dead cells by [`Cell::value`].
    pub const DEAD_VALUE: i32 = -1;

    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    /// Integer view: the neighbor count of a living cell, `-1` otherwise.
    pub fn value(self) -> i32 {
        match self {
            Cell::Dead => Self::DEAD_VALUE,
            Cell::Alive(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }

    /// Inverse of [`Cell::value`], every negative value is dead.
    pub fn from_value(value: i32) -> Self {
        match usize::try_from(value) {
            Ok(n) => Cell::Alive(n),
            Err(_) => Cell::Dead,
        }
    }
}
