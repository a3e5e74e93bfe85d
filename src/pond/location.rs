use crate::{LifeError, Result};

/// Size of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

/// Coordinates of a cell, `x` is the column and `y` is the row.
///
/// Ordered row-major, the same order [`Dimensions::locations`] walks in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub y: usize,
    pub x: usize,
}

impl Dimensions {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Fails if either side is zero.
    pub fn validate(self) -> Result<Self> {
        if self.height == 0 || self.width == 0 {
            return Err(LifeError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        Ok(self)
    }

    pub fn area(self) -> usize {
        self.height * self.width
    }

    pub fn contains(self, location: Location) -> bool {
        location.x < self.width && location.y < self.height
    }

    /// Every location of the board in row-major order.
    pub fn locations(self) -> impl DoubleEndedIterator<Item = Location> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Location { x, y }))
    }

    /// Row-major index of `location`, if it is on the board.
    pub(crate) fn index(self, location: Location) -> Option<usize> {
        self.contains(location)
            .then(|| location.x + location.y * self.width)
    }
}

impl Location {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Location shifted by `(dx, dy)`, or `None` if it leaves `dims`.
    pub fn offset(self, dx: isize, dy: isize, dims: Dimensions) -> Option<Location> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let shifted = Location { x, y };
        dims.contains(shifted).then_some(shifted)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
